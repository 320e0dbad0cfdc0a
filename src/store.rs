//! Flat-file document persistence.
//!
//! Each document lives in `<dir>/<id>.json`, pretty-printed in the same
//! camelCase wire format the editor reads back.

use crate::error::{Error, Result};
use crate::model::Document;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reply to a save request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReceipt {
    /// Whether the document was stored
    pub success: bool,

    /// Human-readable status
    pub message: String,

    /// Id of the stored document
    pub document_id: String,
}

/// Destination for explicit saves from the editor.
pub trait SaveSink {
    /// Persist the whole document.
    fn save(&self, doc: &Document) -> Result<SaveReceipt>;
}

/// Listing entry for a stored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    /// Document id
    pub id: String,
    /// Document title
    pub title: String,
    /// Template id
    pub template: String,
    /// Number of pages
    pub page_count: usize,
    /// Number of elements across all pages
    pub element_count: usize,
    /// Last modification time
    pub last_modified: DateTime<Utc>,
}

impl From<&Document> for DocumentSummary {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            title: doc.title.clone(),
            template: doc.template.clone(),
            page_count: doc.page_count(),
            element_count: doc.element_count(),
            last_modified: doc.metadata.last_modified,
        }
    }
}

/// Document store backed by a directory of JSON files.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store over `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Backing directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for a document id.
    ///
    /// Ids are restricted to ASCII letters, digits, `-` and `_` so they can
    /// never leave the store directory.
    pub fn path_for(&self, id: &str) -> Result<PathBuf> {
        if id.is_empty()
            || !id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::Other(format!("invalid document id: {:?}", id)));
        }
        Ok(self.dir.join(format!("{}.json", id)))
    }

    /// Write a document, refreshing its modification time in the stored copy.
    pub fn write(&self, doc: &Document) -> Result<PathBuf> {
        let path = self.path_for(&doc.id)?;
        let mut stored = doc.clone();
        stored.touch();

        fs::create_dir_all(&self.dir)?;
        fs::write(&path, serde_json::to_string_pretty(&stored)?)?;
        log::debug!("Wrote document {} to {}", doc.id, path.display());
        Ok(path)
    }

    /// Load a document by id.
    pub fn load(&self, id: &str) -> Result<Document> {
        let path = self.path_for(id)?;
        let json = fs::read_to_string(&path).map_err(|e| not_found_or(e, id))?;
        Document::from_json(&json)
    }

    /// Check whether a document is stored.
    pub fn exists(&self, id: &str) -> bool {
        self.path_for(id).map(|p| p.is_file()).unwrap_or(false)
    }

    /// Delete a stored document.
    pub fn delete(&self, id: &str) -> Result<()> {
        let path = self.path_for(id)?;
        fs::remove_file(&path).map_err(|e| not_found_or(e, id))?;
        log::debug!("Deleted document {}", id);
        Ok(())
    }

    /// Summaries of all stored documents, most recently modified first.
    ///
    /// Files that do not parse as documents are skipped with a warning.
    pub fn list(&self) -> Result<Vec<DocumentSummary>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut summaries = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match fs::read_to_string(&path)
                .map_err(Error::from)
                .and_then(|json| Document::from_json(&json))
            {
                Ok(doc) => summaries.push(DocumentSummary::from(&doc)),
                Err(e) => log::warn!("Skipping {}: {}", path.display(), e),
            }
        }

        summaries.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        Ok(summaries)
    }
}

impl SaveSink for FileStore {
    fn save(&self, doc: &Document) -> Result<SaveReceipt> {
        self.write(doc)?;
        log::info!("Saved document {}", doc.id);
        Ok(SaveReceipt {
            success: true,
            message: "Document saved".to_string(),
            document_id: doc.id.clone(),
        })
    }
}

fn not_found_or(e: io::Error, id: &str) -> Error {
    if e.kind() == io::ErrorKind::NotFound {
        Error::DocumentNotFound(id.to_string())
    } else {
        Error::Io(e)
    }
}
