//! The editor session.
//!
//! [`Editor`] owns the document being edited together with the view state
//! around it: the current page, the selection, the rendered canvas, and the
//! properties panel bound to the selection. Every user action goes through
//! `&mut Editor`, either by calling the operation directly or through
//! [`Editor::dispatch`].
//!
//! Missing targets are never errors. Operations on an unknown element or an
//! out-of-range page leave the session untouched and report `false`/`None`.
//!
//! # Example
//!
//! ```
//! use pagewright::editor::{Editor, EditorOptions};
//! use pagewright::model::TextAlign;
//!
//! let mut editor = Editor::new(EditorOptions::default());
//! let id = editor.add_heading_element();
//!
//! if let Some(panel) = editor.properties_mut() {
//!     panel.set_content("Chapter One");
//!     panel.set_text_align(TextAlign::Center);
//! }
//! editor.apply_properties();
//!
//! assert_eq!(editor.find_element(&id).and_then(|e| e.content()), Some("Chapter One"));
//! ```

mod action;
mod options;
mod outcome;
mod properties;
mod selection;

pub use action::EditorAction;
pub use options::EditorOptions;
pub use outcome::{ExportOutcome, Notice};
pub use properties::{PropertiesPanel, DEFAULT_FONT_SIZE};
pub use selection::Selection;

use crate::export::{ExportFormat, ExportSink};
use crate::image::ImageInput;
use crate::model::{Document, Element, ElementId, ElementPatch, Page, Styles};
use crate::render::{to_preview_html, CanvasView};
use crate::store::SaveSink;
use crate::template::{TemplateCatalog, TemplateSource};
use serde::Serialize;

/// Whether the session shows the editable canvas or the full preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Editable canvas of the current page
    #[default]
    Edit,
    /// Read-only preview of the whole document
    Preview,
}

/// Entry of the page sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageListItem {
    /// Page index (0-based)
    pub index: usize,
    /// Display label, e.g. "Page 2"
    pub label: String,
    /// Whether this is the current page
    pub active: bool,
}

/// An editing session over at most one document.
#[derive(Debug, Clone)]
pub struct Editor {
    options: EditorOptions,
    catalog: TemplateCatalog,
    document: Option<Document>,
    current_page: usize,
    selection: Selection,
    canvas: CanvasView,
    properties: Option<PropertiesPanel>,
    view_mode: ViewMode,
}

impl Editor {
    /// Create a session with the built-in templates.
    pub fn new(options: EditorOptions) -> Self {
        Self::with_catalog(options, TemplateCatalog::builtin())
    }

    /// Create a session with a preloaded template catalog.
    pub fn with_catalog(options: EditorOptions, catalog: TemplateCatalog) -> Self {
        Self {
            options,
            catalog,
            document: None,
            current_page: 0,
            selection: Selection::Unselected,
            canvas: CanvasView::new(),
            properties: None,
            view_mode: ViewMode::Edit,
        }
    }

    /// Create a session, loading templates from `source`.
    ///
    /// A failing source yields an empty catalog; the session still works and
    /// new documents get empty styles.
    pub fn with_source(options: EditorOptions, source: &dyn TemplateSource) -> Self {
        Self::with_catalog(options, TemplateCatalog::load(source))
    }

    // ---- document and pages ----

    /// Start a fresh document, replacing any open one.
    pub fn create_document(&mut self) -> &Document {
        self.reset_view();
        let doc = self.new_document();
        log::debug!("Created document {} ({})", doc.id, doc.template);
        self.document.insert(doc)
    }

    /// Replace the open document with a loaded one and show its first page.
    pub fn load_document(&mut self, doc: Document) {
        log::debug!("Loaded document {} ({} pages)", doc.id, doc.page_count());
        self.reset_view();
        self.document = Some(doc);
        self.render_current_page();
    }

    /// Append an empty page and switch to it, creating the document if needed.
    ///
    /// Returns the new page's index.
    pub fn add_page(&mut self) -> usize {
        let doc = self.document_or_create();
        let index = doc.add_page(Page::new());
        doc.touch();
        log::debug!("Added page {} to {}", index + 1, doc.id);

        self.current_page = index;
        self.clear_selection();
        self.render_current_page();
        index
    }

    /// Append an element to a page.
    ///
    /// When the page does not exist a new page is added (and switched to)
    /// first. Returns the index of the page the element landed on.
    pub fn add_element(&mut self, page_index: usize, element: Element) -> usize {
        let has_page = self.document_or_create().page(page_index).is_some();
        let index = if has_page {
            page_index
        } else {
            self.add_page()
        };

        if let Some(doc) = self.document.as_mut() {
            if let Some(page) = doc.page_mut(index) {
                log::debug!(
                    "Added {} {} to page {}",
                    element.kind(),
                    element.id,
                    index + 1
                );
                page.add_element(element);
                doc.touch();
            }
        }

        self.render_current_page();
        index
    }

    /// Show another page. Out-of-range indices are ignored.
    ///
    /// The selection never survives a switch, even to the same page.
    pub fn switch_to_page(&mut self, index: usize) -> bool {
        let exists = self
            .document
            .as_ref()
            .is_some_and(|doc| doc.page(index).is_some());
        if !exists {
            return false;
        }

        self.current_page = index;
        self.clear_selection();
        self.render_current_page();
        true
    }

    /// Entries for the page sidebar.
    pub fn page_list(&self) -> Vec<PageListItem> {
        let count = self.document.as_ref().map_or(0, Document::page_count);
        (0..count)
            .map(|index| PageListItem {
                index,
                label: format!("Page {}", index + 1),
                active: index == self.current_page,
            })
            .collect()
    }

    /// Switch the document to another template, replacing its styles.
    ///
    /// Unknown template ids get empty styles. Returns `false` when no document
    /// is open.
    pub fn change_template(&mut self, template_id: &str) -> bool {
        let styles = self.catalog.styles_for(template_id);
        let Some(doc) = self.document.as_mut() else {
            return false;
        };

        doc.template = template_id.to_string();
        doc.styles = styles;
        doc.touch();
        log::debug!("Document {} now uses template {}", doc.id, template_id);

        self.render_current_page();
        true
    }

    // ---- elements ----

    /// Find an element on the current page.
    pub fn find_element(&self, id: &ElementId) -> Option<&Element> {
        self.current_page()
            .and_then(|page| page.find_element(id))
    }

    /// Merge a patch into an element of the current page.
    ///
    /// Returns `false` (and changes nothing) when the element is not there.
    pub fn update_element(&mut self, id: &ElementId, patch: &ElementPatch) -> bool {
        let current = self.current_page;
        let Some(doc) = self.document.as_mut() else {
            return false;
        };
        let Some(element) = doc
            .page_mut(current)
            .and_then(|page| page.find_element_mut(id))
        else {
            return false;
        };

        element.apply_patch(patch);
        let refreshed = PropertiesPanel::from_element(element);
        doc.touch();
        log::debug!("Updated element {}", id);

        if self.selection.is(id) {
            self.properties = Some(refreshed);
        }
        self.render_current_page();
        true
    }

    /// Remove an element from the current page.
    pub fn delete_element(&mut self, id: &ElementId) -> bool {
        let current = self.current_page;
        let Some(doc) = self.document.as_mut() else {
            return false;
        };
        if doc
            .page_mut(current)
            .and_then(|page| page.remove_element(id))
            .is_none()
        {
            return false;
        }
        doc.touch();
        log::debug!("Deleted element {}", id);

        if self.selection.is(id) {
            self.clear_selection();
        }
        self.render_current_page();
        true
    }

    /// Add a placeholder paragraph to the current page and select it.
    pub fn add_text_element(&mut self) -> ElementId {
        let element = Element::paragraph(self.options.placeholder_text.clone()).with_styles(
            Styles::new()
                .with("fontSize", "14px")
                .with("fontFamily", "Georgia")
                .with("lineHeight", "1.4")
                .with("textAlign", "justify"),
        );
        self.add_to_current_page(element)
    }

    /// Add a placeholder heading to the current page and select it.
    pub fn add_heading_element(&mut self) -> ElementId {
        let element = Element::heading(
            self.options.default_heading_level,
            self.options.heading_placeholder.clone(),
        )
        .with_styles(
            Styles::new()
                .with("fontSize", "18px")
                .with("fontFamily", "Georgia")
                .with("fontWeight", "bold")
                .with("color", "#2c3e50")
                .with("marginBottom", "15px"),
        );
        self.add_to_current_page(element)
    }

    /// Add a placeholder blockquote to the current page and select it.
    pub fn add_blockquote_element(&mut self) -> ElementId {
        let element = Element::blockquote(self.options.quote_placeholder.clone()).with_styles(
            Styles::new()
                .with("fontStyle", "italic")
                .with("margin", "1em 2em")
                .with("paddingLeft", "1em")
                .with("borderLeft", "3px solid #cccccc"),
        );
        self.add_to_current_page(element)
    }

    /// Add a picked image to the current page and select it.
    ///
    /// The data URI becomes the source and the file name the alt text.
    pub fn add_image_element(&mut self, image: &ImageInput) -> ElementId {
        let element = Element::image(image.data_uri.clone(), image.file_name.clone()).with_styles(
            Styles::new()
                .with("maxWidth", "100%")
                .with("height", "auto")
                .with("display", "block")
                .with("margin", "1em auto"),
        );
        self.add_to_current_page(element)
    }

    fn add_to_current_page(&mut self, element: Element) -> ElementId {
        let id = element.id.clone();
        self.add_element(self.current_page, element);
        self.select_element(&id);
        id
    }

    // ---- selection and properties ----

    /// Select an element rendered on the current page.
    ///
    /// Ids not on the current page are ignored.
    pub fn select_element(&mut self, id: &ElementId) -> bool {
        if !self.canvas.contains(id) {
            return false;
        }
        let Some(panel) = self.find_element(id).map(PropertiesPanel::from_element) else {
            return false;
        };

        self.selection = Selection::Selected(id.clone());
        self.properties = Some(panel);
        self.canvas.mark_selected(Some(id));
        true
    }

    /// Drop the selection and unbind the properties panel.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.properties = None;
        self.canvas.mark_selected(None);
    }

    /// Commit the properties panel to its element and re-select it.
    ///
    /// A no-op when nothing is selected or the element is gone.
    pub fn apply_properties(&mut self) -> bool {
        let Some(panel) = self.properties.as_ref() else {
            return false;
        };
        let id = panel.element_id.clone();
        let patch = panel.to_patch();

        if !self.update_element(&id, &patch) {
            return false;
        }
        self.select_element(&id)
    }

    // ---- views ----

    /// Re-project the current page onto the canvas.
    pub fn render_current_page(&mut self) {
        self.canvas
            .render(self.document.as_ref(), self.current_page, self.selection.id());
    }

    /// Flip between editing and preview; returns the new mode.
    pub fn toggle_preview(&mut self) -> ViewMode {
        self.view_mode = match self.view_mode {
            ViewMode::Edit => ViewMode::Preview,
            ViewMode::Preview => ViewMode::Edit,
        };
        self.view_mode
    }

    /// Full-document preview of the open document.
    pub fn preview_html(&self) -> Option<String> {
        self.document.as_ref().map(to_preview_html)
    }

    // ---- I/O ----

    /// Send the document to an export sink.
    pub fn export(&self, sink: &dyn ExportSink, format: ExportFormat) -> ExportOutcome {
        let Some(doc) = self.document.as_ref() else {
            return ExportOutcome::NoDocument;
        };

        let outcome = match sink.export(doc, format) {
            Ok(response) => ExportOutcome::from_response(format, response),
            Err(e) => ExportOutcome::Failed(e.to_string()),
        };
        if let ExportOutcome::Failed(ref error) = outcome {
            log::error!("Export of {} as {} failed: {}", doc.id, format, error);
        }
        outcome
    }

    /// Save the document through a save sink.
    ///
    /// Returns `None` when no document is open.
    pub fn save(&mut self, sink: &dyn SaveSink) -> Option<Notice> {
        let doc = self.document.as_mut()?;
        doc.touch();

        let notice = match sink.save(doc) {
            Ok(receipt) if receipt.success => {
                log::info!("Document {} saved: {}", receipt.document_id, receipt.message);
                Notice::Info(receipt.message)
            }
            Ok(receipt) => Notice::Error(format!("Save failed: {}", receipt.message)),
            Err(e) => Notice::Error(format!("Save failed: {}", e)),
        };
        if notice.is_error() {
            log::error!("{}", notice);
        }
        Some(notice)
    }

    /// Apply a user action. Returns `false` when it had no effect.
    pub fn dispatch(&mut self, action: EditorAction) -> bool {
        match action {
            EditorAction::NewDocument => {
                self.create_document();
                true
            }
            EditorAction::AddPage => {
                self.add_page();
                true
            }
            EditorAction::AddText => {
                self.add_text_element();
                true
            }
            EditorAction::AddHeading => {
                self.add_heading_element();
                true
            }
            EditorAction::AddBlockquote => {
                self.add_blockquote_element();
                true
            }
            EditorAction::AddImage(image) => {
                self.add_image_element(&image);
                true
            }
            EditorAction::SwitchPage(index) => self.switch_to_page(index),
            EditorAction::Select(id) => self.select_element(&id),
            EditorAction::Delete(id) => self.delete_element(&id),
            EditorAction::ApplyProperties => self.apply_properties(),
            EditorAction::ChangeTemplate(id) => self.change_template(&id),
            EditorAction::TogglePreview => {
                self.toggle_preview();
                true
            }
        }
    }

    // ---- accessors ----

    /// Session options.
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Loaded templates.
    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// The open document.
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Close the session, handing back the document.
    pub fn into_document(self) -> Option<Document> {
        self.document
    }

    /// Index of the current page.
    pub fn current_page_index(&self) -> usize {
        self.current_page
    }

    /// The current page, if the document has it.
    pub fn current_page(&self) -> Option<&Page> {
        self.document
            .as_ref()
            .and_then(|doc| doc.page(self.current_page))
    }

    /// Selection state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Rendered canvas of the current page.
    pub fn canvas(&self) -> &CanvasView {
        &self.canvas
    }

    /// Properties panel of the selected element.
    pub fn properties(&self) -> Option<&PropertiesPanel> {
        self.properties.as_ref()
    }

    /// Properties panel for editing before [`Editor::apply_properties`].
    pub fn properties_mut(&mut self) -> Option<&mut PropertiesPanel> {
        self.properties.as_mut()
    }

    /// Current view mode.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    fn new_document(&self) -> Document {
        Document::new(
            self.options.template.clone(),
            self.catalog.styles_for(&self.options.template),
        )
        .with_title(self.options.document_title.clone())
    }

    fn document_or_create(&mut self) -> &mut Document {
        let doc = match self.document.take() {
            Some(doc) => doc,
            None => {
                self.reset_view();
                let doc = self.new_document();
                log::debug!("Created document {} ({})", doc.id, doc.template);
                doc
            }
        };
        self.document.insert(doc)
    }

    fn reset_view(&mut self) {
        self.current_page = 0;
        self.selection.clear();
        self.properties = None;
        self.canvas.clear();
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}
