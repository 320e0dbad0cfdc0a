//! Image input: user-picked image files embedded as data URIs.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use std::fs;
use std::path::Path;

/// An image picked by the user, ready to be embedded in an image element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    /// `data:<mime>;base64,<payload>`
    pub data_uri: String,

    /// Original file name, used as alt text
    pub file_name: String,

    /// Detected MIME type
    pub mime_type: &'static str,

    /// Size of the raw image in bytes
    pub size: usize,
}

impl ImageInput {
    /// Build from raw bytes.
    ///
    /// The MIME type is detected from magic bytes, falling back to the file
    /// extension. Anything that is not an image is rejected.
    pub fn from_bytes(data: &[u8], file_name: impl Into<String>) -> Result<Self> {
        let file_name = file_name.into();
        let mime_type = detect_mime_type(data)
            .or_else(|| mime_from_extension(&file_name))
            .ok_or_else(|| {
                Error::InvalidImage(format!("{} is not a recognized image", file_name))
            })?;

        Ok(Self {
            data_uri: to_data_uri(data, mime_type),
            file_name,
            mime_type,
            size: data.len(),
        })
    }

    /// Read an image file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        Self::from_bytes(&data, file_name_of(path))
    }

    /// Read an image file without blocking the calling task.
    #[cfg(feature = "async")]
    pub async fn from_path_async<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        Self::from_bytes(&data, file_name_of(path))
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Encode bytes as a base64 data URI.
pub fn to_data_uri(data: &[u8], mime_type: &str) -> String {
    format!("data:{};base64,{}", mime_type, BASE64_STANDARD.encode(data))
}

/// Detect an image MIME type from magic bytes.
pub fn detect_mime_type(data: &[u8]) -> Option<&'static str> {
    if data.len() < 4 {
        return None;
    }

    // JPEG: FF D8 FF
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }

    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("image/png");
    }

    // GIF: GIF87a or GIF89a
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Some("image/gif");
    }

    // WEBP: RIFF....WEBP
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Some("image/webp");
    }

    // BMP: BM
    if data.starts_with(b"BM") {
        return Some("image/bmp");
    }

    // SVG: text, possibly behind an XML prolog
    let head = String::from_utf8_lossy(&data[..data.len().min(256)]);
    let head = head.trim_start();
    if head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg")) {
        return Some("image/svg+xml");
    }

    None
}

/// Guess an image MIME type from a file name's extension.
pub fn mime_from_extension(file_name: &str) -> Option<&'static str> {
    let ext = Path::new(file_name)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_detect_mime_type() {
        let jpeg_data = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
        assert_eq!(detect_mime_type(&jpeg_data), Some("image/jpeg"));
        assert_eq!(detect_mime_type(&PNG_HEADER), Some("image/png"));
        assert_eq!(detect_mime_type(b"GIF89a\x01\x00"), Some("image/gif"));
        assert_eq!(
            detect_mime_type(b"<?xml version=\"1.0\"?><svg></svg>"),
            Some("image/svg+xml")
        );
        assert_eq!(detect_mime_type(&[0x00, 0x00, 0x00, 0x00]), None);
        assert_eq!(detect_mime_type(b""), None);
    }

    #[test]
    fn test_from_bytes_builds_data_uri() {
        let image = ImageInput::from_bytes(&PNG_HEADER, "cover.png").unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.size, 8);
        assert_eq!(image.data_uri, "data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(image.file_name, "cover.png");
    }

    #[test]
    fn test_extension_fallback() {
        let image = ImageInput::from_bytes(&[1, 2, 3], "photo.JPG").unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
    }

    #[test]
    fn test_non_image_rejected() {
        let result = ImageInput::from_bytes(b"%PDF-1.7 not an image", "doc.pdf");
        assert!(matches!(result, Err(Error::InvalidImage(_))));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        fs::write(&path, PNG_HEADER).unwrap();

        let image = ImageInput::from_path(&path).unwrap();
        assert_eq!(image.file_name, "pixel.png");
        assert!(image.data_uri.starts_with("data:image/png;base64,"));
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_from_path_async() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        fs::write(&path, PNG_HEADER).unwrap();

        let image = ImageInput::from_path_async(&path).await.unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.file_name, "pixel.png");
    }
}
