//! Rendering: the live canvas and whole-document projections.
//!
//! Both the canvas and the preview go through the same element projector in
//! [`markup`], so an element looks the same while editing and in exports.

pub mod canvas;
mod json;
pub mod markup;
mod options;
pub mod preview;
mod result;
mod text;
pub mod visitor;

pub use canvas::{CanvasNode, CanvasView};
pub use json::{to_json, JsonFormat};
pub use markup::{element_html, escape_html};
pub use options::{PageSelection, PreviewOptions};
pub use preview::{
    to_preview_html, to_preview_html_with, to_preview_html_with_stats, PreviewRenderer, PAGE_BREAK,
};
pub use result::{DocumentStats, RenderResult};
pub use text::to_text;
pub use visitor::{
    CompositeVisitor, DefaultVisitor, ElementVisitor, MaxHeadingDepthVisitor, SkipImagesVisitor,
    VisitorAction,
};
