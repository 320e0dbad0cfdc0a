//! Visitor pattern for customizing preview rendering.
//!
//! A visitor sees every element before it is projected and may keep it,
//! replace its markup, or drop it, without touching the renderer itself.
//!
//! # Example
//!
//! ```
//! use pagewright::render::visitor::{ElementVisitor, VisitorAction};
//!
//! struct NoQuotes;
//!
//! impl ElementVisitor for NoQuotes {
//!     fn visit_blockquote(&mut self, _content: &str) -> VisitorAction {
//!         VisitorAction::Replace("<!-- quote omitted -->".to_string())
//!     }
//! }
//! ```

use super::markup::heading_html;

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the element with custom markup, emitted verbatim.
    Replace(String),

    /// Skip this element entirely (produce no output).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the element should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Check if this action provides replacement content.
    pub fn is_replace(&self) -> bool {
        matches!(self, VisitorAction::Replace(_))
    }

    /// Get replacement content if available.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            VisitorAction::Replace(s) => Some(s),
            _ => None,
        }
    }
}

/// Trait for visiting elements during preview rendering.
///
/// All methods return `VisitorAction::Continue` by default. Replacement
/// markup is not escaped; implementors own its encoding.
pub trait ElementVisitor: Send + Sync {
    /// Called before rendering a paragraph.
    fn visit_paragraph(&mut self, content: &str) -> VisitorAction {
        let _ = content;
        VisitorAction::Continue
    }

    /// Called before rendering a heading.
    ///
    /// # Arguments
    /// * `text` - The heading text content
    /// * `level` - Heading level (1-6)
    fn visit_heading(&mut self, text: &str, level: u8) -> VisitorAction {
        let _ = (text, level);
        VisitorAction::Continue
    }

    /// Called before rendering an image.
    ///
    /// # Arguments
    /// * `src` - Image source (data URI or URL)
    /// * `alt` - Alt text
    /// * `caption` - Caption, possibly empty
    fn visit_image(&mut self, src: &str, alt: &str, caption: &str) -> VisitorAction {
        let _ = (src, alt, caption);
        VisitorAction::Continue
    }

    /// Called before rendering a blockquote.
    fn visit_blockquote(&mut self, content: &str) -> VisitorAction {
        let _ = content;
        VisitorAction::Continue
    }

    /// Called before rendering an element of an unrecognized kind.
    fn visit_other(&mut self, kind: &str, content: &str) -> VisitorAction {
        let _ = (kind, content);
        VisitorAction::Continue
    }

    /// Called at the start of rendering a page.
    ///
    /// # Arguments
    /// * `page_number` - The 1-indexed page number
    fn on_page_start(&mut self, page_number: u32) {
        let _ = page_number;
    }

    /// Called at the end of rendering a page.
    fn on_page_end(&mut self, page_number: u32) {
        let _ = page_number;
    }
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl ElementVisitor for DefaultVisitor {}

/// Visitor that skips all images.
#[derive(Debug, Clone, Default)]
pub struct SkipImagesVisitor;

impl ElementVisitor for SkipImagesVisitor {
    fn visit_image(&mut self, _src: &str, _alt: &str, _caption: &str) -> VisitorAction {
        VisitorAction::Skip
    }
}

/// Visitor that caps heading depth, demoting deeper headings.
#[derive(Debug, Clone)]
pub struct MaxHeadingDepthVisitor {
    max_level: u8,
}

impl MaxHeadingDepthVisitor {
    /// Create a visitor that limits headings to the specified max level.
    pub fn new(max_level: u8) -> Self {
        Self {
            max_level: max_level.clamp(1, 6),
        }
    }
}

impl ElementVisitor for MaxHeadingDepthVisitor {
    fn visit_heading(&mut self, text: &str, level: u8) -> VisitorAction {
        if level <= self.max_level {
            return VisitorAction::Continue;
        }
        VisitorAction::Replace(heading_html(self.max_level, text))
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn ElementVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: ElementVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    fn first_action(
        &mut self,
        mut visit: impl FnMut(&mut dyn ElementVisitor) -> VisitorAction,
    ) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visit(visitor.as_mut());
            if action != VisitorAction::Continue {
                return action;
            }
        }
        VisitorAction::Continue
    }
}

impl Default for CompositeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementVisitor for CompositeVisitor {
    fn visit_paragraph(&mut self, content: &str) -> VisitorAction {
        self.first_action(|v| v.visit_paragraph(content))
    }

    fn visit_heading(&mut self, text: &str, level: u8) -> VisitorAction {
        self.first_action(|v| v.visit_heading(text, level))
    }

    fn visit_image(&mut self, src: &str, alt: &str, caption: &str) -> VisitorAction {
        self.first_action(|v| v.visit_image(src, alt, caption))
    }

    fn visit_blockquote(&mut self, content: &str) -> VisitorAction {
        self.first_action(|v| v.visit_blockquote(content))
    }

    fn visit_other(&mut self, kind: &str, content: &str) -> VisitorAction {
        self.first_action(|v| v.visit_other(kind, content))
    }

    fn on_page_start(&mut self, page_number: u32) {
        for visitor in &mut self.visitors {
            visitor.on_page_start(page_number);
        }
    }

    fn on_page_end(&mut self, page_number: u32) {
        for visitor in &mut self.visitors {
            visitor.on_page_end(page_number);
        }
    }
}
