//! Preview options and page selection.

use crate::error::{Error, Result};
use std::ops::RangeInclusive;

/// Options for projecting a document to preview/export HTML.
#[derive(Debug, Clone)]
pub struct PreviewOptions {
    /// Pages to include (1-indexed)
    pub page_selection: PageSelection,

    /// Emit each element's inline style overrides
    pub include_element_styles: bool,

    /// Title for `<title>`, overriding the document title
    pub title: Option<String>,

    /// Collect statistics during rendering
    pub collect_stats: bool,
}

impl PreviewOptions {
    /// Create new preview options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page selection.
    pub fn with_pages(mut self, selection: PageSelection) -> Self {
        self.page_selection = selection;
        self
    }

    /// Set specific page range.
    pub fn with_page_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.page_selection = PageSelection::Range(range);
        self
    }

    /// Set specific pages.
    pub fn with_page_list(mut self, pages: Vec<u32>) -> Self {
        self.page_selection = PageSelection::Pages(pages);
        self
    }

    /// Enable or disable element inline styles.
    pub fn with_element_styles(mut self, include: bool) -> Self {
        self.include_element_styles = include;
        self
    }

    /// Override the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            page_selection: PageSelection::All,
            include_element_styles: true,
            title: None,
            collect_stats: false,
        }
    }
}

/// Page selection for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// Render all pages
    #[default]
    All,
    /// Render a range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Render specific pages (1-indexed)
    Pages(Vec<u32>),
    /// Render several ranges (inclusive, 1-indexed), sorted and non-overlapping
    Ranges(Vec<RangeInclusive<u32>>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
            PageSelection::Ranges(ranges) => ranges.iter().any(|r| r.contains(&page)),
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s == "all" {
            return Ok(PageSelection::All);
        }

        // Simple range (e.g., "1-10")
        if let Some((start, end)) = s.split_once('-') {
            if !start.contains(',') && !end.contains(',') {
                let (start, end) = parse_bounds(start, end)?;
                return Ok(PageSelection::Range(start..=end));
            }
        }

        let mut ranges = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            let (start, end) = match part.split_once('-') {
                Some((start, end)) => parse_bounds(start, end)?,
                None => {
                    let p = parse_page(part)?;
                    (p, p)
                }
            };
            ranges.push(start..=end);
        }

        Ok(PageSelection::Ranges(merge_ranges(ranges)))
    }
}

/// Sort ranges and join the ones that overlap or touch.
fn merge_ranges(mut ranges: Vec<RangeInclusive<u32>>) -> Vec<RangeInclusive<u32>> {
    ranges.sort_unstable_by_key(|r| *r.start());

    let mut merged: Vec<RangeInclusive<u32>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if *range.start() <= last.end().saturating_add(1) => {
                if range.end() > last.end() {
                    *last = *last.start()..=*range.end();
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}

fn parse_page(s: &str) -> Result<u32> {
    match s.trim().parse::<u32>() {
        Ok(0) => Err(Error::InvalidPageRange("pages are numbered from 1".into())),
        Ok(p) => Ok(p),
        Err(_) => Err(Error::InvalidPageRange(format!("invalid page number: {}", s))),
    }
}

fn parse_bounds(start: &str, end: &str) -> Result<(u32, u32)> {
    let start = parse_page(start)?;
    let end = parse_page(end)?;
    if start > end {
        return Err(Error::InvalidPageRange(format!("{}-{}", start, end)));
    }
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_options_builder() {
        let options = PreviewOptions::new()
            .with_element_styles(false)
            .with_title("Draft")
            .with_page_range(2..=3);

        assert!(!options.include_element_styles);
        assert_eq!(options.title.as_deref(), Some("Draft"));
        assert_eq!(options.page_selection, PageSelection::Range(2..=3));
        assert!(PreviewOptions::default().include_element_styles);
    }

    #[test]
    fn test_page_selection_includes() {
        let all = PageSelection::All;
        assert!(all.includes(1));
        assert!(all.includes(100));

        let range = PageSelection::Range(5..=10);
        assert!(!range.includes(4));
        assert!(range.includes(5));
        assert!(range.includes(10));
        assert!(!range.includes(11));

        let pages = PageSelection::Pages(vec![1, 3, 5, 7]);
        assert!(pages.includes(1));
        assert!(!pages.includes(2));
        assert!(pages.includes(3));
    }

    #[test]
    fn test_page_selection_parse() {
        assert_eq!(PageSelection::parse("all").unwrap(), PageSelection::All);
        assert_eq!(PageSelection::parse("").unwrap(), PageSelection::All);
        assert_eq!(
            PageSelection::parse("1-10").unwrap(),
            PageSelection::Range(1..=10)
        );
        assert_eq!(
            PageSelection::parse("7,1,3,5-7,10").unwrap(),
            PageSelection::Ranges(vec![1..=1, 3..=3, 5..=7, 10..=10])
        );
        assert_eq!(
            PageSelection::parse("4,1-2,3").unwrap(),
            PageSelection::Ranges(vec![1..=4])
        );
    }

    #[test]
    fn test_page_selection_parse_errors() {
        assert!(matches!(
            PageSelection::parse("0-3"),
            Err(Error::InvalidPageRange(_))
        ));
        assert!(PageSelection::parse("5-2").is_err());
        assert!(PageSelection::parse("1,x").is_err());
    }

    #[test]
    fn test_huge_list_range_is_not_expanded() {
        let selection = PageSelection::parse("1,2-4000000000").unwrap();
        assert_eq!(selection, PageSelection::Ranges(vec![1..=4_000_000_000]));
        assert!(selection.includes(1));
        assert!(selection.includes(3_999_999_999));
        assert!(!selection.includes(4_000_000_001));
    }
}
