//! Single-page course export with per-page completion tracking.

use super::{export_title, render_page_list, ExportFormat, ExportOptions, Exporter};
use crate::error::Result;
use crate::model::Document;
use crate::render::markup::escape_html;
use crate::render::preview::html_page_with_head;
use crate::render::DocumentStats;

const SCORM_CSS: &str = "\
        body { font-family: Arial, sans-serif; line-height: 1.6; margin: 20px; }
        .lesson { margin-bottom: 30px; padding: 20px; border: 1px solid #ddd; }
        .lesson.completed { opacity: 0.7; }
        .progress { background: #f0f0f0; height: 20px; border-radius: 10px; margin: 10px 0; }
        .progress-bar { background: #4CAF50; height: 100%; border-radius: 10px; width: 0%; }
        img { max-width: 100%; height: auto; }
        .caption { font-style: italic; text-align: center; margin-top: 0.5em; }
";

/// Completion tracking. Only the page count is interpolated.
const SCORM_SCRIPT: &str = "\
<script>
    var completed = {};
    function completeLesson(index, total) {
        if (completed[index]) { return; }
        completed[index] = true;
        document.getElementById('lesson-' + index).className += ' completed';
        var done = Object.keys(completed).length;
        document.getElementById('progress').style.width = (done / total * 100) + '%';
    }
</script>";

/// Exporter producing a course page with one lesson per document page.
#[derive(Debug, Clone, Default)]
pub struct ScormExporter;

impl ScormExporter {
    /// Create a new SCORM exporter.
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for ScormExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Scorm
    }

    fn render(&self, doc: &Document, options: &ExportOptions) -> Result<(String, DocumentStats)> {
        let (pages, stats) = render_page_list(doc, options);
        let title = export_title(doc, options);
        let total = pages.len();

        let mut body = format!(
            "<h1>{}</h1>\n<div class=\"progress\"><div class=\"progress-bar\" id=\"progress\"></div></div>\n",
            escape_html(title)
        );
        for (index, page) in pages.iter().enumerate() {
            body.push_str(&format!(
                "<div class=\"lesson\" id=\"lesson-{index}\">\n<h2>Lesson {number}</h2>\n{page}\n<button onclick=\"completeLesson({index}, {total})\">Mark as complete</button>\n</div>\n",
                number = index + 1
            ));
        }
        body.push_str(SCORM_SCRIPT);

        Ok((html_page_with_head(title, "", SCORM_CSS, &body), stats))
    }
}
