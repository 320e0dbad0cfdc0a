//! Benchmarks for pagewright projection performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks render synthetic documents of increasing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagewright::model::{Document, Element, Page, TemplateStyles};
use pagewright::{ExportFormat, ExportOptions, ExporterRegistry, TemplateCatalog};

/// Creates a document with the given number of pages of mixed elements.
fn create_test_document(page_count: usize) -> Document {
    let styles = TemplateCatalog::builtin().styles_for("kindle-standard");
    let mut doc = Document::new("kindle-standard", styles).with_title("Benchmark");

    for i in 0..page_count {
        doc.add_page(Page::with_elements(vec![
            Element::heading(2, format!("Chapter {}", i + 1))
                .with_style("fontSize", "18px")
                .with_style("color", "#2c3e50"),
            Element::paragraph(format!(
                "Page {} - Benchmark test content for pagewright <preview> & \"export\" measurement.",
                i + 1
            ))
            .with_style("textAlign", "justify"),
            Element::image("figure.png", "Figure").with_caption("A caption"),
            Element::blockquote("A quoted line."),
        ]));
    }

    doc
}

/// Benchmark element markup projection.
fn bench_element_html(c: &mut Criterion) {
    let element = Element::paragraph("Escaping <tags> & \"quotes\" in 'content'")
        .with_style("fontSize", "14px")
        .with_style("textAlign", "center");

    c.bench_function("element_html", |b| {
        b.iter(|| pagewright::render::element_html(black_box(&element)));
    });
}

/// Benchmark full preview rendering at various sizes.
fn bench_preview(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview");

    for page_count in [1, 10, 100].iter() {
        let doc = create_test_document(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| pagewright::render::to_preview_html(black_box(&doc)));
        });
    }

    group.finish();
}

/// Benchmark exporting every format, sequentially and in parallel.
fn bench_export(c: &mut Criterion) {
    let registry = ExporterRegistry::with_defaults();
    let options = ExportOptions::default();
    let doc = create_test_document(50);

    c.bench_function("export_each_format", |b| {
        b.iter(|| {
            for format in ExportFormat::ALL {
                let _ = registry.export(black_box(&doc), format, &options);
            }
        });
    });

    c.bench_function("export_all_parallel", |b| {
        b.iter(|| registry.export_all(black_box(&doc), &ExportFormat::ALL, &options));
    });
}

criterion_group!(benches, bench_element_html, bench_preview, bench_export);
criterion_main!(benches);
