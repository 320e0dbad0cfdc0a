//! pagewright CLI - page document editing and export tool

mod remote;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pagewright::render::{self, to_preview_html_with_stats, PreviewOptions};
use pagewright::store::FileStore;
use pagewright::template::{BuiltinTemplates, JsonFileTemplates, TemplateSource};
use pagewright::{
    Document, Editor, EditorOptions, ElementId, ExportFormat, ExportOptions, ExportOutcome,
    ExporterRegistry, FileExportSink, ImageInput, Notice, PageSelection, TemplateCatalog,
    TextAlign,
};

use remote::{is_url, RemoteTemplates};

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "pagewright")]
#[command(version)]
#[command(about = "Edit page documents and export them to HTML, e-book, and course formats", long_about = None)]
struct Cli {
    /// Data directory holding documents/ and exports/
    #[arg(long, global = true, env = "PAGEWRIGHT_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Template listing to use instead of the built-in one (JSON file or URL)
    #[arg(long, global = true, value_name = "FILE|URL")]
    templates: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new document with one empty page
    New {
        /// Document title
        #[arg(short, long)]
        title: Option<String>,

        /// Template id
        #[arg(long, env = "PAGEWRIGHT_TEMPLATE")]
        template: Option<String>,
    },

    /// Append an empty page to a document
    AddPage {
        /// Document id
        id: String,
    },

    /// Add an element to a document
    Add {
        /// Document id
        id: String,

        /// Element kind
        #[arg(value_enum)]
        kind: ElementKind,

        /// Text content (placeholder if not specified)
        #[arg(short, long)]
        content: Option<String>,

        /// Image file, for image elements
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Target page (1-indexed, defaults to the first page)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Edit the properties of an element
    Edit {
        /// Document id
        id: String,

        /// Element id
        element: String,

        /// New text content
        #[arg(long)]
        content: Option<String>,

        /// New heading level (1-6)
        #[arg(long)]
        level: Option<u8>,

        /// New image caption
        #[arg(long)]
        caption: Option<String>,

        /// New font size (e.g., "16px")
        #[arg(long)]
        font_size: Option<String>,

        /// New text alignment
        #[arg(long, value_enum)]
        align: Option<Align>,
    },

    /// Delete an element
    Delete {
        /// Document id
        id: String,

        /// Element id
        element: String,
    },

    /// Switch a document to another template
    SetTemplate {
        /// Document id
        id: String,

        /// Template id
        template: String,
    },

    /// Render the full-document preview
    Preview {
        /// Document id
        id: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Leave out per-element inline styles
        #[arg(long)]
        no_styles: bool,
    },

    /// Export a document
    Export {
        /// Document id
        id: String,

        /// Export format (html, pdf, epub, docx, scorm, kindle, json)
        #[arg(short, long, default_value = "html")]
        format: String,

        /// Export every format
        #[arg(long)]
        all: bool,

        /// Output directory (defaults to <data-dir>/exports)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Show document information
    Info {
        /// Document id
        id: String,
    },

    /// List stored documents
    List,

    /// List available templates
    Templates,

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ElementKind {
    /// Paragraph
    Text,
    /// Heading
    Heading,
    /// Blockquote
    Quote,
    /// Image (requires --file)
    Image,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Align {
    Left,
    Center,
    Right,
    Justify,
}

impl From<Align> for TextAlign {
    fn from(align: Align) -> Self {
        match align {
            Align::Left => TextAlign::Left,
            Align::Center => TextAlign::Center,
            Align::Right => TextAlign::Right,
            Align::Justify => TextAlign::Justify,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let ctx = Context {
        store: FileStore::new(cli.data_dir.join("documents")),
        exports_dir: cli.data_dir.join("exports"),
        templates: cli.templates,
    };

    let result = match cli.command {
        Commands::New { title, template } => cmd_new(&ctx, title, template),
        Commands::AddPage { id } => cmd_add_page(&ctx, &id),
        Commands::Add {
            id,
            kind,
            content,
            file,
            page,
        } => cmd_add(&ctx, &id, kind, content, file.as_deref(), page),
        Commands::Edit {
            id,
            element,
            content,
            level,
            caption,
            font_size,
            align,
        } => cmd_edit(
            &ctx,
            &id,
            &element,
            EditFields {
                content,
                level,
                caption,
                font_size,
                align,
            },
        ),
        Commands::Delete { id, element } => cmd_delete(&ctx, &id, &element),
        Commands::SetTemplate { id, template } => cmd_set_template(&ctx, &id, &template),
        Commands::Preview {
            id,
            output,
            pages,
            no_styles,
        } => cmd_preview(&ctx, &id, output.as_deref(), pages.as_deref(), no_styles),
        Commands::Export {
            id,
            format,
            all,
            output,
            pages,
        } => cmd_export(&ctx, &id, &format, all, output, pages.as_deref()),
        Commands::Info { id } => cmd_info(&ctx, &id),
        Commands::List => cmd_list(&ctx),
        Commands::Templates => cmd_templates(&ctx),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

struct Context {
    store: FileStore,
    exports_dir: PathBuf,
    templates: Option<String>,
}

impl Context {
    fn catalog(&self) -> TemplateCatalog {
        let source: Box<dyn TemplateSource> = match self.templates.as_deref() {
            Some(location) if is_url(location) => Box::new(RemoteTemplates::new(location)),
            Some(path) => Box::new(JsonFileTemplates::new(path)),
            None => Box::new(BuiltinTemplates),
        };
        TemplateCatalog::load(source.as_ref())
    }

    fn editor(&self, options: EditorOptions) -> Editor {
        Editor::with_catalog(options, self.catalog())
    }

    /// Open a stored document in a fresh session.
    fn open(&self, id: &str) -> Result<Editor, Box<dyn std::error::Error>> {
        let doc = self.store.load(id)?;
        let mut editor = self.editor(EditorOptions::default());
        editor.load_document(doc);
        Ok(editor)
    }

    fn save(&self, editor: &mut Editor) -> CliResult {
        match editor.save(&self.store) {
            Some(Notice::Error(message)) => Err(message.into()),
            Some(Notice::Info(_)) => Ok(()),
            None => Err("no document to save".into()),
        }
    }
}

fn parse_pages(pages: Option<&str>) -> Result<PageSelection, Box<dyn std::error::Error>> {
    match pages {
        Some(p) => Ok(PageSelection::parse(p).map_err(|e| format!("Invalid page range: {}", e))?),
        None => Ok(PageSelection::All),
    }
}

fn cmd_new(ctx: &Context, title: Option<String>, template: Option<String>) -> CliResult {
    let mut options = EditorOptions::new();
    if let Some(title) = title {
        options = options.with_document_title(title);
    }
    if let Some(template) = template {
        options = options.with_template(template);
    }

    let mut editor = ctx.editor(options);
    if editor.catalog().get(&editor.options().template).is_none() {
        log::warn!(
            "Template {} is not in the catalog; the document gets empty styles",
            editor.options().template
        );
    }
    editor.create_document();
    editor.add_page();
    ctx.save(&mut editor)?;

    let doc = editor.document().ok_or("no document created")?;
    println!("{} {}", "Created".green(), doc.id.bold());
    println!("  {}: {}", "Title".bold(), doc.title);
    println!("  {}: {}", "Template".bold(), doc.template);
    Ok(())
}

fn cmd_add_page(ctx: &Context, id: &str) -> CliResult {
    let mut editor = ctx.open(id)?;
    let index = editor.add_page();
    ctx.save(&mut editor)?;

    println!("{} page {}", "Added".green(), index + 1);
    Ok(())
}

fn cmd_add(
    ctx: &Context,
    id: &str,
    kind: ElementKind,
    content: Option<String>,
    file: Option<&Path>,
    page: usize,
) -> CliResult {
    let mut editor = ctx.open(id)?;
    if page == 0 || !editor.switch_to_page(page - 1) {
        log::info!("Page {} does not exist; adding a new page", page);
        editor.add_page();
    }

    let element_id = match kind {
        ElementKind::Text => editor.add_text_element(),
        ElementKind::Heading => editor.add_heading_element(),
        ElementKind::Quote => editor.add_blockquote_element(),
        ElementKind::Image => {
            let path = file.ok_or("image elements need --file")?;
            let image = ImageInput::from_path(path)?;
            editor.add_image_element(&image)
        }
    };

    if let Some(content) = content {
        if let Some(panel) = editor.properties_mut() {
            if kind == ElementKind::Image {
                panel.set_caption(content);
            } else {
                panel.set_content(content);
            }
        }
        editor.apply_properties();
    }

    ctx.save(&mut editor)?;
    println!(
        "{} {} on page {}",
        "Added".green(),
        element_id.as_str().bold(),
        editor.current_page_index() + 1
    );
    Ok(())
}

struct EditFields {
    content: Option<String>,
    level: Option<u8>,
    caption: Option<String>,
    font_size: Option<String>,
    align: Option<Align>,
}

/// Open a document on the page holding `element` and select it.
fn open_at_element(
    ctx: &Context,
    id: &str,
    element: &str,
) -> Result<Editor, Box<dyn std::error::Error>> {
    let mut editor = ctx.open(id)?;
    let element_id: ElementId = element.into();
    let page = editor
        .document()
        .and_then(|doc| {
            doc.pages
                .iter()
                .position(|p| p.find_element(&element_id).is_some())
        })
        .ok_or_else(|| format!("element {} not found in {}", element, id))?;

    editor.switch_to_page(page);
    editor.select_element(&element_id);
    Ok(editor)
}

fn cmd_edit(ctx: &Context, id: &str, element: &str, fields: EditFields) -> CliResult {
    let mut editor = open_at_element(ctx, id, element)?;
    let panel = editor
        .properties_mut()
        .ok_or_else(|| format!("element {} could not be selected", element))?;

    if let Some(content) = fields.content {
        panel.set_content(content);
    }
    if let Some(level) = fields.level {
        panel.set_level(level);
    }
    if let Some(caption) = fields.caption {
        panel.set_caption(caption);
    }
    if let Some(size) = fields.font_size {
        panel.set_font_size(size);
    }
    if let Some(align) = fields.align {
        panel.set_text_align(align.into());
    }

    editor.apply_properties();
    ctx.save(&mut editor)?;
    println!("{} {}", "Updated".green(), element.bold());
    Ok(())
}

fn cmd_delete(ctx: &Context, id: &str, element: &str) -> CliResult {
    let mut editor = open_at_element(ctx, id, element)?;
    editor.delete_element(&ElementId::from(element));
    ctx.save(&mut editor)?;
    println!("{} {}", "Deleted".green(), element.bold());
    Ok(())
}

fn cmd_set_template(ctx: &Context, id: &str, template: &str) -> CliResult {
    let mut editor = ctx.open(id)?;
    if editor.catalog().get(template).is_none() {
        return Err(format!("unknown template: {}", template).into());
    }
    editor.change_template(template);
    ctx.save(&mut editor)?;
    println!("{} {}", "Template set to".green(), template.bold());
    Ok(())
}

fn cmd_preview(
    ctx: &Context,
    id: &str,
    output: Option<&Path>,
    pages: Option<&str>,
    no_styles: bool,
) -> CliResult {
    let doc = ctx.store.load(id)?;
    let options = PreviewOptions::new()
        .with_pages(parse_pages(pages)?)
        .with_element_styles(!no_styles);
    let html = render::to_preview_html_with(&doc, &options)?;

    if let Some(path) = output {
        fs::write(path, &html)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", html);
    }

    Ok(())
}

fn cmd_export(
    ctx: &Context,
    id: &str,
    format: &str,
    all: bool,
    output: Option<PathBuf>,
    pages: Option<&str>,
) -> CliResult {
    let options = ExportOptions::new()
        .with_preview_options(PreviewOptions::new().with_pages(parse_pages(pages)?));
    let dir = output.unwrap_or_else(|| ctx.exports_dir.clone());
    let sink = FileExportSink::new(dir).with_options(options.clone());

    if all {
        let doc = ctx.store.load(id)?;
        return export_all(&sink, &doc, &options);
    }

    let format: ExportFormat = format.parse()?;
    let editor = ctx.open(id)?;
    let outcome = editor.export(&sink, format);
    match outcome {
        ExportOutcome::Download { ref filename, .. } => {
            println!("{}", outcome.notice().to_string().green());
            println!(
                "  {} {}",
                "└─".dimmed(),
                sink.path_for(filename).display()
            );
            Ok(())
        }
        _ => Err(outcome.notice().to_string().into()),
    }
}

fn export_all(sink: &FileExportSink, doc: &Document, options: &ExportOptions) -> CliResult {
    let registry = ExporterRegistry::with_defaults();
    let formats = registry.formats();

    let pb = ProgressBar::new(formats.len() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Rendering...");
    let results = registry.export_all(doc, &formats, options);
    pb.inc(1);

    let mut written = Vec::new();
    let mut failed = Vec::new();
    for (format, result) in results {
        pb.set_message(format!("Writing {}...", format));
        match result.and_then(|r| sink.write(&r).map(|_| r.filename)) {
            Ok(filename) => written.push(filename),
            Err(e) => failed.push(format!("{}: {}", format, e)),
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, filename) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), filename);
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(format!("Export failed: {}", failed.join("; ")).into())
    }
}

fn cmd_info(ctx: &Context, id: &str) -> CliResult {
    let doc = ctx.store.load(id)?;
    let stats = to_preview_html_with_stats(&doc, &PreviewOptions::default())?.stats;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Id".bold(), doc.id);
    println!("{}: {}", "Title".bold(), doc.title);
    println!("{}: {}", "Template".bold(), doc.template);
    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!(
        "{}: {}",
        "Created".bold(),
        doc.metadata.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "{}: {}",
        "Modified".bold(),
        doc.metadata.last_modified.format("%Y-%m-%d %H:%M:%S")
    );

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Elements".bold(), stats.element_count());
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Images".bold(), stats.image_count);
    println!("{}: {}", "Quotes".bold(), stats.blockquote_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    let outline = doc.outline();
    if !outline.is_empty() {
        println!();
        println!("{}", "Outline".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for item in outline.up_to_level(6) {
            let indent = "  ".repeat(item.level.saturating_sub(1) as usize);
            println!("{}{} {}", indent, item.title, format!("p. {}", item.page).dimmed());
        }
    }

    Ok(())
}

fn cmd_list(ctx: &Context) -> CliResult {
    let summaries = ctx.store.list()?;
    if summaries.is_empty() {
        println!("{}", "No documents".yellow());
        return Ok(());
    }

    for summary in summaries {
        println!(
            "{}  {}  {}",
            summary.id.bold(),
            summary.title,
            format!(
                "{} pages, {} elements, {}",
                summary.page_count,
                summary.element_count,
                summary.last_modified.format("%Y-%m-%d %H:%M")
            )
            .dimmed()
        );
    }
    Ok(())
}

fn cmd_templates(ctx: &Context) -> CliResult {
    let catalog = ctx.catalog();
    if catalog.is_empty() {
        return Err("no templates available".into());
    }

    for template in catalog.iter() {
        let description = template.description.as_deref().unwrap_or("");
        println!(
            "{}  {}  {}",
            template.id.cyan().bold(),
            template.name,
            description.dimmed()
        );
    }

    println!();
    println!(
        "{}",
        serde_json::to_string(&catalog.iter().map(|t| &t.id).collect::<Vec<_>>())?.dimmed()
    );
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pagewright".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Page document editor and exporter");
    println!();
    println!(
        "Export formats: {}",
        ExportFormat::ALL
            .iter()
            .map(ExportFormat::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("License: MIT");
}
