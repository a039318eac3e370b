//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use modocs_core::DocumentManager;
use modocs_export::{PdfClient, PdfRequest, ServerConfig};
use modocs_shared::{
    AppConfig, DocId, Document, DocumentKind, Tone, expand_home, init_config, load_config,
};
use modocs_storage::JsonFileStore;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// MoDocs — build, manage, and export business documents.
#[derive(Parser)]
#[command(
    name = "modocs",
    version,
    about = "Build, manage, and export business documents from your terminal.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Override the document collection file.
    #[arg(long, global = true)]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Create a new document draft.
    New {
        /// Document type (invoice, contract, memo, "purchase order", …).
        doc_type: String,

        /// Document title.
        #[arg(short, long)]
        title: Option<String>,

        /// Author (defaults to the configured author).
        #[arg(short, long)]
        author: Option<String>,

        /// Tone: professional, friendly, formal, or casual.
        #[arg(long)]
        tone: Option<String>,

        /// Custom type name (required for "other").
        #[arg(long)]
        custom_type: Option<String>,

        /// Seed the body with the built-in sample data.
        #[arg(long)]
        sample: bool,

        /// Validate and save as completed instead of an in-progress draft.
        #[arg(long)]
        complete: bool,
    },

    /// List stored documents.
    List {
        /// Case-insensitive title/author filter.
        #[arg(short, long)]
        query: Option<String>,

        /// Filter by document type.
        #[arg(short = 't', long = "type")]
        doc_type: Option<String>,

        /// Include in-progress drafts.
        #[arg(long)]
        all: bool,
    },

    /// Print a rendered preview of one document.
    Show {
        /// Document id.
        id: String,
    },

    /// Export a document (or the whole collection).
    Export {
        /// Document id. Omit with --all-docs.
        id: Option<String>,

        /// Output format.
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// Output path (defaults to <export_dir>/<title>.<ext>).
        #[arg(short, long)]
        out: Option<String>,

        /// Export every stored document as one JSON array.
        #[arg(long)]
        all_docs: bool,
    },

    /// Delete a document by id.
    Delete {
        /// Document id.
        id: String,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Start the generate-pdf HTTP service.
    Serve {
        /// Bind address.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Bind port.
        #[arg(long, default_value = "3100")]
        port: u16,
    },

    /// Launch the interactive TUI wizard.
    Tui,

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Export output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum ExportFormat {
    Json,
    Text,
    Html,
    Doc,
    Pdf,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "txt",
            Self::Html => "html",
            Self::Doc => "doc",
            Self::Pdf => "pdf",
        }
    }
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "modocs=info",
        1 => "modocs=debug",
        _ => "modocs=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let config = load_config()?;
    let store_path = match &cli.store {
        Some(path) => expand_home(path)?,
        None => config.resolved_store_path()?,
    };

    match cli.command {
        Command::New {
            doc_type,
            title,
            author,
            tone,
            custom_type,
            sample,
            complete,
        } => {
            cmd_new(
                &config,
                store_path,
                &doc_type,
                title.as_deref(),
                author.as_deref(),
                tone.as_deref(),
                custom_type.as_deref(),
                sample,
                complete,
            )
            .await
        }
        Command::List {
            query,
            doc_type,
            all,
        } => cmd_list(store_path, query.as_deref(), doc_type.as_deref(), all).await,
        Command::Show { id } => cmd_show(store_path, &id).await,
        Command::Export {
            id,
            format,
            out,
            all_docs,
        } => cmd_export(&config, store_path, id.as_deref(), format, out.as_deref(), all_docs).await,
        Command::Delete { id, yes } => cmd_delete(store_path, &id, yes).await,
        Command::Serve { host, port } => cmd_serve(&config, &host, port).await,
        Command::Tui => cmd_tui().await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

fn manager_for(store_path: PathBuf) -> DocumentManager {
    DocumentManager::new(Arc::new(JsonFileStore::new(store_path)))
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
async fn cmd_new(
    config: &AppConfig,
    store_path: PathBuf,
    doc_type: &str,
    title: Option<&str>,
    author: Option<&str>,
    tone: Option<&str>,
    custom_type: Option<&str>,
    sample: bool,
    complete: bool,
) -> Result<()> {
    let kind: DocumentKind = doc_type
        .parse()
        .map_err(|e| eyre!("{e}. Valid types: {}", kind_names()))?;

    let tone: Tone = match tone {
        Some(t) => t.parse().map_err(|e| eyre!("{e}"))?,
        None => config
            .defaults
            .tone
            .parse()
            .unwrap_or(Tone::Professional),
    };

    let now = Utc::now();
    let mut doc = Document::new(
        kind,
        author.unwrap_or(&config.defaults.author),
        now,
    );
    doc.tone = tone;
    if let Some(title) = title {
        doc.title = title.to_string();
    }
    if sample {
        doc.body = modocs_schema::sample_body(kind);
    }
    if let Some(name) = custom_type {
        if let modocs_shared::DocumentBody::Other(fields) = &mut doc.body {
            fields.custom_type = name.to_string();
        }
    }

    let manager = manager_for(store_path);
    info!(id = %doc.id, kind = %kind, "creating document");

    if complete {
        let errors = modocs_validation::validate(&doc.body, &doc.title);
        if !errors.is_empty() {
            eprintln!("Cannot save as completed — fix these fields first:");
            for (field, message) in &errors {
                eprintln!("  {field}: {message}");
            }
            return Err(eyre!("{} validation error(s)", errors.len()));
        }
        let doc = manager.save_completed(doc, now)?;
        println!("Created completed document {} ({})", doc.id, doc.display_title());
    } else {
        manager.autosave_in_progress(&doc)?;
        println!("Created draft {} ({})", doc.id, doc.display_title());
        println!("Finish it in the wizard: modocs tui");
    }

    Ok(())
}

async fn cmd_list(
    store_path: PathBuf,
    query: Option<&str>,
    doc_type: Option<&str>,
    all: bool,
) -> Result<()> {
    let manager = manager_for(store_path);
    let kind = doc_type
        .map(|t| t.parse::<DocumentKind>())
        .transpose()
        .map_err(|e| eyre!("{e}. Valid types: {}", kind_names()))?;

    let docs = if all {
        let needle = query.unwrap_or("").trim().to_lowercase();
        manager
            .list_all()?
            .into_iter()
            .filter(|d| kind.is_none_or(|k| d.kind() == k))
            .filter(|d| {
                needle.is_empty()
                    || d.display_title().to_lowercase().contains(&needle)
                    || d.author.to_lowercase().contains(&needle)
            })
            .collect::<Vec<_>>()
    } else {
        manager.search(query.unwrap_or(""), kind)?
    };

    if docs.is_empty() {
        println!("No documents found.");
        return Ok(());
    }

    println!(
        "{:<20} {:<20} {:<32} {:<16} {:<12} {:>12}",
        "ID", "Type", "Title", "Author", "Status", "Amount"
    );
    for doc in &docs {
        let amount = doc
            .body
            .total_amount()
            .map(|a| format!("${a:.2}"))
            .unwrap_or_else(|| "—".into());
        println!(
            "{:<20} {:<20} {:<32} {:<16} {:<12} {:>12}",
            doc.id.as_str(),
            truncate(&doc.body.kind_label(), 20),
            truncate(&doc.display_title(), 32),
            truncate(&doc.author, 16),
            doc.status.to_string(),
            amount,
        );
    }
    println!();
    println!("{} document(s)", docs.len());

    Ok(())
}

async fn cmd_show(store_path: PathBuf, id: &str) -> Result<()> {
    let manager = manager_for(store_path);
    let id: DocId = id.parse().map_err(|e| eyre!("{e}"))?;

    match manager.get(&id)? {
        Some(doc) => {
            println!("{}", modocs_export::document_text(&doc));
            Ok(())
        }
        None => Err(eyre!("no document with id '{id}'")),
    }
}

async fn cmd_export(
    config: &AppConfig,
    store_path: PathBuf,
    id: Option<&str>,
    format: ExportFormat,
    out: Option<&str>,
    all_docs: bool,
) -> Result<()> {
    let manager = manager_for(store_path);
    let export_dir = expand_home(&config.defaults.export_dir)?;

    if all_docs {
        if format != ExportFormat::Json {
            return Err(eyre!("--all-docs only supports the json format"));
        }
        let docs = manager.list_all()?;
        let path = match out {
            Some(p) => expand_home(p)?,
            None => export_dir.join("documents.json"),
        };
        let json = modocs_export::collection_json(&docs)?;
        let result = modocs_export::write_artifact(&path, json.as_bytes())?;
        print_export(&result, docs.len());
        return Ok(());
    }

    let id: DocId = id
        .ok_or_else(|| eyre!("a document id is required (or pass --all-docs)"))?
        .parse()
        .map_err(|e| eyre!("{e}"))?;
    let doc = manager
        .get(&id)?
        .ok_or_else(|| eyre!("no document with id '{id}'"))?;

    let path = match out {
        Some(p) => expand_home(p)?,
        None => export_dir.join(format!(
            "{}.{}",
            modocs_export::file_stem(&doc),
            format.extension()
        )),
    };

    let result = match format {
        ExportFormat::Json => {
            let json = modocs_export::document_json(&doc)?;
            modocs_export::write_artifact(&path, json.as_bytes())?
        }
        ExportFormat::Text => {
            modocs_export::write_artifact(&path, modocs_export::document_text(&doc).as_bytes())?
        }
        ExportFormat::Html => {
            modocs_export::write_artifact(&path, modocs_export::document_html(&doc).as_bytes())?
        }
        ExportFormat::Doc => {
            modocs_export::write_artifact(&path, modocs_export::document_word(&doc).as_bytes())?
        }
        ExportFormat::Pdf => {
            let bytes = render_pdf(config, &doc).await?;
            modocs_export::write_artifact(&path, &bytes)?
        }
    };

    print_export(&result, 1);
    Ok(())
}

/// Render a PDF via the configured endpoint, falling back to the local
/// headless browser when none is set.
async fn render_pdf(config: &AppConfig, doc: &Document) -> Result<Vec<u8>> {
    let html = modocs_export::document_html(doc);
    let spinner = pdf_spinner();

    let result = if config.pdf.endpoint.is_empty() {
        spinner.set_message("Rendering PDF with local browser…");
        modocs_export::render_with_browser(
            &html,
            &config.pdf.browser,
            Duration::from_secs(config.pdf.content_timeout_secs),
        )
        .await
    } else {
        spinner.set_message(format!("Rendering PDF via {}…", config.pdf.endpoint));
        let client = PdfClient::new(
            &config.pdf.endpoint,
            Duration::from_secs(config.pdf.connect_timeout_secs),
            Duration::from_secs(config.pdf.content_timeout_secs),
        )?;
        client
            .render(&PdfRequest {
                html,
                file_name: Some(modocs_export::file_stem(doc)),
            })
            .await
    };

    spinner.finish_and_clear();
    result.map_err(|e| eyre!("{e}"))
}

fn pdf_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

fn print_export(result: &modocs_export::ExportResult, count: usize) {
    println!();
    println!("  Export complete!");
    println!("  Documents: {count}");
    println!("  Path:      {}", result.path.display());
    println!("  Size:      {} bytes", result.size_bytes);
    println!("  SHA-256:   {}", result.sha256);
    println!();
}

async fn cmd_delete(store_path: PathBuf, id: &str, yes: bool) -> Result<()> {
    let manager = manager_for(store_path);
    let id: DocId = id.parse().map_err(|e| eyre!("{e}"))?;

    let Some(doc) = manager.get(&id)? else {
        return Err(eyre!("no document with id '{id}'"));
    };

    if !yes {
        use std::io::Write;
        print!(
            "Delete \"{}\" ({})? This cannot be undone. [y/N] ",
            doc.display_title(),
            doc.body.kind_label()
        );
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    manager.delete(&id)?;
    println!("Deleted {id}.");
    Ok(())
}

async fn cmd_serve(config: &AppConfig, host: &str, port: u16) -> Result<()> {
    let addr = format!("{host}:{port}")
        .parse()
        .map_err(|e| eyre!("invalid bind address {host}:{port}: {e}"))?;

    println!("Serving POST http://{host}:{port}/generate-pdf");
    modocs_export::serve(
        addr,
        ServerConfig {
            browser: config.pdf.browser.clone(),
            content_timeout: Duration::from_secs(config.pdf.content_timeout_secs),
        },
    )
    .await
    .map_err(|e| eyre!("{e}"))
}

async fn cmd_tui() -> Result<()> {
    // The TUI ships as its own binary next to this one.
    let tui_bin = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.join("modocs-tui")))
        .filter(|p| p.exists());

    let program = match &tui_bin {
        Some(path) => path.to_string_lossy().into_owned(),
        None => "modocs-tui".to_string(),
    };

    info!(%program, "launching TUI");

    let status = std::process::Command::new(&program)
        .status()
        .map_err(|e| eyre!("failed to launch {program}: {e}. Is modocs-tui installed?"))?;

    if !status.success() {
        return Err(eyre!(
            "TUI exited with status: {}",
            status.code().unwrap_or(-1)
        ));
    }
    Ok(())
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn kind_names() -> String {
    DocumentKind::ALL
        .iter()
        .map(|k| k.label().to_lowercase())
        .collect::<Vec<_>>()
        .join(", ")
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
