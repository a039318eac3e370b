//! Export adapter for MoDocs documents.
//!
//! Serializes documents to JSON, renders the content tree to plain text,
//! HTML, and the Word-compatible `.doc` envelope, and drives the PDF
//! pipeline (local headless browser or remote endpoint). File artifacts are
//! written atomically and reported with size and SHA-256 checksum.

mod html;
pub mod pdf;
pub mod server;
mod text;

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use modocs_shared::{Document, ModocsError, Result};

pub use html::{render_html, render_word};
pub use pdf::{PdfClient, PdfRequest, render_with_browser};
pub use server::{ServerConfig, router, serve};
pub use text::render_text;

/// Metadata for one written export file.
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub path: PathBuf,
    pub size_bytes: usize,
    pub sha256: String,
}

/// Write an artifact atomically (temp file + rename) and return its
/// checksum metadata.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<ExportResult> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ModocsError::io(parent, e))?;
        }
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| ModocsError::export(format!("not a file path: {}", path.display())))?;
    let temp = path.with_file_name(format!(".{file_name}.tmp"));

    std::fs::write(&temp, bytes).map_err(|e| ModocsError::io(&temp, e))?;
    std::fs::rename(&temp, path).map_err(|e| ModocsError::io(path, e))?;

    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let hash = format!("{:x}", hasher.finalize());

    tracing::debug!(path = %path.display(), size = bytes.len(), "wrote export artifact");

    Ok(ExportResult {
        path: path.to_path_buf(),
        size_bytes: bytes.len(),
        sha256: hash,
    })
}

/// Pretty-printed JSON snapshot of one document.
pub fn document_json(doc: &Document) -> Result<String> {
    serde_json::to_string_pretty(doc)
        .map_err(|e| ModocsError::export(format!("serialize document: {e}")))
}

/// Pretty-printed JSON array of the whole collection.
pub fn collection_json(docs: &[Document]) -> Result<String> {
    serde_json::to_string_pretty(docs)
        .map_err(|e| ModocsError::export(format!("serialize collection: {e}")))
}

/// Render a document straight to plain text.
pub fn document_text(doc: &Document) -> String {
    render_text(&modocs_template::render(doc))
}

/// Render a document straight to a standalone HTML page.
pub fn document_html(doc: &Document) -> String {
    render_html(&modocs_template::render(doc), &doc.display_title())
}

/// Render a document straight to the Word `.doc` envelope.
pub fn document_word(doc: &Document) -> String {
    render_word(&modocs_template::render(doc), &doc.display_title())
}

/// A filesystem-safe file stem derived from the document's display title.
pub fn file_stem(doc: &Document) -> String {
    let stem: String = doc
        .display_title()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    let collapsed = stem
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if collapsed.is_empty() {
        "document".to_string()
    } else {
        collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use modocs_schema::sample_body;
    use modocs_shared::{Document, DocumentKind};

    fn sample_doc() -> Document {
        let mut doc = Document::new(DocumentKind::Invoice, "Current User", Utc::now());
        doc.title = "Q4 Invoice".into();
        doc.body = sample_body(DocumentKind::Invoice);
        doc
    }

    fn temp_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("modocs_export_{}_{nanos}/{name}", std::process::id()))
    }

    #[test]
    fn artifact_write_reports_checksum() {
        let path = temp_path("q4-invoice.json");
        let result = write_artifact(&path, b"{\"ok\": true}").unwrap();

        assert_eq!(result.size_bytes, 12);
        assert_eq!(result.sha256.len(), 64);
        assert_eq!(std::fs::read(&path).unwrap(), b"{\"ok\": true}");

        // No temp file remains next to the artifact.
        for entry in std::fs::read_dir(path.parent().unwrap()).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().to_string();
            assert!(!name.ends_with(".tmp"), "temp file left behind: {name}");
        }
    }

    #[test]
    fn document_json_roundtrips() {
        let doc = sample_doc();
        let json = document_json(&doc).unwrap();
        let parsed: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn text_and_html_share_content() {
        let doc = sample_doc();
        let text = document_text(&doc);
        let html = document_html(&doc);
        assert!(text.contains("INV-2025-001"));
        assert!(html.contains("INV-2025-001"));
        assert!(html.contains("<title>Q4 Invoice</title>"));
    }

    #[test]
    fn file_stem_is_slug_safe() {
        let doc = sample_doc();
        assert_eq!(file_stem(&doc), "q4-invoice");

        let untitled = Document::new(DocumentKind::Memo, "x", Utc::now());
        // Falls back to the body-derived title, then the type label.
        assert_eq!(file_stem(&untitled), "memo");

        let mut weird = Document::new(DocumentKind::Memo, "x", Utc::now());
        weird.title = "///".into();
        assert_eq!(file_stem(&weird), "document");
    }
}
