//! The rendered content tree.
//!
//! The template renderer produces a flat list of [`ContentNode`]s; exporters
//! and the TUI preview walk it into text, HTML, or terminal lines.

use serde::Serialize;

/// One block of rendered document content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ContentNode {
    /// Section heading. Level 1 is the document banner.
    Heading { level: u8, text: String },
    /// Free-running paragraph.
    Paragraph { text: String },
    /// A labelled value line (`Invoice #: INV-2025-001`).
    KeyValue { label: String, value: String },
    /// Column headers + rows.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Bullet list.
    Bullets { items: Vec<String> },
    /// Horizontal separator.
    Rule,
    /// A signature line for a named party.
    SignatureLine { party: String },
}

/// The full rendered document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContentTree {
    pub nodes: Vec<ContentNode>,
}

impl ContentTree {
    pub fn heading(&mut self, level: u8, text: impl Into<String>) {
        self.nodes.push(ContentNode::Heading {
            level,
            text: text.into(),
        });
    }

    pub fn paragraph(&mut self, text: impl Into<String>) {
        self.nodes.push(ContentNode::Paragraph { text: text.into() });
    }

    /// Push one paragraph per blank-line-separated block.
    pub fn paragraphs(&mut self, text: &str) {
        for block in text.split("\n\n").filter(|b| !b.trim().is_empty()) {
            self.paragraph(block.trim());
        }
    }

    pub fn field(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.nodes.push(ContentNode::KeyValue {
            label: label.into(),
            value: value.into(),
        });
    }

    pub fn table(&mut self, headers: Vec<String>, rows: Vec<Vec<String>>) {
        self.nodes.push(ContentNode::Table { headers, rows });
    }

    pub fn bullets(&mut self, items: Vec<String>) {
        if !items.is_empty() {
            self.nodes.push(ContentNode::Bullets { items });
        }
    }

    pub fn rule(&mut self) {
        self.nodes.push(ContentNode::Rule);
    }

    pub fn signature(&mut self, party: impl Into<String>) {
        self.nodes.push(ContentNode::SignatureLine {
            party: party.into(),
        });
    }

    /// All text content flattened, for searching in tests.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                ContentNode::Heading { text, .. } | ContentNode::Paragraph { text } => {
                    out.push_str(text);
                    out.push('\n');
                }
                ContentNode::KeyValue { label, value } => {
                    out.push_str(label);
                    out.push_str(": ");
                    out.push_str(value);
                    out.push('\n');
                }
                ContentNode::Table { headers, rows } => {
                    out.push_str(&headers.join(" "));
                    out.push('\n');
                    for row in rows {
                        out.push_str(&row.join(" "));
                        out.push('\n');
                    }
                }
                ContentNode::Bullets { items } => {
                    for item in items {
                        out.push_str(item);
                        out.push('\n');
                    }
                }
                ContentNode::Rule => {}
                ContentNode::SignatureLine { party } => {
                    out.push_str(party);
                    out.push('\n');
                }
            }
        }
        out
    }
}
