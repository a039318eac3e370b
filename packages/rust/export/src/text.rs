//! Plain-text rendering of a content tree.

use modocs_template::{ContentNode, ContentTree};

const RULE_WIDTH: usize = 60;

/// Walk the tree into printable plain text.
pub fn render_text(tree: &ContentTree) -> String {
    let mut out = String::new();

    for node in &tree.nodes {
        match node {
            ContentNode::Heading { level, text } => {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(text);
                out.push('\n');
                let underline = if *level <= 1 { '=' } else { '-' };
                out.extend(std::iter::repeat_n(underline, text.chars().count()));
                out.push('\n');
            }
            ContentNode::Paragraph { text } => {
                out.push_str(text);
                out.push_str("\n\n");
            }
            ContentNode::KeyValue { label, value } => {
                out.push_str(label);
                out.push_str(": ");
                out.push_str(value);
                out.push('\n');
            }
            ContentNode::Table { headers, rows } => {
                out.push('\n');
                out.push_str(&format_table(headers, rows));
                out.push('\n');
            }
            ContentNode::Bullets { items } => {
                for item in items {
                    out.push_str("  - ");
                    out.push_str(item);
                    out.push('\n');
                }
                out.push('\n');
            }
            ContentNode::Rule => {
                out.push('\n');
                out.extend(std::iter::repeat_n('-', RULE_WIDTH));
                out.push_str("\n\n");
            }
            ContentNode::SignatureLine { party } => {
                out.push_str("\n________________________________\n");
                out.push_str(party);
                out.push('\n');
            }
        }
    }

    out
}

/// Pad columns to their widest cell.
fn format_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let columns = headers.len().max(rows.iter().map(Vec::len).max().unwrap_or(0));
    let mut widths = vec![0usize; columns];

    for (i, h) in headers.iter().enumerate() {
        widths[i] = widths[i].max(h.chars().count());
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let render_row = |cells: &[String]| -> String {
        let mut line = String::new();
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            line.push_str(&format!("{cell:<width$}"));
            if i + 1 < widths.len() {
                line.push_str("  ");
            }
        }
        line.trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&render_row(headers));
    out.push('\n');
    let total: usize = widths.iter().sum::<usize>() + 2 * (columns.saturating_sub(1));
    out.extend(std::iter::repeat_n('-', total));
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_are_underlined() {
        let mut tree = ContentTree::default();
        tree.heading(1, "INVOICE");
        tree.heading(2, "Bill To");

        let text = render_text(&tree);
        assert!(text.contains("INVOICE\n======="));
        assert!(text.contains("Bill To\n-------"));
    }

    #[test]
    fn tables_align_columns() {
        let mut tree = ContentTree::default();
        tree.table(
            vec!["Description".into(), "Total".into()],
            vec![
                vec!["Chairs".into(), "$8,750.00".into()],
                vec!["Standing Desks".into(), "$12,000.00".into()],
            ],
        );

        let text = render_text(&tree);
        assert!(text.contains("Description     Total"));
        assert!(text.contains("Standing Desks  $12,000.00"));
    }

    #[test]
    fn signature_lines_render() {
        let mut tree = ContentTree::default();
        tree.signature("ABC Company LLC");
        let text = render_text(&tree);
        assert!(text.contains("________________________________\nABC Company LLC"));
    }
}
