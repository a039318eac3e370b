//! HTML rendering of a content tree.
//!
//! Produces a standalone, print-styled page: it is what the PDF pipeline
//! feeds to the headless browser, and doubles as a direct export format.
//! The Word variant wraps the same markup in the Office HTML envelope so
//! word processors open the `.doc` file natively.

use modocs_template::{ContentNode, ContentTree};

/// Render a standalone print-ready HTML page.
pub fn render_html(tree: &ContentTree, title: &str) -> String {
    let mut body = String::new();
    for node in &tree.nodes {
        render_node(&mut body, node);
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n<div class=\"page\">\n{}</div>\n</body>\n</html>\n",
        escape(title),
        PAGE_CSS,
        body,
    )
}

/// Render the Office HTML envelope for `.doc` export. Word sniffs the
/// namespace declarations and opens the file as a native document.
pub fn render_word(tree: &ContentTree, title: &str) -> String {
    let mut body = String::new();
    for node in &tree.nodes {
        render_node(&mut body, node);
    }

    format!(
        "<html xmlns:o=\"urn:schemas-microsoft-com:office:office\" \
         xmlns:w=\"urn:schemas-microsoft-com:office:word\" \
         xmlns=\"http://www.w3.org/TR/REC-html40\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<!--[if gte mso 9]><xml><w:WordDocument>\
         <w:View>Print</w:View></w:WordDocument></xml><![endif]-->\n<style>\n{}\n</style>\n\
         </head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        PAGE_CSS,
        body,
    )
}

const PAGE_CSS: &str = "\
@page { size: A4; margin: 12mm 12mm 16mm 12mm; }
body { font-family: Georgia, 'Times New Roman', serif; color: #111827; margin: 0; }
.page { max-width: 186mm; margin: 0 auto; padding: 24px; }
h1 { text-align: center; font-size: 24px; letter-spacing: 1px; border-bottom: 2px solid #d1d5db; padding-bottom: 12px; }
h2 { font-size: 14px; text-transform: uppercase; letter-spacing: 0.5px; color: #374151; margin-top: 24px; }
p { font-size: 13px; line-height: 1.6; }
.kv { font-size: 13px; margin: 4px 0; }
.kv .label { font-weight: 600; color: #374151; }
table { width: 100%; border-collapse: collapse; margin: 16px 0; font-size: 13px; }
th { text-align: left; background: #f3f4f6; border-bottom: 2px solid #d1d5db; padding: 6px 8px; }
td { border-bottom: 1px solid #e5e7eb; padding: 6px 8px; }
ul { font-size: 13px; line-height: 1.6; }
hr { border: none; border-top: 1px solid #d1d5db; margin: 16px 0; }
.signature { margin-top: 48px; width: 240px; }
.signature .line { border-top: 1px solid #6b7280; }
.signature .party { font-size: 12px; color: #4b5563; padding-top: 4px; }";

fn render_node(out: &mut String, node: &ContentNode) {
    match node {
        ContentNode::Heading { level, text } => {
            let tag = if *level <= 1 { "h1" } else { "h2" };
            out.push_str(&format!("<{tag}>{}</{tag}>\n", escape(text)));
        }
        ContentNode::Paragraph { text } => {
            out.push_str(&format!("<p>{}</p>\n", escape(text).replace('\n', "<br>")));
        }
        ContentNode::KeyValue { label, value } => {
            out.push_str(&format!(
                "<div class=\"kv\"><span class=\"label\">{}:</span> {}</div>\n",
                escape(label),
                escape(value).replace('\n', "<br>"),
            ));
        }
        ContentNode::Table { headers, rows } => {
            out.push_str("<table>\n<thead><tr>");
            for header in headers {
                out.push_str(&format!("<th>{}</th>", escape(header)));
            }
            out.push_str("</tr></thead>\n<tbody>\n");
            for row in rows {
                out.push_str("<tr>");
                for cell in row {
                    out.push_str(&format!("<td>{}</td>", escape(cell)));
                }
                out.push_str("</tr>\n");
            }
            out.push_str("</tbody>\n</table>\n");
        }
        ContentNode::Bullets { items } => {
            out.push_str("<ul>\n");
            for item in items {
                out.push_str(&format!("<li>{}</li>\n", escape(item)));
            }
            out.push_str("</ul>\n");
        }
        ContentNode::Rule => out.push_str("<hr>\n"),
        ContentNode::SignatureLine { party } => {
            out.push_str(&format!(
                "<div class=\"signature\"><div class=\"line\"></div><div class=\"party\">{}</div></div>\n",
                escape(party),
            ));
        }
    }
}

/// Minimal HTML escaping for text content and attribute values.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> ContentTree {
        let mut tree = ContentTree::default();
        tree.heading(1, "INVOICE");
        tree.field("Client", "Acme & Sons <intl>");
        tree.table(
            vec!["Description".into(), "Total".into()],
            vec![vec!["Consulting".into(), "$6,000.00".into()]],
        );
        tree
    }

    #[test]
    fn html_is_standalone_and_escaped() {
        let html = render_html(&sample_tree(), "Q4 Invoice");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Q4 Invoice</title>"));
        assert!(html.contains("@page { size: A4;"));
        assert!(html.contains("Acme &amp; Sons &lt;intl&gt;"));
        assert!(html.contains("<td>$6,000.00</td>"));
    }

    #[test]
    fn word_envelope_carries_office_namespaces() {
        let doc = render_word(&sample_tree(), "Q4 Invoice");
        assert!(doc.contains("urn:schemas-microsoft-com:office:word"));
        assert!(doc.contains("<w:View>Print</w:View>"));
        assert!(doc.contains("INVOICE"));
    }

    #[test]
    fn multiline_values_become_breaks() {
        let mut tree = ContentTree::default();
        tree.field("Address", "Line 1\nLine 2");
        let html = render_html(&tree, "Letter");
        assert!(html.contains("Line 1<br>Line 2"));
    }
}
