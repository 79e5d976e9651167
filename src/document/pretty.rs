use ego_tree::iter::Edge;
use ego_tree::{NodeId, NodeRef};
use scraper::node::Element;
use scraper::{Html, Node};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source", "track", "wbr",
];

// children are emitted verbatim, without entity escaping
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

// whole subtree kept on one line with its whitespace untouched
const PREFORMATTED_ELEMENTS: &[&str] = &["pre", "textarea"];

/// Render a parsed document one node per line, indented by depth.
///
/// Blank text nodes are dropped and attributes are sorted by name, so the
/// output depends only on the document, never on hash ordering.
pub fn prettify(doc: &Html) -> String {
    let mut out = String::new();
    let mut depth = 0usize;
    let mut verbatim: Option<(NodeId, String)> = None;

    for edge in doc.tree.root().traverse() {
        if let Some((id, buf)) = verbatim.as_mut() {
            match edge {
                Edge::Open(node) => match node.value() {
                    Node::Element(el) => buf.push_str(&open_tag(el)),
                    Node::Text(text) => buf.push_str(&escape_text(text)),
                    Node::Comment(comment) => {
                        let body: &str = comment;
                        buf.push_str(&format!("<!--{}-->", body));
                    }
                    _ => {}
                },
                Edge::Close(node) => {
                    if let Node::Element(el) = node.value() {
                        if !is_void(el.name()) { buf.push_str(&format!("</{}>", el.name())); }
                    }
                    if node.id() == *id {
                        push_line(&mut out, depth, buf);
                        verbatim = None;
                    }
                }
            }
            continue;
        }

        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(el) if PREFORMATTED_ELEMENTS.contains(&el.name()) => {
                    verbatim = Some((node.id(), open_tag(el)));
                }
                Node::Element(el) => {
                    push_line(&mut out, depth, &open_tag(el));
                    if !is_void(el.name()) { depth += 1; }
                }
                Node::Text(text) => {
                    let trimmed = text.trim();
                    if trimmed.is_empty() { continue; }
                    if in_raw_text(node) { push_line(&mut out, depth, trimmed); }
                    else { push_line(&mut out, depth, &escape_text(trimmed)); }
                }
                Node::Comment(comment) => {
                    let body: &str = comment;
                    push_line(&mut out, depth, &format!("<!--{}-->", body));
                }
                Node::Doctype(doctype) => push_line(&mut out, depth, &format!("<!DOCTYPE {}>", doctype.name())),
                _ => {}
            },
            Edge::Close(node) => {
                if let Node::Element(el) = node.value() {
                    if is_void(el.name()) { continue; }
                    depth = depth.saturating_sub(1);
                    push_line(&mut out, depth, &format!("</{}>", el.name()));
                }
            }
        }
    }

    out
}

fn open_tag(el: &Element) -> String {
    let mut attrs: Vec<(&str, &str)> = el.attrs().collect();
    attrs.sort_by(|a, b| a.0.cmp(b.0));

    let mut tag = String::new();
    tag.push('<');
    tag.push_str(el.name());
    for (name, value) in attrs {
        tag.push(' ');
        tag.push_str(name);
        tag.push_str("=\"");
        tag.push_str(&escape_attr(value));
        tag.push('"');
    }
    if is_void(el.name()) { tag.push('/'); }
    tag.push('>');
    tag
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth { out.push(' '); }
    out.push_str(line);
    out.push('\n');
}

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

fn in_raw_text(node: NodeRef<'_, Node>) -> bool {
    node.parent()
        .and_then(|p| p.value().as_element().map(|e| RAW_TEXT_ELEMENTS.contains(&e.name())))
        .unwrap_or(false)
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}
