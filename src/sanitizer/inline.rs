//! Inline content: character-level formatting inside list items.
//!
//! Only text, `strong`/`b`, `em`/`i` and `a` survive here. Any other element
//! is unwrapped to its content and `br` is dropped. Whitespace at the start of
//! a text node that directly follows an emitted inline tag is trimmed.

use ego_tree::NodeRef;
use scraper::node::Node;

use super::href::resolve_href;
use super::policy::{Treatment, treatment};
use super::text::{escape_attr, is_blank, normalize_text};

/// Render the inline content of `node`'s children.
pub fn render_inline(node: NodeRef<'_, Node>) -> String {
    let mut out = String::new();
    write_children(node, &mut out);
    out
}

fn write_children(parent: NodeRef<'_, Node>, out: &mut String) {
    let children: Vec<_> = parent.children().collect();
    write_nodes(&children, out);
}

/// Write the inline rendering of a run of sibling nodes into `out`. The first
/// and last node of the run are its edges for whitespace trimming.
pub(crate) fn write_nodes(nodes: &[NodeRef<'_, Node>], out: &mut String) {
    let count = nodes.len();
    let mut trim_next = false;
    for (i, node) in nodes.iter().enumerate() {
        trim_next = write_node(*node, i == 0, i + 1 == count, trim_next, out);
    }
}

/// Returns `true` when the node emitted an inline tag, meaning a following
/// text sibling should lose its leading whitespace.
fn write_node(
    node: NodeRef<'_, Node>,
    first: bool,
    last: bool,
    trim_leading: bool,
    out: &mut String,
) -> bool {
    match node.value() {
        Node::Text(text) => {
            out.push_str(&normalize_text(text, first || trim_leading, last));
            false
        }
        Node::Element(el) => match treatment(el.name()) {
            Treatment::Inline(tag) => {
                let content = render_inline(node);
                if is_blank(&content) {
                    return false;
                }
                out.push_str(&format!("<{tag}>{content}</{tag}>"));
                true
            }
            Treatment::Link => {
                let content = render_inline(node);
                if is_blank(&content) {
                    return false;
                }
                match resolve_href(el.attr("href")) {
                    Some(href) => {
                        out.push_str(&format!(
                            r#"<a href="{}">{content}</a>"#,
                            escape_attr(href)
                        ));
                        true
                    }
                    None => {
                        out.push_str(&content);
                        false
                    }
                }
            }
            Treatment::Drop => false,
            _ => {
                tracing::trace!("Unwrapping <{}> in inline content", el.name());
                write_children(node, out);
                false
            }
        },
        _ => false,
    }
}
