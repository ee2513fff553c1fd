//! Tree walker that rebuilds editor markup from the allow-list.

use ego_tree::NodeRef;
use scraper::Html;
use scraper::node::Node;

use super::Sanitizer;
use super::href::resolve_href;
use super::list::render_list;
use super::policy::{Treatment, treatment};
use super::text::{escape_attr, is_blank, normalize_text, single_line};

/// Sanitizer that parses markup and re-emits it using only allow-listed tags.
///
/// The input is parsed as an HTML fragment into a tree that is only read,
/// never modified. Output is built bottom-up and collapsed onto one line.
/// Running the normalizer on its own output returns it unchanged.
///
/// # Example
///
/// ```
/// use html_cleaner::{HtmlNormalizer, Sanitizer};
///
/// let normalizer = HtmlNormalizer::new();
/// let html = r#"<h1>Title</h1><p><b>Bold</b> <span style="color:red">text</span></p><p><br></p>"#;
/// assert_eq!(normalizer.sanitize(html), "<h2>Title</h2><p><strong>Bold</strong> text</p>");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlNormalizer;

impl HtmlNormalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Parse `html` and normalize it.
    pub fn normalize(&self, html: &str) -> String {
        let fragment = Html::parse_fragment(html);
        let result = normalize_tree(*fragment.root_element());
        tracing::debug!(
            "Normalized {} bytes of markup into {} bytes",
            html.len(),
            result.len()
        );
        result
    }
}

impl Sanitizer for HtmlNormalizer {
    fn sanitize(&self, html: &str) -> String {
        self.normalize(html)
    }
}

/// Normalize the children of an already parsed node.
pub fn normalize_tree(root: NodeRef<'_, Node>) -> String {
    let mut out = String::new();
    write_children(root, &mut out);
    single_line(&out)
}

fn write_children(parent: NodeRef<'_, Node>, out: &mut String) {
    for child in parent.children() {
        write_node(
            child,
            child.prev_sibling().is_none(),
            child.next_sibling().is_none(),
            out,
        );
    }
}

fn render_children(parent: NodeRef<'_, Node>) -> String {
    let mut out = String::new();
    write_children(parent, &mut out);
    out
}

fn write_node(node: NodeRef<'_, Node>, first: bool, last: bool, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(&normalize_text(text, first, last)),
        Node::Element(el) => match treatment(el.name()) {
            Treatment::Block(tag) | Treatment::Inline(tag) => {
                let content = render_children(node);
                if !is_blank(&content) {
                    out.push_str(&format!("<{tag}>{content}</{tag}>"));
                }
            }
            Treatment::Link => {
                let content = render_children(node);
                if is_blank(&content) {
                    return;
                }
                match resolve_href(el.attr("href")) {
                    Some(href) => out.push_str(&format!(
                        r#"<a href="{}">{content}</a>"#,
                        escape_attr(href)
                    )),
                    None => out.push_str(&content),
                }
            }
            Treatment::List => out.push_str(&render_list(node)),
            Treatment::ListItem | Treatment::Unwrap => {
                tracing::trace!("Unwrapping <{}>", el.name());
                write_children(node, out);
            }
            Treatment::Drop => {}
        },
        _ => {}
    }
}
