//! List reconstruction.
//!
//! Rich-text editors such as Quill store nested lists as a flat run of `<li>`
//! siblings, each with an indent level (`ql-indent-N` class) and a style
//! marker (`data-list="bullet"` or `"ordered"`). This module rebuilds real
//! `<ul>`/`<ol>` nesting from that sequence: every item nests under the
//! nearest preceding item with a strictly lower indent level, or stays at the
//! top when there is none.
//!
//! Items that already contain a genuine nested list are rendered in document
//! order, their text runs interleaved with the nested lists, and take the
//! indent level of the item before them.

use ego_tree::NodeRef;
use scraper::node::{Element, Node};

use super::inline;
use super::policy::{Treatment, is_list, treatment};
use super::text::is_blank;

const INDENT_CLASS_PREFIX: &str = "ql-indent-";
const LIST_MARKER_ATTR: &str = "data-list";

/// Bullet or ordered list style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Ordered,
}

impl ListKind {
    /// The output tag for this style.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Bullet => "ul",
            ListKind::Ordered => "ol",
        }
    }

    fn of_list_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("ul") {
            ListKind::Bullet
        } else {
            ListKind::Ordered
        }
    }

    /// `bullet` means a bullet list, any other marker value an ordered one.
    /// Without a marker the style of the enclosing list element applies.
    fn of_item(item: &Element, enclosing: ListKind) -> Self {
        match item.attr(LIST_MARKER_ATTR) {
            Some(marker) if marker.trim().eq_ignore_ascii_case("bullet") => ListKind::Bullet,
            Some(_) => ListKind::Ordered,
            None => enclosing,
        }
    }
}

/// Indent level encoded in an item's class list, 0 when absent.
pub fn indent_level(item: &Element) -> usize {
    item.classes()
        .find_map(|class| class.strip_prefix(INDENT_CLASS_PREFIX)?.parse().ok())
        .unwrap_or(0)
}

struct Item<'a> {
    /// The `<li>` itself, or `None` for a placeholder holding a stray list.
    content: Option<NodeRef<'a, Node>>,
    level: usize,
    kind: ListKind,
    /// Lists found between this item and the next one.
    stray: Vec<NodeRef<'a, Node>>,
}

/// Rebuild a `ul`/`ol` element. Returns an empty string when the list has no
/// content.
pub fn render_list(list: NodeRef<'_, Node>) -> String {
    let Some(el) = list.value().as_element() else {
        return String::new();
    };
    let items = collect_items(list, ListKind::of_list_tag(el.name()));
    let Some(first) = items.first() else {
        return String::new();
    };

    let tag = first.kind.tag();
    let body = render_items(&items);
    if is_blank(&body) {
        return String::new();
    }
    format!("<{tag}>{body}</{tag}>")
}

/// Render a flat sequence of items, nesting deeper runs under the item that
/// precedes them.
fn render_items(items: &[Item<'_>]) -> String {
    let mut out = String::new();
    let mut i = 0;

    while i < items.len() {
        let item = &items[i];
        let end = i + 1
            + items[i + 1..]
                .iter()
                .take_while(|next| next.level > item.level)
                .count();
        let deeper = &items[i + 1..end];

        let mut body = String::new();
        if let Some(node) = item.content {
            write_item_body(node, &mut body);
        }
        for stray in &item.stray {
            body.push_str(&render_list(*stray));
        }
        if let Some(head) = deeper.first() {
            let tag = head.kind.tag();
            let children = render_items(deeper);
            if !children.is_empty() {
                body.push_str(&format!("<{tag}>{children}</{tag}>"));
            }
        }

        if is_blank(&body) {
            tracing::trace!("Dropping empty list item");
        } else {
            out.push_str("<li>");
            out.push_str(&body);
            out.push_str("</li>");
        }
        i = end;
    }

    out
}

/// Write an item's children in order: runs of inline content, with any list
/// among them rendered in place.
fn write_item_body(item: NodeRef<'_, Node>, out: &mut String) {
    let mut run = Vec::new();
    for child in item.children() {
        if is_list_node(child) {
            inline::write_nodes(&run, out);
            run.clear();
            out.push_str(&render_list(child));
        } else {
            run.push(child);
        }
    }
    inline::write_nodes(&run, out);
}

fn collect_items<'a>(list: NodeRef<'a, Node>, enclosing: ListKind) -> Vec<Item<'a>> {
    let mut items: Vec<Item<'a>> = Vec::new();

    for child in list.children() {
        let Some(el) = child.value().as_element() else {
            continue;
        };
        match treatment(el.name()) {
            Treatment::ListItem => {
                let level = if child.children().any(is_list_node) {
                    items.last().map_or(0, |prev| prev.level)
                } else {
                    indent_level(el)
                };
                items.push(Item {
                    content: Some(child),
                    level,
                    kind: ListKind::of_item(el, enclosing),
                    stray: Vec::new(),
                });
            }
            // A list placed directly inside another list belongs to the item
            // before it.
            Treatment::List => match items.last_mut() {
                Some(prev) => prev.stray.push(child),
                None => items.push(Item {
                    content: None,
                    level: 0,
                    kind: enclosing,
                    stray: vec![child],
                }),
            },
            _ => {
                tracing::trace!("Skipping <{}> directly inside a list", el.name());
            }
        }
    }

    items
}

fn is_list_node(node: NodeRef<'_, Node>) -> bool {
    node.value().as_element().is_some_and(|el| is_list(el.name()))
}
