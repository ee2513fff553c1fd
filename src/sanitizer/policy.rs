//! The allow-list policy: one table mapping tag names to their treatment.
//!
//! Every tag resolves to exactly one [`Treatment`]. Tags missing from
//! [`POLICY`] fall back to [`Treatment::Unwrap`], so nothing outside the
//! output grammar can reach the output under its own name.

/// How the normalizer handles an element with a given tag name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Treatment {
    /// Emit as the given block tag if the content is non-empty (`p`, `h2`,
    /// `h3`, and `h1` renamed to `h2`).
    Block(&'static str),
    /// Emit as the given inline tag if the content is non-empty (`b` and
    /// `strong` as `strong`, `i` and `em` as `em`).
    Inline(&'static str),
    /// A link whose `href` passes the href policy.
    Link,
    /// A `ul`/`ol` rebuilt by the list reconstructor.
    List,
    /// A list item. Only meaningful inside a list; elsewhere it is unwrapped.
    ListItem,
    /// Drop the tag, keep processing and emitting its children.
    Unwrap,
    /// Drop the element and everything inside it.
    Drop,
}

/// The fixed tag table. Lookups are case-insensitive.
pub const POLICY: &[(&str, Treatment)] = &[
    ("p", Treatment::Block("p")),
    ("h1", Treatment::Block("h2")),
    ("h2", Treatment::Block("h2")),
    ("h3", Treatment::Block("h3")),
    ("b", Treatment::Inline("strong")),
    ("strong", Treatment::Inline("strong")),
    ("i", Treatment::Inline("em")),
    ("em", Treatment::Inline("em")),
    ("a", Treatment::Link),
    ("ul", Treatment::List),
    ("ol", Treatment::List),
    ("li", Treatment::ListItem),
    ("u", Treatment::Unwrap),
    ("span", Treatment::Unwrap),
    ("div", Treatment::Unwrap),
    ("br", Treatment::Drop),
];

/// Tags that may appear in cleaned output, including `abbr` from the
/// acronym tagger.
pub const OUTPUT_TAGS: &[&str] = &[
    "p", "h2", "h3", "strong", "em", "a", "ul", "ol", "li", "abbr",
];

/// Resolve the treatment for a tag name.
pub fn treatment(tag: &str) -> Treatment {
    POLICY
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(tag))
        .map_or(Treatment::Unwrap, |(_, treatment)| *treatment)
}

/// Returns `true` for `ul` and `ol`.
pub fn is_list(tag: &str) -> bool {
    treatment(tag) == Treatment::List
}
