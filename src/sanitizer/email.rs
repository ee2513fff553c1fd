//! Bare e-mail address linking.

use std::sync::LazyLock;

use regex::Regex;

use super::Sanitizer;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9]*)[^>]*>").unwrap());
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\b").unwrap()
});

/// Sanitizer that links bare e-mail addresses with `mailto:`.
///
/// Addresses in text outside any `<a>` element become
/// `<a href="mailto:x">x</a>` with the address lowercased. Addresses that are
/// already link text, and anything inside a tag, are left as they are.
///
/// # Example
///
/// ```
/// use html_cleaner::{EmailLinker, Sanitizer};
///
/// let linked = EmailLinker.sanitize("<p>Write to Help.Desk@Example.ca</p>");
/// assert_eq!(
///     linked,
///     r#"<p>Write to <a href="mailto:help.desk@example.ca">help.desk@example.ca</a></p>"#
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EmailLinker;

impl EmailLinker {
    fn link(text: &str) -> String {
        EMAIL
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let address = caps[0].to_lowercase();
                format!(r#"<a href="mailto:{address}">{address}</a>"#)
            })
            .into_owned()
    }
}

impl Sanitizer for EmailLinker {
    fn sanitize(&self, html: &str) -> String {
        let mut out = String::with_capacity(html.len());
        let mut anchors = 0usize;
        let mut last = 0;

        for caps in TAG.captures_iter(html) {
            let (Some(tag), Some(name)) = (caps.get(0), caps.get(2)) else {
                continue;
            };
            let text = &html[last..tag.start()];
            if anchors == 0 {
                out.push_str(&Self::link(text));
            } else {
                out.push_str(text);
            }
            out.push_str(tag.as_str());
            last = tag.end();

            if name.as_str().eq_ignore_ascii_case("a") {
                if caps[1].is_empty() {
                    anchors += 1;
                } else {
                    anchors = anchors.saturating_sub(1);
                }
            }
        }

        let tail = &html[last..];
        if anchors == 0 {
            out.push_str(&Self::link(tail));
        } else {
            out.push_str(tail);
        }
        out
    }
}
