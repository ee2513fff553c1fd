//! Regex-based typography rules for bilingual text.

use std::sync::LazyLock;

use regex::Regex;

use super::Sanitizer;
use crate::error::Result;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static EMPTY_PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>(?:<br\s*/?>)?</p>").unwrap());

/// The default rules: typographic apostrophes, non-breaking spaces inside
/// guillemets, and double spaces kept visible. Non-breaking spaces are written
/// as `&nbsp;`, the same entity the normalizer emits.
pub const DEFAULT_RULES: &[(&str, &str)] = &[
    ("'", "\u{2019}"),
    (" »", "&nbsp;»"),
    ("« ", "«&nbsp;"),
    ("  ", " &nbsp;"),
];

/// Sanitizer that applies a series of regex find-and-replace rules to text.
///
/// Rules only touch the text between tags, never tag names or attribute
/// values. They are applied in order; each rule operates on the output of the
/// previous one. Empty `<p></p>` and `<p><br></p>` leftovers are removed
/// before the rules run.
///
/// # Example
///
/// ```
/// use html_cleaner::{Sanitizer, TypographySanitizer};
///
/// let sanitizer = TypographySanitizer::default();
/// let result = sanitizer.sanitize(r#"<p>« Bonjour » l'équipe</p><p><br></p>"#);
/// assert_eq!(result, "<p>«&nbsp;Bonjour&nbsp;» l\u{2019}équipe</p>");
/// ```
#[derive(Clone, Debug)]
pub struct TypographySanitizer {
    rules: Vec<(Regex, String)>,
}

impl TypographySanitizer {
    /// Create a new `TypographySanitizer` from a list of `(pattern, replacement)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if any regex pattern is invalid. Use [`try_new`](Self::try_new)
    /// for a fallible alternative.
    pub fn new(rules: Vec<(&str, &str)>) -> Self {
        let rules = rules
            .into_iter()
            .map(|(pattern, replacement)| {
                (
                    Regex::new(pattern).expect("invalid regex pattern"),
                    replacement.to_string(),
                )
            })
            .collect();
        Self { rules }
    }

    /// Fallible constructor that returns [`CleanerError::Pattern`](crate::CleanerError::Pattern)
    /// for invalid patterns.
    pub fn try_new(rules: Vec<(&str, &str)>) -> Result<Self> {
        let rules = rules
            .into_iter()
            .map(|(pattern, replacement)| Ok((Regex::new(pattern)?, replacement.to_string())))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, (re, replacement)| {
                re.replace_all(&acc, replacement.as_str()).into_owned()
            })
    }
}

impl Default for TypographySanitizer {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }
}

impl Sanitizer for TypographySanitizer {
    fn sanitize(&self, html: &str) -> String {
        let html = EMPTY_PARAGRAPH.replace_all(html, "");
        let mut out = String::with_capacity(html.len());
        let mut last = 0;
        for tag in TAG.find_iter(&html) {
            out.push_str(&self.apply(&html[last..tag.start()]));
            out.push_str(tag.as_str());
            last = tag.end();
        }
        out.push_str(&self.apply(&html[last..]));
        out
    }
}
