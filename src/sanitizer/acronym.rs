//! Acronym auto-tagging.
//!
//! Known acronyms are wrapped in `<abbr>` and the token `MS` is spelled out as
//! `Microsoft`. Whether a match is already inside an `<abbr>` is decided by
//! scanning backward for the nearest `<abbr` / `</abbr>`. That scan is a
//! heuristic over the string, not a parse: it is right for the flat output of
//! the normalizer, and approximate for hand-written markup.

use std::sync::LazyLock;

use regex::Regex;

use super::Sanitizer;
use crate::error::{CleanerError, Result};

/// Acronyms tagged in status and alert messages.
pub const DEFAULT_ACRONYMS: &[&str] = &["RCMP", "GRC", "ROSS", "HRMIS", "SIGRH"];

/// Acronyms tagged in structured bilingual records.
pub const RECORD_ACRONYMS: &[&str] = &[
    "RCMP", "GRC", "MCC", "CACP", "CISC", "ATIP", "CPM", "ACCP", "SCRC", "AIPRP", "ICIR", "IIIC",
    "CAD", "RAO", "CCG", "MAB", "GBA", "EDI", "ACS", "DICE", "DREAM",
];

static MS_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bMS\b").unwrap());

/// Sanitizer that wraps configured acronyms in `<abbr>` tags.
///
/// Matching is case-sensitive on whole words. Matches already inside an
/// `<abbr>` or inside a tag's attributes are left alone, so the pass is
/// idempotent.
///
/// # Example
///
/// ```
/// use html_cleaner::{AcronymTagger, Sanitizer};
///
/// let tagger = AcronymTagger::new(["RCMP"]).unwrap();
/// let once = tagger.sanitize("RCMP said RCMP will use MS Teams");
/// assert_eq!(once, "<abbr>RCMP</abbr> said <abbr>RCMP</abbr> will use Microsoft Teams");
/// assert_eq!(tagger.sanitize(&once), once);
/// ```
#[derive(Clone, Debug)]
pub struct AcronymTagger {
    patterns: Vec<(String, Regex)>,
    expand_ms: bool,
}

impl AcronymTagger {
    /// Create a tagger for the given acronyms, applied in order.
    ///
    /// Returns [`CleanerError::InvalidAcronym`] for a token that is empty or
    /// contains whitespace or markup characters.
    pub fn new<I, S>(acronyms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = acronyms
            .into_iter()
            .map(|acronym| {
                let acronym = acronym.as_ref();
                validate(acronym)?;
                let re = Regex::new(&format!(r"\b{}\b", regex::escape(acronym)))?;
                Ok((acronym.to_string(), re))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            patterns,
            expand_ms: true,
        })
    }

    /// Enable or disable spelling out `MS` as `Microsoft` (enabled by default).
    pub fn expand_ms(mut self, expand: bool) -> Self {
        self.expand_ms = expand;
        self
    }

    /// The configured acronyms, in application order.
    pub fn acronyms(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(acronym, _)| acronym.as_str())
    }

    /// Tag acronyms in `text`.
    pub fn tag(&self, text: &str) -> String {
        let mut result = if self.expand_ms {
            replace_unwrapped(text, &MS_WORD, |_| "Microsoft".to_string())
        } else {
            text.to_string()
        };
        for (_, re) in &self.patterns {
            result = replace_unwrapped(&result, re, |m| format!("<abbr>{m}</abbr>"));
        }
        result
    }
}

impl Sanitizer for AcronymTagger {
    fn sanitize(&self, html: &str) -> String {
        self.tag(html)
    }
}

/// Tag `acronyms` in `text` with a one-off [`AcronymTagger`].
pub fn auto_tag_acronyms<S: AsRef<str>>(text: &str, acronyms: &[S]) -> Result<String> {
    Ok(AcronymTagger::new(acronyms)?.tag(text))
}

fn validate(acronym: &str) -> Result<()> {
    let bad = acronym.is_empty()
        || acronym
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '&' | '"' | '\''));
    if bad {
        return Err(CleanerError::InvalidAcronym(acronym.to_string()));
    }
    Ok(())
}

/// Replace every match of `re` that is neither inside an `<abbr>` element nor
/// inside a tag.
fn replace_unwrapped(text: &str, re: &Regex, replace: impl Fn(&str) -> String) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in re.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        if inside_abbr(text, m.start(), m.end()) || inside_tag(text, m.start()) {
            out.push_str(m.as_str());
        } else {
            out.push_str(&replace(m.as_str()));
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

fn inside_abbr(text: &str, start: usize, end: usize) -> bool {
    let before = &text[..start];
    let opened = match (before.rfind("<abbr"), before.rfind("</abbr>")) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    };
    opened && text[end..].contains("</abbr>")
}

fn inside_tag(text: &str, start: usize) -> bool {
    let before = &text[..start];
    match (before.rfind('<'), before.rfind('>')) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    }
}
