//! # html_cleaner
//!
//! Turns rich-text editor markup (Quill documents, pasted Word content) into
//! a small, safe, canonical HTML subset on a single line.
//!
//! ## Overview
//!
//! The [`HtmlNormalizer`] parses markup into a tree and rebuilds it from a
//! fixed allow-list: `p`, `h2`, `h3`, `strong`, `em`, `a`, `ul`, `ol` and `li`.
//! `b`/`i` become `strong`/`em`, `h1` becomes `h2`, empty blocks disappear,
//! links with `javascript:` or `data:` targets lose their anchor, and every
//! other tag is unwrapped to its content. Flat, indent-encoded list items are
//! rebuilt into properly nested lists.
//!
//! A [`Cleaner`] combines the normalizer with post-processing stages chosen on
//! the [`CleanerBuilder`]: acronym tagging ([`AcronymTagger`]), typography
//! rules ([`TypographySanitizer`]), e-mail linking ([`EmailLinker`]) and any
//! custom [`Sanitizer`].
//!
//! ## Quick start
//!
//! ```rust
//! use html_cleaner::CleanerBuilder;
//!
//! let cleaner = CleanerBuilder::new().build().unwrap();
//! let html = concat!(
//!     r#"<h1>Outage</h1><p>The <b>RCMP</b> portal is down.</p><p><br></p>"#,
//!     r#"<ol><li data-list="bullet">Sign out</li>"#,
//!     r#"<li data-list="ordered" class="ql-indent-1">Close Outlook</li></ol>"#,
//! );
//! assert_eq!(
//!     cleaner.clean(html),
//!     concat!(
//!         "<h2>Outage</h2><p>The <strong><abbr>RCMP</abbr></strong> portal is down.</p>",
//!         "<ul><li>Sign out<ol><li>Close Outlook</li></ol></li></ul>",
//!     )
//! );
//! ```
//!
//! For one-off use with the default configuration there is [`clean()`].

pub mod cleaner;
pub mod config;
pub mod error;
pub mod record;
pub mod sanitizer;
pub mod snippet;

pub use cleaner::Cleaner;
pub use config::CleanerBuilder;
pub use error::{CleanerError, Result};
pub use sanitizer::{
    AcronymTagger, DEFAULT_ACRONYMS, EmailLinker, HtmlNormalizer, RECORD_ACRONYMS, Sanitizer,
    SanitizerPipeline, TypographySanitizer, auto_tag_acronyms,
};
pub use snippet::{AlertLevel, AlertSnippet};

use std::sync::OnceLock;

static DEFAULT: OnceLock<Cleaner> = OnceLock::new();

/// The cleaner built from [`CleanerBuilder::new`]'s defaults, created on
/// first use and shared afterwards.
///
/// If the default configuration is rejected, the shared cleaner only
/// normalizes and a warning is logged.
pub fn default_cleaner() -> &'static Cleaner {
    DEFAULT.get_or_init(|| {
        CleanerBuilder::new().build().unwrap_or_else(|e| {
            tracing::warn!("Default cleaner configuration rejected ({e}); post-processing disabled");
            Cleaner::new(SanitizerPipeline::new())
        })
    })
}

/// Clean `html` with the [`default_cleaner`].
pub fn clean(html: &str) -> String {
    default_cleaner().clean(html)
}
