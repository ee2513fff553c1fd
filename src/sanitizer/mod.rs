//! Sanitizer stages that turn editor markup into the constrained output grammar.
//!
//! The core stage is [`HtmlNormalizer`], which parses markup and rebuilds it
//! from the allow-list in [`policy`]. The remaining stages operate on the
//! normalizer's output string and are composed into a [`SanitizerPipeline`]
//! that runs them sequentially:
//!
//! - [`AcronymTagger`] -- wraps known acronyms in `<abbr>`.
//! - [`TypographySanitizer`] -- regex rules applied to text segments.
//! - [`EmailLinker`] -- turns bare e-mail addresses into `mailto:` links.

mod acronym;
mod email;
pub mod href;
pub mod inline;
pub mod list;
pub mod normalizer;
pub mod policy;
pub mod text;
mod typography;

pub use acronym::{AcronymTagger, DEFAULT_ACRONYMS, RECORD_ACRONYMS, auto_tag_acronyms};
pub use email::EmailLinker;
pub use normalizer::HtmlNormalizer;
pub use typography::TypographySanitizer;

/// Trait for HTML content sanitizers.
///
/// Each sanitizer receives an HTML string and returns a transformed version.
/// Implementations must be `Send + Sync` so a configured cleaner can be shared
/// between threads.
pub trait Sanitizer: Send + Sync {
    /// Transform the given HTML content, returning the sanitized result.
    fn sanitize(&self, html: &str) -> String;
}

/// An ordered chain of [`Sanitizer`] implementations applied sequentially.
///
/// Each sanitizer receives the output of the previous one. An empty pipeline
/// is a no-op.
#[derive(Default)]
pub struct SanitizerPipeline {
    sanitizers: Vec<Box<dyn Sanitizer>>,
}

impl SanitizerPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sanitizer to the end of the pipeline.
    pub fn add(&mut self, sanitizer: impl Sanitizer + 'static) {
        self.sanitizers.push(Box::new(sanitizer));
    }

    /// Run the full pipeline on the given HTML, returning the final result.
    pub fn sanitize(&self, html: &str) -> String {
        self.sanitizers
            .iter()
            .fold(html.to_string(), |acc, s| s.sanitize(&acc))
    }

    /// Returns the number of stages in the pipeline.
    pub fn len(&self) -> usize {
        self.sanitizers.len()
    }

    /// Returns `true` if no sanitizers have been added.
    pub fn is_empty(&self) -> bool {
        self.sanitizers.is_empty()
    }
}

impl Sanitizer for SanitizerPipeline {
    fn sanitize(&self, html: &str) -> String {
        SanitizerPipeline::sanitize(self, html)
    }
}
