//! Builder for configuring a [`Cleaner`].

use std::collections::HashSet;

use crate::cleaner::Cleaner;
use crate::error::{CleanerError, Result};
use crate::sanitizer::{
    AcronymTagger, DEFAULT_ACRONYMS, EmailLinker, Sanitizer, SanitizerPipeline,
    TypographySanitizer,
};

/// Builder for configuring a [`Cleaner`].
///
/// The allow-list itself is fixed; the builder only chooses which
/// post-processing stages run on the normalized output, and in what setup.
/// Stages run in this order: typography, e-mail linking, acronym tagging,
/// then any custom sanitizers in the order they were added.
///
/// # Example
///
/// ```
/// use html_cleaner::CleanerBuilder;
///
/// let cleaner = CleanerBuilder::new()
///     .acronyms(["RCMP", "GRC"])
///     .typography(true)
///     .build()
///     .unwrap();
/// assert_eq!(
///     cleaner.clean("<p>l'RCMP  MS</p>"),
///     "<p>l\u{2019}<abbr>RCMP</abbr> Microsoft</p>"
/// );
/// ```
pub struct CleanerBuilder {
    acronyms: Vec<String>,
    tag_acronyms: bool,
    expand_ms: bool,
    typography: bool,
    link_emails: bool,
    sanitizers: SanitizerPipeline,
}

impl CleanerBuilder {
    /// Create a new builder with defaults.
    ///
    /// Defaults: [`DEFAULT_ACRONYMS`] tagged, `MS` expanded, typography and
    /// e-mail linking off, no custom sanitizers.
    pub fn new() -> Self {
        Self {
            acronyms: DEFAULT_ACRONYMS.iter().map(|a| a.to_string()).collect(),
            tag_acronyms: true,
            expand_ms: true,
            typography: false,
            link_emails: false,
            sanitizers: SanitizerPipeline::new(),
        }
    }

    /// Replace the acronym list.
    pub fn acronyms<I, S>(mut self, acronyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.acronyms = acronyms.into_iter().map(Into::into).collect();
        self
    }

    /// Append one acronym to the list.
    pub fn add_acronym(mut self, acronym: impl Into<String>) -> Self {
        self.acronyms.push(acronym.into());
        self
    }

    /// Wrap configured acronyms in `<abbr>`.
    pub fn auto_tag_acronyms(mut self, enabled: bool) -> Self {
        self.tag_acronyms = enabled;
        self
    }

    /// Spell out the token `MS` as `Microsoft`.
    pub fn expand_ms(mut self, enabled: bool) -> Self {
        self.expand_ms = enabled;
        self
    }

    /// Apply the default [`TypographySanitizer`] rules.
    pub fn typography(mut self, enabled: bool) -> Self {
        self.typography = enabled;
        self
    }

    /// Turn bare e-mail addresses into `mailto:` links.
    pub fn link_emails(mut self, enabled: bool) -> Self {
        self.link_emails = enabled;
        self
    }

    /// Append a custom [`Sanitizer`] that runs after the built-in stages.
    pub fn add_sanitizer(mut self, sanitizer: impl Sanitizer + 'static) -> Self {
        self.sanitizers.add(sanitizer);
        self
    }

    /// Validate the configuration and assemble the [`Cleaner`].
    ///
    /// Fails with [`CleanerError::InvalidAcronym`] for a malformed token and
    /// [`CleanerError::Config`] when the same acronym is listed twice.
    pub fn build(self) -> Result<Cleaner> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = self.acronyms.iter().find(|a| !seen.insert(a.as_str())) {
            return Err(CleanerError::Config(format!(
                "acronym {duplicate} is listed more than once"
            )));
        }

        let mut pipeline = SanitizerPipeline::new();
        if self.typography {
            pipeline.add(TypographySanitizer::default());
        }
        if self.link_emails {
            pipeline.add(EmailLinker);
        }
        if self.tag_acronyms || self.expand_ms {
            let acronyms: &[String] = if self.tag_acronyms { &self.acronyms } else { &[] };
            pipeline.add(AcronymTagger::new(acronyms)?.expand_ms(self.expand_ms));
        }
        if !self.sanitizers.is_empty() {
            pipeline.add(self.sanitizers);
        }

        tracing::debug!("Built cleaner with {} post-processing stages", pipeline.len());
        Ok(Cleaner::new(pipeline))
    }
}

impl Default for CleanerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
