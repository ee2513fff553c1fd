//! The assembled cleaning engine.

use serde_json::{Map, Value};

use crate::config::CleanerBuilder;
use crate::record;
use crate::sanitizer::{HtmlNormalizer, Sanitizer, SanitizerPipeline};
use crate::snippet::{AlertLevel, AlertSnippet};

/// Normalizer plus the post-processing stages chosen on the builder.
///
/// Obtain one from [`CleanerBuilder`]. A `Cleaner` holds no mutable state, so
/// one instance can serve any number of editing contexts.
pub struct Cleaner {
    normalizer: HtmlNormalizer,
    post: SanitizerPipeline,
}

impl Cleaner {
    /// Start configuring a cleaner.
    pub fn builder() -> CleanerBuilder {
        CleanerBuilder::new()
    }

    pub(crate) fn new(post: SanitizerPipeline) -> Self {
        Self {
            normalizer: HtmlNormalizer::new(),
            post,
        }
    }

    /// Normalize `html` and run the post-processing stages on the result.
    pub fn clean(&self, html: &str) -> String {
        let normalized = self.normalizer.normalize(html);
        if normalized.is_empty() {
            return normalized;
        }
        self.post.sanitize(&normalized)
    }

    /// Normalize `html` without any post-processing.
    pub fn normalize(&self, html: &str) -> String {
        self.normalizer.normalize(html)
    }

    /// Returns `true` when `html` carries no content once normalized, such as
    /// an editor's empty `<p><br></p>` state.
    pub fn is_blank(&self, html: &str) -> bool {
        self.normalizer.normalize(html).is_empty()
    }

    /// Clean every string field of a JSON record, recursing into nested
    /// objects and arrays. Other values are copied unchanged.
    pub fn clean_record(&self, record: &Map<String, Value>) -> Map<String, Value> {
        record::clean_record(self, record)
    }

    /// Clean both language variants and wrap them in a bilingual alert
    /// snippet.
    pub fn alert_snippet(&self, level: AlertLevel, en: &str, fr: &str) -> String {
        AlertSnippet {
            level,
            en: self.clean(en),
            fr: self.clean(fr),
        }
        .render()
    }
}

impl Sanitizer for Cleaner {
    fn sanitize(&self, html: &str) -> String {
        self.clean(html)
    }
}
