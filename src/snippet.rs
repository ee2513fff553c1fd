//! Server-side-include snippets that choose between English and French
//! content at serve time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opening of the SSI conditional; true on English pages.
pub const SSI_IF_ENGLISH: &str = r#"<!--#if expr="${pg-lang1} = 'eng'"-->"#;
/// Branch separator of the SSI conditional.
pub const SSI_ELSE: &str = "<!--#else -->";
/// Closing of the SSI conditional.
pub const SSI_ENDIF: &str = "<!--#endif -->";

/// Wrap two language variants in an SSI conditional block.
///
/// ```
/// use html_cleaner::snippet::ssi_conditional;
///
/// assert_eq!(
///     ssi_conditional("<p>Hi</p>", "<p>Salut</p>"),
///     r#"<!--#if expr="${pg-lang1} = 'eng'"--><p>Hi</p><!--#else --><p>Salut</p><!--#endif -->"#
/// );
/// ```
pub fn ssi_conditional(en: &str, fr: &str) -> String {
    format!("{SSI_IF_ENGLISH}{en}{SSI_ELSE}{fr}{SSI_ENDIF}")
}

/// Visual level of an alert banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    /// Neutral notice.
    Info,
    /// Service restored or task completed.
    Success,
    /// Degraded service or upcoming maintenance.
    Warning,
    /// Outage.
    Danger,
}

impl AlertLevel {
    /// The level's name as used in the `alert-*` CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            AlertLevel::Info => "info",
            AlertLevel::Success => "success",
            AlertLevel::Warning => "warning",
            AlertLevel::Danger => "danger",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bilingual alert banner. Content is inserted as given; use
/// [`Cleaner::alert_snippet`](crate::Cleaner::alert_snippet) to clean it first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSnippet {
    /// Banner style.
    pub level: AlertLevel,
    /// English content.
    pub en: String,
    /// French content.
    pub fr: String,
}

impl AlertSnippet {
    /// Render the banner for both languages inside an SSI conditional.
    pub fn render(&self) -> String {
        ssi_conditional(
            &alert_div(self.level, &self.en),
            &alert_div(self.level, &self.fr),
        )
    }
}

fn alert_div(level: AlertLevel, content: &str) -> String {
    format!(r#"<div class="alert alert-{level}" role="alert">{content}</div>"#)
}
