//! Link target policy.

/// Schemes that are never allowed as a link target.
pub const REJECTED_SCHEMES: &[&str] = &["javascript", "data"];

/// Resolve a link's `href` attribute.
///
/// Returns `None` when the attribute is missing or blank, or when its scheme
/// is rejected. Scheme comparison is case-insensitive. Like a browser's URL
/// parser it ignores leading and trailing whitespace and control characters,
/// and tabs and newlines anywhere, so `\u{1}java\tscript:` is still
/// `javascript:`.
pub fn resolve_href(href: Option<&str>) -> Option<&str> {
    let href = href?.trim_matches(|c: char| c.is_whitespace() || c.is_control());
    if href.is_empty() {
        return None;
    }

    let stripped: String = href
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();
    if let Some((scheme, _)) = stripped.split_once(':') {
        if REJECTED_SCHEMES
            .iter()
            .any(|rejected| rejected.eq_ignore_ascii_case(scheme))
        {
            tracing::debug!("Rejected link target with scheme {scheme}:");
            return None;
        }
    }
    Some(href)
}
