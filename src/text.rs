//! Small string helpers used by configuration and key filtering.

/// Parse a boolean flag, ignoring case and surrounding whitespace.
///
/// Only `true` and `false` are accepted. Anything else yields `None`.
///
/// # Example
///
/// ```rust
/// use netfx_discovery::parse_bool;
///
/// assert_eq!(parse_bool(" True "), Some(true));
/// assert_eq!(parse_bool("FALSE"), Some(false));
/// assert_eq!(parse_bool("yes"), None);
/// ```
pub fn parse_bool(s: &str) -> Option<bool> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Translate a filename wildcard into an anchored regular expression.
///
/// `*` matches any run of characters and `?` matches exactly one. Every
/// other character matches itself. An empty pattern matches everything.
///
/// # Example
///
/// ```rust
/// use netfx_discovery::wildcard_pattern;
///
/// assert_eq!(wildcard_pattern("v*"), "^v.*$");
/// assert_eq!(wildcard_pattern(""), "^.*$");
/// ```
pub fn wildcard_pattern(pattern: &str) -> String {
    if pattern.is_empty() {
        return "^.*$".to_string();
    }

    let escaped = regex::escape(pattern)
        .replace(r"\*", ".*")
        .replace(r"\?", ".");
    format!("^{escaped}$")
}
