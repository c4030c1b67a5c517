use regex::Regex;

/// Validates user-supplied website URLs before any network activity.
///
/// A URL is accepted when it matches `scheme(optional)://host(.host)+.tld`
/// with an optional path: the host needs at least one dot-separated label
/// ending in a 2+ letter alphabetic suffix, and the path may only contain
/// alphanumerics, dot, slash, underscore and hyphen.
#[derive(Debug)]
pub struct UrlValidator {
    pattern: Regex,
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlValidator {
    /// Create a validator with its pattern compiled once
    pub fn new() -> Self {
        let pattern = Regex::new(
            r"^(https?://)?((([a-zA-Z0-9_-]+)\.)+[a-zA-Z]{2,})(/([a-zA-Z0-9_./-]+)*)?$",
        )
        .expect("URL pattern should be valid");
        Self { pattern }
    }

    /// Returns true when the string looks like a well-formed website URL
    pub fn is_valid(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }
}

/// Prefixes `http://` when a validated URL carries no scheme, so the fetcher
/// and renderer always receive an absolute URL
pub fn ensure_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_urls() {
        let validator = UrlValidator::new();

        assert!(validator.is_valid("http://example.com"));
        assert!(validator.is_valid("https://example.com"));
        assert!(validator.is_valid("https://sub.example.co.uk/docs/page.html"));
        assert!(validator.is_valid("http://example.com/path/to-page_2.html"));
        // The scheme is optional
        assert!(validator.is_valid("example.com"));
        assert!(validator.is_valid("www.example.org/index"));
    }

    #[test]
    fn test_rejects_missing_dotted_host_label() {
        let validator = UrlValidator::new();

        assert!(!validator.is_valid(""));
        assert!(!validator.is_valid("http://"));
        assert!(!validator.is_valid("localhost"));
        assert!(!validator.is_valid("http://localhost"));
        assert!(!validator.is_valid("example"));
        // Numeric-only suffix is not an alphabetic TLD
        assert!(!validator.is_valid("http://example.123"));
    }

    #[test]
    fn test_rejects_disallowed_characters() {
        let validator = UrlValidator::new();

        assert!(!validator.is_valid("http://example.com/path with spaces"));
        assert!(!validator.is_valid("http://example.com/search?q=1"));
        assert!(!validator.is_valid("http://exa mple.com"));
        assert!(!validator.is_valid("ftp://example.com extra"));
    }

    #[test]
    fn test_ensure_scheme() {
        assert_eq!(ensure_scheme("example.com"), "http://example.com");
        assert_eq!(ensure_scheme("http://example.com"), "http://example.com");
        assert_eq!(ensure_scheme("https://example.com"), "https://example.com");
    }
}
