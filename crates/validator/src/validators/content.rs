//! Format rules: email, URL and regular expressions

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// ============================================================================
// EMAIL
// ============================================================================

crate::rule! {
    /// Requires `local@domain.tld` shape: no whitespace, exactly one `@`,
    /// and a dot in the domain part.
    ///
    /// This is a plausibility check, not RFC 5322.
    pub Email {};
    kind: Email;
    message { "Please enter a valid email address" }
    rule(self, input) { EMAIL_REGEX.is_match(&input.as_text()) }
    fn email;
}

// ============================================================================
// URL
// ============================================================================

crate::rule! {
    /// Requires an absolute URL with a scheme, as parsed by the WHATWG URL
    /// standard.
    pub Url {};
    kind: Url;
    message { "Please enter a valid URL" }
    rule(self, input) { ::url::Url::parse(&input.as_text()).is_ok() }
    fn url;
}

// ============================================================================
// PATTERN
// ============================================================================

crate::rule! {
    /// Requires the text form to match a regular expression.
    ///
    /// Matching is unanchored; anchor the expression with `^...$` to match
    /// the whole value.
    pub Pattern { pattern: Regex };
    kind: Pattern;
    message { "Invalid format" }
    rule(self, input) { self.pattern.is_match(&input.as_text()) }
    fn pattern;
}
