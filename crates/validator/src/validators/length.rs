//! Length rules
//!
//! Length is measured in Unicode scalar values (chars) of the value's text
//! form, so `"ñ"` counts as one.

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::rule! {
    /// Requires at least `min` characters.
    pub MinLength { min: usize };
    kind: MinLength;
    message { format!("Must be at least {min} characters") }
    rule(self, input) { input.char_len() >= self.min }
    fn min_length;
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::rule! {
    /// Allows at most `max` characters.
    pub MaxLength { max: usize };
    kind: MaxLength;
    message { format!("Cannot exceed {max} characters") }
    rule(self, input) { input.char_len() <= self.max }
    fn max_length;
}
