//! Numeric rules
//!
//! Values are coerced with [`Value::to_number`](crate::foundation::Value::to_number):
//! surrounding whitespace is ignored, hex/octal/binary prefixes and exponents
//! are accepted, and anything without a numeric reading fails.

// ============================================================================
// NUMERIC
// ============================================================================

crate::rule! {
    /// Requires the value to coerce to a number.
    pub Numeric {};
    kind: Numeric;
    message { "Please enter a number" }
    rule(self, input) { input.to_number().is_some() }
    fn numeric;
}

// ============================================================================
// MIN
// ============================================================================

crate::rule! {
    /// Requires a number greater than or equal to `min`.
    ///
    /// Non-numeric values fail with this rule's message.
    pub Min { min: f64 };
    kind: Min;
    message { format!("Must be at least {min}") }
    rule(self, input) { input.to_number().is_some_and(|n| n >= self.min) }
    fn min;
}

// ============================================================================
// MAX
// ============================================================================

crate::rule! {
    /// Requires a number less than or equal to `max`.
    ///
    /// Non-numeric values fail with this rule's message.
    pub Max { max: f64 };
    kind: Max;
    message { format!("Must not exceed {max}") }
    rule(self, input) { input.to_number().is_some_and(|n| n <= self.max) }
    fn max;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, Value};
    use rstest::rstest;

    #[rstest]
    #[case(Value::text("42"), true)]
    #[case(Value::text(" 4.5 "), true)]
    #[case(Value::text("1e3"), true)]
    #[case(Value::text("0x1F"), true)]
    #[case(Value::text("   "), true)]
    #[case(Value::Number(3.0), true)]
    #[case(Value::Bool(true), true)]
    #[case(Value::text(""), true)]
    #[case(Value::Null, true)]
    #[case(Value::text("abc"), false)]
    #[case(Value::text("12abc"), false)]
    #[case(Value::text("nan"), false)]
    fn test_numeric(#[case] value: Value, #[case] ok: bool) {
        assert_eq!(numeric().validate(&value).is_ok(), ok, "{value:?}");
    }

    #[test]
    fn test_min_bounds_inclusive() {
        let rule = min(5.0);
        assert!(rule.validate(&Value::text("5")).is_ok());
        assert!(rule.validate(&Value::Number(6.0)).is_ok());
        let err = rule.validate(&Value::text("4")).unwrap_err();
        assert_eq!(err.code, "min");
        assert_eq!(err.message, "Must be at least 5");
    }

    #[test]
    fn test_max_bounds_inclusive() {
        let rule = max(10.0);
        assert!(rule.validate(&Value::text("10")).is_ok());
        let err = rule.validate(&Value::text("10.5")).unwrap_err();
        assert_eq!(err.message, "Must not exceed 10");
    }

    #[test]
    fn test_fractional_bound_in_message() {
        let err = min(0.5).validate(&Value::Number(0.25)).unwrap_err();
        assert_eq!(err.message, "Must be at least 0.5");
    }

    #[test]
    fn test_non_numeric_fails_bounds() {
        assert!(min(0.0).validate(&Value::text("abc")).is_err());
        assert!(max(0.0).validate(&Value::text("abc")).is_err());
    }

    #[test]
    fn test_empty_skips_bounds() {
        assert!(min(5.0).validate(&Value::Null).is_ok());
        assert!(max(-5.0).validate(&Value::text("")).is_ok());
    }
}
