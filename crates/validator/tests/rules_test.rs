//! Behaviour of the built-in rules through the public API.

use formkit_validator::prelude::*;
use pretty_assertions::assert_eq;
use regex::Regex;
use rstest::rstest;

fn message(outcome: Outcome) -> Option<String> {
    outcome.err().map(ValidationError::into_message)
}

#[rstest]
#[case(Value::Null, Some("X"))]
#[case(Value::text(""), Some("X"))]
#[case(Value::text("a"), None)]
fn required_with_custom_message(#[case] value: Value, #[case] expected: Option<&str>) {
    let rule = required().message("X");
    assert_eq!(message(rule.validate(&value)).as_deref(), expected);
}

#[rstest]
#[case("abcd", false)]
#[case("abcde", true)]
fn min_length_five(#[case] input: &str, #[case] ok: bool) {
    assert_eq!(min_length(5).validate(&Value::text(input)).is_ok(), ok);
}

#[rstest]
#[case("invalid-email", false)]
#[case("a@b.com", true)]
#[case("", true)]
fn email_examples(#[case] input: &str, #[case] ok: bool) {
    assert_eq!(email().validate(&Value::text(input)).is_ok(), ok);
}

#[test]
fn pattern_with_message() {
    let rule = pattern(Regex::new("[A-Z]").unwrap()).message("msg");
    assert_eq!(message(rule.validate(&Value::text("abc"))).as_deref(), Some("msg"));
    assert_eq!(message(rule.validate(&Value::text("Abc"))), None);
}

#[test]
fn compose_reports_first_failure_in_order() {
    let rule = compose(rules![
        min_length(3).message("Too short"),
        pattern(Regex::new("[A-Z]").unwrap()).message("Needs uppercase"),
    ]);

    assert_eq!(message(rule.validate(&Value::text("ab"))).as_deref(), Some("Too short"));
    assert_eq!(
        message(rule.validate(&Value::text("abcdef"))).as_deref(),
        Some("Needs uppercase")
    );
    assert_eq!(message(rule.validate(&Value::text("abcDef"))), None);
}

#[test]
fn compose_of_empty_list_is_valid() {
    assert!(compose(rules![]).validate(&Value::text("anything")).is_ok());
}

#[test]
fn compose_accepts_single_rule() {
    let rule = compose(email().boxed());
    assert!(rule.validate(&Value::text("a@b.co")).is_ok());
    assert!(rule.validate(&Value::text("nope")).is_err());
}

#[test]
fn nested_compose_flattens_behaviour() {
    let inner = compose(rules![min_length(2), max_length(4)]);
    let outer = compose(rules![required(), inner]);

    assert_eq!(
        message(outer.validate(&Value::Null)).as_deref(),
        Some("This field is required")
    );
    assert_eq!(
        message(outer.validate(&Value::text("abcde"))).as_deref(),
        Some("Cannot exceed 4 characters")
    );
}

#[test]
fn rules_are_shareable_across_threads() {
    let rule = compose(rules![required(), email()]);
    let handles: Vec<_> = ["a@b.co", "bad"]
        .into_iter()
        .map(|input| {
            let rule = rule.clone();
            std::thread::spawn(move || rule.validate(&Value::text(input)).is_ok())
        })
        .collect();
    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, false]);
}

#[test]
fn default_messages() {
    let cases: Vec<(Rule, Value, &str)> = vec![
        (required().boxed(), Value::Null, "This field is required"),
        (min_length(3).boxed(), Value::text("a"), "Must be at least 3 characters"),
        (max_length(1).boxed(), Value::text("ab"), "Cannot exceed 1 characters"),
        (email().boxed(), Value::text("x"), "Please enter a valid email address"),
        (url().boxed(), Value::text("x"), "Please enter a valid URL"),
        (numeric().boxed(), Value::text("x"), "Please enter a number"),
        (min(3.0).boxed(), Value::text("1"), "Must be at least 3"),
        (max(3.0).boxed(), Value::text("4"), "Must not exceed 3"),
        (pattern(Regex::new("^y$").unwrap()).boxed(), Value::text("x"), "Invalid format"),
        (matches(Value::text("y")).boxed(), Value::text("x"), "Fields do not match"),
        (custom(|_: &Value| false).boxed(), Value::text("x"), "Invalid value"),
    ];

    for (rule, value, expected) in cases {
        assert_eq!(message(rule.validate(&value)).as_deref(), Some(expected));
    }
}
