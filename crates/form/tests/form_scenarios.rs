//! End-to-end field and form behaviour against the in-memory store.

use std::sync::Arc;

use formkit_form::{
    ErrorDisplay, FieldConfig, FieldConfigError, FieldController, FieldKind, FormContext,
    FormStore, validate_all,
};
use formkit_validator::prelude::*;
use pretty_assertions::assert_eq;

fn shared_store() -> Arc<FormStore> {
    Arc::new(FormStore::new())
}

#[test]
fn blur_on_empty_required_field_reports_required() {
    let store = shared_store();
    let mut field = FieldController::new(FieldKind::Text)
        .name("name")
        .required(true)
        .context(store.clone());

    assert!(!field.on_blur());
    let error = field.local_error().unwrap();
    assert!(error.contains("required"));
    assert_eq!(store.error("name").as_deref(), Some(error));
    assert!(store.is_touched("name"));
}

#[test]
fn fixing_a_field_clears_the_store() {
    let store = shared_store();
    let mut field = FieldController::new(FieldKind::Email)
        .name("email")
        .context(store.clone());

    field.on_input("not-an-email");
    assert!(!field.on_blur());
    assert_eq!(store.error_count(), 1);

    field.on_input("a@b.com");
    assert!(field.on_blur());
    assert!(store.is_valid());
    assert_eq!(store.value("email"), Some(Value::text("a@b.com")));
}

#[test]
fn context_disabled_overrides_field() {
    let store = shared_store();
    let field = FieldController::new(FieldKind::Text)
        .name("any")
        .disabled(false)
        .context(store.clone());

    assert!(!field.is_disabled());
    store.set_disabled(true);
    assert!(field.is_disabled());
}

#[test]
fn siblings_share_one_store() {
    let store = shared_store();
    let password_value = "Secret1!x";
    let mut secret = FieldController::new(FieldKind::Password)
        .name("password")
        .required(true)
        .rule(password(PasswordPolicy::default()))
        .context(store.clone());
    let mut confirm = FieldController::new(FieldKind::Password)
        .name("confirm")
        .required(true)
        .rule(matches(Value::text(password_value)))
        .context(store.clone());

    secret.on_input(password_value);
    confirm.on_input("Secret1!y");
    assert!(!validate_all([&mut secret, &mut confirm]));

    let snapshot = store.snapshot();
    assert_eq!(snapshot.errors.len(), 1);
    assert_eq!(snapshot.errors["confirm"], "Fields do not match");
    assert_eq!(
        confirm.display_error(),
        ErrorDisplay::Message("Fields do not match".into())
    );
}

#[test]
fn explicit_override_beats_store_error() {
    let store = shared_store();
    let mut field = FieldController::new(FieldKind::Text)
        .name("handle")
        .required(true)
        .error_message("Taken, pick another")
        .context(store.clone());

    field.on_blur();
    assert_eq!(store.error("handle").as_deref(), Some("This field is required"));
    assert_eq!(
        field.display_error(),
        ErrorDisplay::Message("Taken, pick another".into())
    );
}

#[test]
fn fields_from_toml() {
    #[derive(serde::Deserialize)]
    struct Form {
        fields: Vec<FieldConfig>,
    }

    let form: Form = toml::from_str(
        r#"
        [[fields]]
        name = "username"
        label = "Username"
        required = true
        rules = [
            { rule = "min_length", min = 3, message = "Too short" },
            { rule = "pattern", pattern = "[A-Z]", message = "Needs uppercase" },
        ]

        [[fields]]
        name = "site"
        kind = "url"
        messages = { url = "Links start with a scheme" }
        "#,
    )
    .unwrap();

    let store = shared_store();
    let mut fields: Vec<FieldController> = form
        .fields
        .iter()
        .map(|config| FieldController::from_config(config).map(|f| f.context(store.clone())))
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(fields[0].display_label().as_deref(), Some("Username *"));

    for (input, expected) in [
        ("ab", Some("Too short")),
        ("abcdef", Some("Needs uppercase")),
        ("abcDef", None),
    ] {
        fields[0].on_input(input);
        fields[0].on_blur();
        assert_eq!(fields[0].local_error(), expected, "{input}");
    }

    fields[1].on_input("example.com");
    assert!(!validate_all(&mut fields));
    assert_eq!(store.error("site").as_deref(), Some("Links start with a scheme"));
    assert_eq!(store.error("username"), None);
}

#[test]
fn bad_pattern_in_config_names_the_field() {
    let config: FieldConfig = serde_json::from_str(
        r#"{"name": "zip", "rules": [{"rule": "pattern", "pattern": "(["}]}"#,
    )
    .unwrap();

    let err = FieldController::from_config(&config).unwrap_err();
    let FieldConfigError::Rule { field, .. } = &err;
    assert_eq!(field, "zip");
    assert!(err.to_string().starts_with("field `zip`: invalid pattern"));
}
