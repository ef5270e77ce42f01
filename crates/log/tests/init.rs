//! Installs the global subscriber; kept to one test per process.

use formkit_log::{Config, Format, LogError};

#[test]
fn second_init_is_rejected() {
    formkit_log::init_with(Config::default().with_level("debug").with_format(Format::Json)).unwrap();
    tracing::debug!(target: "formkit::log", "visible after init");

    let err = formkit_log::init().unwrap_err();
    assert!(matches!(err, LogError::AlreadyInitialized(_)), "{err}");
}
