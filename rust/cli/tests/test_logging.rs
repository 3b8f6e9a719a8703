mod helpers;

use helpers::{EnvGuard, run_cli};
use serial_test::serial;
use sevens_cli::logging::CaptureLayer;
use tracing::Level;
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;

#[test]
#[serial]
fn failed_load_is_logged_as_warning() {
    let _env = EnvGuard::clean();
    let capture = CaptureLayer::new();
    let registry = Registry::default().with(capture.clone());

    let res = tracing::subscriber::with_default(registry, || {
        run_cli(&["competition", "/nonexistent/libnope.so"])
    });
    assert_eq!(res.exit_code, 2);

    let entries = capture.entries();
    assert!(
        entries
            .iter()
            .any(|e| e.level == Level::WARN && e.target.starts_with("sevens_ai")),
        "{entries:?}"
    );
}

#[test]
#[serial]
fn rounds_are_logged_by_the_engine() {
    let _env = EnvGuard::clean();
    let capture = CaptureLayer::new();
    let registry = Registry::default().with(capture.clone());

    let res = tracing::subscriber::with_default(registry, || run_cli(&["demo", "--seed", "1"]));
    assert_eq!(res.exit_code, 0);

    let entries = capture.entries();
    assert!(entries.iter().any(|e| e.message.contains("round scored")));
    assert!(entries.iter().any(|e| e.message.contains("game finished")));
}
