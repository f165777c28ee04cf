/*!
 * Tests for controller-owned view state
 */

use std::sync::Arc;

use leafscan::app_config::Config;
use leafscan::app_controller::Controller;
use leafscan::backend::mock::MockBackend;
use leafscan::language::Language;
use leafscan::ui::DiagnosisStatus;

/// Test that the controller picks up the configured language
#[test]
fn test_withBackend_shouldUseConfiguredLanguage() {
    let config: Config = serde_json::from_str(r#"{"display_language": "hi"}"#).unwrap();
    let controller = Controller::with_backend(config, Arc::new(MockBackend::working())).unwrap();

    assert_eq!(controller.language(), Language::Hi);
}

/// Test that an unsupported configured language is refused at construction
#[test]
fn test_withBackend_withUnsupportedLanguage_shouldFail() {
    let config: Config = serde_json::from_str(r#"{"display_language": "fr"}"#).unwrap();
    assert!(Controller::with_backend(config, Arc::new(MockBackend::working())).is_err());
}

/// Test the toggle operation round-trips
#[test]
fn test_toggleLanguage_twice_shouldReturnToOriginal() {
    let controller = Controller::new_for_test(Arc::new(MockBackend::working())).unwrap();

    assert_eq!(controller.language(), Language::En);
    assert_eq!(controller.toggle_language(), Language::Hi);
    assert_eq!(controller.toggle_language(), Language::En);
}

/// Test the initial view state before any operation
#[test]
fn test_view_beforeAnyOperation_shouldBeIdleAndHidden() {
    let controller = Controller::new_for_test(Arc::new(MockBackend::working())).unwrap();
    let view = controller.view();

    assert!(!view.panel.visible);
    assert_eq!(view.panel.status, DiagnosisStatus::Idle);
    assert!(view.solution.is_none());
    assert!(!view.contact.sending);
}

/// Test that a missing upload file surfaces as an error without
/// touching the panel
#[tokio::test]
async fn test_diagnose_withMissingFile_shouldErrorAndLeavePanelIdle() {
    let controller = Controller::new_for_test(Arc::new(MockBackend::working())).unwrap();

    let result = controller
        .diagnose(std::path::Path::new("/nonexistent/leaf.jpg"))
        .await;
    assert!(result.is_err());

    let view = controller.view();
    assert!(!view.panel.visible);
    assert_eq!(view.panel.status, DiagnosisStatus::Idle);
}
