/*!
 * End-to-end tests for the upload-and-render flow over the mock backend
 */

use std::sync::Arc;

use anyhow::Result;
use leafscan::app_controller::{Controller, DiagnosisOutcome};
use leafscan::backend::mock::MockBackend;
use leafscan::backend::PredictResponse;
use leafscan::language::Language;
use leafscan::ui::{BadgeStyle, DiagnosisStatus};

use crate::common;

/// Test the happy path: full diagnosis applied to the panel
#[tokio::test]
async fn test_diagnose_withWorkingBackend_shouldRenderFullPanel() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let image = common::create_test_image(&temp_dir.path().to_path_buf(), "leaf.jpg")?;

    let controller = Controller::new_for_test(Arc::new(MockBackend::working()))?;
    let outcome = controller.diagnose(&image).await?;

    assert_eq!(outcome, DiagnosisOutcome::Diagnosed);

    let view = controller.view();
    assert!(view.panel.visible);
    assert_eq!(view.panel.file_name.as_deref(), Some("leaf.jpg"));
    // Underscores in the class name are replaced by spaces
    assert_eq!(
        view.panel.status,
        DiagnosisStatus::Diagnosed("Tomato Late Blight".to_string())
    );
    assert_eq!(view.panel.badge.text, "Offline Database");
    assert_eq!(view.panel.badge.style, BadgeStyle::Offline);
    assert_eq!(view.panel.image_path.as_deref(), Some("static/uploads/leaf.jpg"));
    assert!(view.panel.search_url.is_some());
    assert!(view.solution.is_some());
    // English text is rendered under the default language
    let record = view.solution.as_ref().unwrap();
    assert_eq!(view.panel.description, record.description(Language::En));
    assert_eq!(view.panel.remedy, record.remedy(Language::En));

    Ok(())
}

/// Test underscore cleanup on a multi-word class name
#[tokio::test]
async fn test_diagnose_withUnderscoredClassName_shouldRenderSpacedLabel() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let image = common::create_test_image(&temp_dir.path().to_path_buf(), "leaf.jpg")?;

    let backend = MockBackend::working().with_custom_response(|upload| PredictResponse {
        result: "Tomato_Leaf_Mold".to_string(),
        source: "AI Diagnosis (Llama Vision)".to_string(),
        image_path: format!("static/uploads/{}", upload.file_name),
        ..PredictResponse::default()
    });

    let controller = Controller::new_for_test(Arc::new(backend))?;
    controller.diagnose(&image).await?;

    let view = controller.view();
    assert_eq!(
        view.panel.status,
        DiagnosisStatus::Diagnosed("Tomato Leaf Mold".to_string())
    );
    assert_eq!(view.panel.status.to_string(), "Tomato Leaf Mold");
    assert!(!view.panel.status.to_string().contains('_'));
    // An AI-assisted source gets the online badge style
    assert_eq!(view.panel.badge.style, BadgeStyle::Online);

    Ok(())
}

/// Test the application-level error path: label flips, nothing else moves
#[tokio::test]
async fn test_diagnose_withRejectingBackend_shouldOnlyFlipLabel() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let image = common::create_test_image(&temp_dir.path().to_path_buf(), "leaf.jpg")?;

    let controller = Controller::new_for_test(Arc::new(MockBackend::rejecting("no file")))?;
    let outcome = controller.diagnose(&image).await?;

    assert_eq!(outcome, DiagnosisOutcome::Rejected("no file".to_string()));

    let view = controller.view();
    assert_eq!(view.panel.status, DiagnosisStatus::Error);
    assert_eq!(view.panel.notice.as_deref(), Some("Error: no file"));
    // Image, badge, and link are not updated
    assert!(view.panel.image_path.is_none());
    assert_eq!(view.panel.badge.text, "Connecting...");
    assert_eq!(view.panel.badge.style, BadgeStyle::Neutral);
    assert!(view.panel.search_url.is_none());
    assert!(view.solution.is_none());

    Ok(())
}

/// Test the transport-failure path: connection-failed label plus hint,
/// loading state left elsewhere
#[tokio::test]
async fn test_diagnose_withFailingBackend_shouldShowConnectionFailure() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let image = common::create_test_image(&temp_dir.path().to_path_buf(), "leaf.jpg")?;

    let controller = Controller::new_for_test(Arc::new(MockBackend::failing()))?;
    let outcome = controller.diagnose(&image).await?;

    assert_eq!(outcome, DiagnosisOutcome::ConnectionFailed);

    let view = controller.view();
    assert_eq!(view.panel.status, DiagnosisStatus::ConnectionFailed);
    assert!(view.panel.hint.as_deref().unwrap_or_default().contains("backend server"));
    // Badge and description keep their loading values
    assert_eq!(view.panel.badge.text, "Connecting...");
    assert_eq!(view.panel.description, "Fetching details...");
    assert_eq!(view.panel.remedy, "Fetching remedy...");

    Ok(())
}

/// Test that a response without an info bundle keeps the placeholders
#[tokio::test]
async fn test_diagnose_withNoInfo_shouldKeepFetchingPlaceholders() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let image = common::create_test_image(&temp_dir.path().to_path_buf(), "leaf.jpg")?;

    let controller = Controller::new_for_test(Arc::new(MockBackend::no_info()))?;
    let outcome = controller.diagnose(&image).await?;

    assert_eq!(outcome, DiagnosisOutcome::Diagnosed);

    let view = controller.view();
    assert!(view.solution.is_none());
    assert_eq!(view.panel.description, "Fetching details...");

    Ok(())
}

/// Test language toggling over a diagnosed panel
#[tokio::test]
async fn test_toggleLanguage_afterDiagnosis_shouldRerenderConsistently() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let image = common::create_test_image(&temp_dir.path().to_path_buf(), "leaf.jpg")?;

    let controller = Controller::new_for_test(Arc::new(MockBackend::working()))?;
    controller.diagnose(&image).await?;

    let english = controller.view();
    let record = english.solution.clone().unwrap();

    controller.toggle_language();
    let hindi = controller.view();
    // Both fields flip together - never a mix of the two languages
    assert_eq!(hindi.panel.description, record.description(Language::Hi));
    assert_eq!(hindi.panel.remedy, record.remedy(Language::Hi));

    controller.toggle_language();
    let back = controller.view();
    assert_eq!(back.panel.description, english.panel.description);
    assert_eq!(back.panel.remedy, english.panel.remedy);

    Ok(())
}

/// Test request fencing: a superseded response never overwrites the panel
#[tokio::test]
async fn test_diagnose_whenSuperseded_shouldDiscardStaleResponse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let first_image = common::create_test_image(&dir, "first.jpg")?;
    let second_image = common::create_test_image(&dir, "second.jpg")?;

    let controller = Arc::new(Controller::new_for_test(Arc::new(MockBackend::slow(200)))?);

    let first = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.diagnose(&first_image).await })
    };

    // Let the first request leave before issuing the second
    tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

    let second = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.diagnose(&second_image).await })
    };

    let first_outcome = first.await??;
    let second_outcome = second.await??;

    assert_eq!(first_outcome, DiagnosisOutcome::Superseded);
    assert_eq!(second_outcome, DiagnosisOutcome::Diagnosed);

    // The panel reflects the second upload only
    let view = controller.view();
    assert_eq!(view.panel.file_name.as_deref(), Some("second.jpg"));
    assert_eq!(view.panel.image_path.as_deref(), Some("static/uploads/second.jpg"));

    Ok(())
}
