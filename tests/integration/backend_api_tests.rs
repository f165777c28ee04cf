/*!
 * Tests against a live inference backend
 *
 * These tests need a real server on localhost:5000 and are ignored by
 * default. Run them with: cargo test -- --ignored
 */

use std::sync::Arc;

use anyhow::Result;
use leafscan::app_controller::{Controller, DiagnosisOutcome};
use leafscan::app_config::Config;
use leafscan::backend::http::HttpBackend;

use crate::common;

/// Test a real upload round-trip against a local backend
#[tokio::test]
#[ignore = "requires a running backend on localhost:5000"]
async fn test_diagnose_againstLiveBackend_shouldRenderSomething() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let image = common::create_test_image(&temp_dir.path().to_path_buf(), "leaf.jpg")?;

    let config = Config::default();
    let backend = Arc::new(HttpBackend::new(
        &config.backend.endpoint,
        config.backend.timeout_secs,
    ));
    let controller = Controller::with_backend(config, backend)?;

    let outcome = controller.diagnose(&image).await?;

    // A live server answers one way or the other; the panel must be
    // visible and out of the loading state either way.
    assert_ne!(outcome, DiagnosisOutcome::Superseded);
    let view = controller.view();
    assert!(view.panel.visible);

    Ok(())
}
