/*!
 * Tests for the contact form flow over the mock backend
 */

use std::sync::Arc;

use anyhow::Result;
use leafscan::app_controller::{ContactOutcome, Controller};
use leafscan::backend::mock::MockBackend;
use leafscan::ui::Notification;

/// Test the happy path: fields cleared, control restored
#[tokio::test]
async fn test_submitContact_withAcceptingBackend_shouldClearFormAndRestoreControl() -> Result<()> {
    let controller = Controller::new_for_test(Arc::new(MockBackend::working()))?;
    let original_label = controller.view().contact.submit_label.clone();

    let outcome = controller
        .submit_contact("Asha", "asha@example.com", "My tomato plants are wilting")
        .await?;

    assert_eq!(outcome, ContactOutcome::Sent);

    let form = controller.view().contact;
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.message.is_empty());
    assert!(!form.sending);
    assert_eq!(form.submit_label, original_label);
    assert!(matches!(form.notification, Some(Notification::Success(_))));

    Ok(())
}

/// Test the refusal path: fields kept, failure shown
#[tokio::test]
async fn test_submitContact_withRefusingBackend_shouldKeepFields() -> Result<()> {
    let controller = Controller::new_for_test(Arc::new(MockBackend::rejecting("mailbox full")))?;

    let outcome = controller
        .submit_contact("Asha", "asha@example.com", "hello")
        .await?;

    assert_eq!(outcome, ContactOutcome::Failed(Some("mailbox full".to_string())));

    let form = controller.view().contact;
    assert_eq!(form.name, "Asha");
    assert!(!form.sending);
    assert_eq!(
        form.notification,
        Some(Notification::Failure("mailbox full".to_string()))
    );

    Ok(())
}

/// Test the transport-failure path: control restored, failure shown
#[tokio::test]
async fn test_submitContact_withFailingBackend_shouldRestoreControl() -> Result<()> {
    let controller = Controller::new_for_test(Arc::new(MockBackend::failing()))?;
    let original_label = controller.view().contact.submit_label.clone();

    let outcome = controller
        .submit_contact("Asha", "asha@example.com", "hello")
        .await?;

    assert_eq!(outcome, ContactOutcome::ConnectionFailed);

    let form = controller.view().contact;
    assert!(!form.sending);
    assert_eq!(form.submit_label, original_label);
    assert!(matches!(form.notification, Some(Notification::Failure(_))));

    Ok(())
}

/// Test that a second submission is refused while one is in flight
#[tokio::test]
async fn test_submitContact_whileSending_shouldBeRefused() -> Result<()> {
    let controller = Arc::new(Controller::new_for_test(Arc::new(MockBackend::slow(200)))?);

    let first = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move {
            controller
                .submit_contact("Asha", "asha@example.com", "first message")
                .await
        })
    };

    tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

    let second = controller
        .submit_contact("Ravi", "ravi@example.com", "second message")
        .await?;
    assert_eq!(second, ContactOutcome::AlreadySending);

    let first_outcome = first.await??;
    assert_eq!(first_outcome, ContactOutcome::Sent);

    Ok(())
}
