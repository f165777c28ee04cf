/*!
 * Mock backend implementations for testing.
 *
 * This module provides mock backends that simulate different behaviors:
 * - `MockBackend::working()` - Always answers with a full diagnosis
 * - `MockBackend::rejecting(msg)` - Answers with an application-level error field
 * - `MockBackend::failing()` - Always fails at the transport level
 * - `MockBackend::slow(ms)` - Delays before answering, for supersede tests
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::{
    Backend, ContactRequest, ContactResponse, PredictResponse, SolutionInfo, Upload,
};
use crate::errors::BackendError;

/// Behavior mode for the mock backend
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always answers with a full diagnosis
    Working,
    /// Answers 200 with an application-level `error` field
    Rejecting {
        /// Message placed in the error field
        message: String,
    },
    /// Always fails with a transport error
    Failing,
    /// Delays before answering with a full diagnosis (for supersede testing)
    Slow {
        /// Delay before the response is produced
        delay_ms: u64,
    },
    /// Answers successfully but without an `info` bundle
    NoInfo,
}

/// Mock backend for testing the upload-and-render and contact flows
#[derive(Debug)]
pub struct MockBackend {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter shared across clones
    request_count: Arc<AtomicUsize>,
    /// Custom diagnosis generator (optional)
    custom_response: Option<fn(&Upload) -> PredictResponse>,
}

impl MockBackend {
    /// Create a new mock backend with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
        }
    }

    /// Create a working mock that always answers with a full diagnosis
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock that answers with an application-level error field
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self::new(MockBehavior::Rejecting {
            message: message.into(),
        })
    }

    /// Create a failing mock that always errors at the transport level
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that delays before answering
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Create a mock that answers successfully without an info bundle
    pub fn no_info() -> Self {
        Self::new(MockBehavior::NoInfo)
    }

    /// Set a custom diagnosis generator
    pub fn with_custom_response(mut self, generator: fn(&Upload) -> PredictResponse) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of requests (predict + contact) this mock has served
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// A representative full diagnosis for the given upload
    pub fn sample_response(upload: &Upload) -> PredictResponse {
        PredictResponse {
            error: None,
            image_path: format!("static/uploads/{}", upload.file_name),
            result: "Tomato_Late_Blight".to_string(),
            source: "Offline Database".to_string(),
            search_url: Some("https://www.google.com/search?q=Tomato+Late+Blight".to_string()),
            info: Some(Self::sample_info()),
        }
    }

    /// A representative localized text bundle
    pub fn sample_info() -> SolutionInfo {
        SolutionInfo {
            description_en: "A fungal infection that spreads in cool, wet weather.".to_string(),
            description_hi: "एक फफूंद संक्रमण जो ठंडे, नम मौसम में फैलता है।".to_string(),
            solution_en: "Remove affected leaves and apply a copper-based fungicide.".to_string(),
            solution_hi: "प्रभावित पत्तियों को हटाएं और कॉपर आधारित फफूंदनाशक लगाएं।".to_string(),
        }
    }
}

impl Clone for MockBackend {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior.clone(),
            request_count: Arc::clone(&self.request_count),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn predict(&self, upload: Upload) -> Result<PredictResponse, BackendError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Working => {
                if let Some(generator) = self.custom_response {
                    Ok(generator(&upload))
                } else {
                    Ok(Self::sample_response(&upload))
                }
            }

            MockBehavior::Rejecting { message } => Ok(PredictResponse {
                error: Some(message.clone()),
                ..PredictResponse::default()
            }),

            MockBehavior::Failing => Err(BackendError::Transport(
                "Simulated connection failure".to_string(),
            )),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(*delay_ms)).await;
                Ok(Self::sample_response(&upload))
            }

            MockBehavior::NoInfo => Ok(PredictResponse {
                info: None,
                ..Self::sample_response(&upload)
            }),
        }
    }

    async fn contact(&self, request: ContactRequest) -> Result<ContactResponse, BackendError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Failing => Err(BackendError::Transport(
                "Simulated connection failure".to_string(),
            )),

            MockBehavior::Rejecting { message } => Ok(ContactResponse {
                status: "error".to_string(),
                message: Some(message.clone()),
            }),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(*delay_ms)).await;
                Ok(ContactResponse {
                    status: "success".to_string(),
                    message: Some(format!("Thanks, {}!", request.name)),
                })
            }

            _ => Ok(ContactResponse {
                status: "success".to_string(),
                message: Some(format!("Thanks, {}!", request.name)),
            }),
        }
    }
}
