/*!
 * Backend clients for the plant-disease inference service.
 *
 * This module contains the client seam to the two HTTP/JSON endpoints the
 * page consumes:
 * - `POST /predict`: multipart image upload, answered with a diagnosis
 * - `POST /contact`: JSON contact message, answered with a status
 *
 * `http` holds the reqwest implementation; `mock` holds a scriptable
 * backend for tests.
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::errors::BackendError;

/// A file staged for upload, alive for the duration of one request
#[derive(Debug, Clone)]
pub struct Upload {
    /// Original file name, shown in the result panel and sent with the part
    pub file_name: String,
    /// Content type for the multipart part
    pub mime_type: String,
    /// Raw file bytes
    pub bytes: Vec<u8>,
}

/// Localized description/remedy bundle returned with a diagnosis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionInfo {
    /// Condition description, English
    #[serde(default)]
    pub description_en: String,
    /// Condition description, Hindi
    #[serde(default)]
    pub description_hi: String,
    /// Suggested remedy, English
    #[serde(default)]
    pub solution_en: String,
    /// Suggested remedy, Hindi
    #[serde(default)]
    pub solution_hi: String,
}

/// Response payload from the predict endpoint
///
/// When `error` is present the remaining fields are absent or meaningless;
/// every field therefore carries a serde default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Application-level rejection reported inside a successful response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Server-side path of the stored upload, displayed as the result image
    #[serde(default)]
    pub image_path: String,

    /// Predicted class name, words separated by underscores
    #[serde(default)]
    pub result: String,

    /// Human-readable provenance label ("AI Diagnosis", "Offline Database", ...)
    #[serde(default)]
    pub source: String,

    /// External search link for the condition, when the server provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_url: Option<String>,

    /// Localized text bundle for the diagnosed condition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<SolutionInfo>,
}

/// Request body for the contact endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Response payload from the contact endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactResponse {
    /// "success" on acceptance, anything else is a failure
    #[serde(default)]
    pub status: String,

    /// Optional human-readable detail, shown on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactResponse {
    /// Whether the backend accepted the message
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Common trait for inference backend clients
///
/// The controller talks to the service exclusively through this seam,
/// allowing the HTTP client and the test mock to be used interchangeably.
#[async_trait]
pub trait Backend: Send + Sync + Debug {
    /// Upload an image and obtain a diagnosis
    ///
    /// # Arguments
    /// * `upload` - The staged file to submit
    ///
    /// # Returns
    /// * `Result<PredictResponse, BackendError>` - The parsed response, or a
    ///   transport-level failure. An `error` field inside the response is
    ///   not an `Err` here; the caller inspects the payload.
    async fn predict(&self, upload: Upload) -> Result<PredictResponse, BackendError>;

    /// Submit a contact message
    ///
    /// # Arguments
    /// * `request` - Name, email, and message text
    ///
    /// # Returns
    /// * `Result<ContactResponse, BackendError>` - The parsed response or a
    ///   transport-level failure
    async fn contact(&self, request: ContactRequest) -> Result<ContactResponse, BackendError>;
}

pub mod http;
pub mod mock;
