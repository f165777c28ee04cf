use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

use crate::backend::{Backend, ContactRequest, ContactResponse, PredictResponse, Upload};
use crate::errors::BackendError;

/// HTTP client for the inference backend
#[derive(Debug)]
pub struct HttpBackend {
    /// Base URL of the backend, without a trailing slash
    base_url: String,
    /// HTTP client for making requests
    client: Client,
}

impl HttpBackend {
    /// Create a new client for the given endpoint
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        let endpoint = endpoint.into();
        let base_url = endpoint.trim_end_matches('/').to_string();

        Self {
            base_url,
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Parse a response body as `T`, logging the raw text on failure
    ///
    /// HTTP status is deliberately not consulted: the page's fetch chain
    /// never branched on it, only on body shape. A JSON error body with an
    /// `error` field parses fine and is handled by the caller; anything
    /// unparseable is a transport-level failure.
    fn parse_body<T: serde::de::DeserializeOwned>(
        context: &str,
        response_text: &str,
    ) -> Result<T, BackendError> {
        serde_json::from_str::<T>(response_text).map_err(|e| {
            error!(
                "Failed to parse {} response: {}. Raw response (first 500 chars): {}",
                context,
                e,
                if response_text.chars().count() > 500 {
                    response_text.chars().take(500).collect::<String>()
                } else {
                    response_text.to_string()
                }
            );
            BackendError::MalformedResponse(e.to_string())
        })
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn predict(&self, upload: Upload) -> Result<PredictResponse, BackendError> {
        let url = format!("{}/predict", self.base_url);
        debug!("Uploading {} ({} bytes) to {}", upload.file_name, upload.bytes.len(), url);

        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.mime_type)
            .map_err(|e| BackendError::Transport(format!("Invalid upload content type: {}", e)))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| BackendError::Transport(format!("Failed to send request to {}: {}", url, e)))?;

        let response_text = response
            .text()
            .await
            .map_err(|e| BackendError::Transport(format!("Failed to read response body: {}", e)))?;

        Self::parse_body("predict", &response_text)
    }

    async fn contact(&self, request: ContactRequest) -> Result<ContactResponse, BackendError> {
        let url = format!("{}/contact", self.base_url);
        debug!("Sending contact message from {} to {}", request.email, url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BackendError::Transport(format!("Failed to send request to {}: {}", url, e)))?;

        let response_text = response
            .text()
            .await
            .map_err(|e| BackendError::Transport(format!("Failed to read response body: {}", e)))?;

        Self::parse_body("contact", &response_text)
    }
}
