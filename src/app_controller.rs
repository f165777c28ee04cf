use anyhow::{Result, Context};
use log::{warn, info, debug};
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::app_config::Config;
use crate::backend::http::HttpBackend;
use crate::backend::{Backend, ContactRequest};
use crate::file_utils::FileManager;
use crate::language::Language;
use crate::ui::ViewState;

// @module: Application controller for the diagnosis page

/// Outcome of one diagnosis request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosisOutcome {
    /// A diagnosis was rendered
    Diagnosed,
    /// The backend answered with an application-level error field
    Rejected(String),
    /// The backend was unreachable or answered garbage
    ConnectionFailed,
    /// A newer request was issued while this one was in flight;
    /// its response was discarded
    Superseded,
}

impl DiagnosisOutcome {
    /// Whether the panel ended in a usable diagnosis
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Diagnosed)
    }
}

/// Outcome of one contact submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    /// The backend accepted the message
    Sent,
    /// The backend refused the message
    Failed(Option<String>),
    /// The backend was unreachable or answered garbage
    ConnectionFailed,
    /// A submission was already in flight; nothing was sent
    AlreadySending,
}

impl ContactOutcome {
    /// Whether the message was accepted
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Main application controller for the diagnosis page
///
/// Owns the whole view state behind one lock and fences inference
/// responses with a request sequence number: selecting a new file while a
/// request is in flight supersedes the old one, whose response is then
/// discarded instead of racing for the panel.
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Client for the inference service
    backend: Arc<dyn Backend>,
    // @field: Page state (language, solution record, panel, contact form)
    state: Mutex<ViewState>,
    // @field: Sequence number of the most recently issued diagnosis
    request_seq: AtomicU64,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let backend = Arc::new(HttpBackend::new(
            &config.backend.endpoint,
            config.backend.timeout_secs,
        ));
        Self::with_backend(config, backend)
    }

    /// Create a controller over an explicit backend (tests use the mock)
    pub fn with_backend(config: Config, backend: Arc<dyn Backend>) -> Result<Self> {
        let language = config.display_language()?;

        Ok(Self {
            config,
            backend,
            state: Mutex::new(ViewState::new(language)),
            request_seq: AtomicU64::new(0),
        })
    }

    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test(backend: Arc<dyn Backend>) -> Result<Self> {
        Self::with_backend(Config::default(), backend)
    }

    /// The configuration this controller runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Snapshot of the current view state, for rendering
    pub fn view(&self) -> ViewState {
        self.state.lock().clone()
    }

    /// Current display language
    pub fn language(&self) -> Language {
        self.state.lock().language
    }

    /// Switch the display language and re-render the stored record
    pub fn toggle_language(&self) -> Language {
        let mut state = self.state.lock();
        let language = state.toggle_language();
        debug!("Display language switched to {}", language.name());
        language
    }

    /// Upload a file and apply the diagnosis to the panel
    ///
    /// The panel is reset to the loading state before the request leaves;
    /// issuing a second diagnosis while this one is in flight supersedes
    /// it, and the stale response is discarded at application time.
    pub async fn diagnose(&self, input_file: &Path) -> Result<DiagnosisOutcome> {
        let upload = FileManager::load_upload(input_file)
            .with_context(|| format!("Failed to stage upload: {:?}", input_file))?;

        // Issue the sequence number and reset the panel under one lock, so
        // a concurrent diagnosis cannot interleave between the two.
        let seq = {
            let mut state = self.state.lock();
            let seq = self.request_seq.fetch_add(1, Ordering::SeqCst) + 1;
            state.begin_diagnosis(&upload.file_name);
            seq
        };

        info!("Uploading {} for diagnosis", upload.file_name);

        match self.backend.predict(upload).await {
            Ok(response) => {
                let mut state = self.state.lock();
                if self.is_superseded(seq) {
                    debug!("Discarding superseded diagnosis response (request #{})", seq);
                    return Ok(DiagnosisOutcome::Superseded);
                }

                if let Some(message) = &response.error {
                    warn!("Backend rejected the upload: {}", message);
                    state.apply_rejection(message);
                    Ok(DiagnosisOutcome::Rejected(message.clone()))
                } else {
                    info!("Diagnosis received from {}", response.source);
                    state.apply_success(&response);
                    Ok(DiagnosisOutcome::Diagnosed)
                }
            }
            Err(e) => {
                let mut state = self.state.lock();
                if self.is_superseded(seq) {
                    debug!("Discarding superseded failure (request #{}): {}", seq, e);
                    return Ok(DiagnosisOutcome::Superseded);
                }

                warn!("Diagnosis request failed: {}", e);
                state.apply_connection_failure();
                Ok(DiagnosisOutcome::ConnectionFailed)
            }
        }
    }

    /// Submit a contact message
    ///
    /// While one submission is in flight further attempts are refused
    /// locally, mirroring the disabled submit control.
    pub async fn submit_contact(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<ContactOutcome> {
        {
            let mut state = self.state.lock();
            if !state.contact.begin_submit(name, email, message) {
                warn!("Contact submission already in flight, refusing");
                return Ok(ContactOutcome::AlreadySending);
            }
        }

        let request = ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        };

        info!("Sending contact message from {}", request.email);

        match self.backend.contact(request).await {
            Ok(response) => {
                let mut state = self.state.lock();
                state.contact.finish_submit();

                if response.is_success() {
                    state.contact.apply_success(response.message);
                    Ok(ContactOutcome::Sent)
                } else {
                    warn!(
                        "Contact message refused: {}",
                        response.message.as_deref().unwrap_or("no detail")
                    );
                    state
                        .contact
                        .apply_failure(response.message.clone().unwrap_or_else(|| {
                            "The message could not be delivered.".to_string()
                        }));
                    Ok(ContactOutcome::Failed(response.message))
                }
            }
            Err(e) => {
                warn!("Contact request failed: {}", e);
                let mut state = self.state.lock();
                state.contact.finish_submit();
                state
                    .contact
                    .apply_failure("Server error. Check that the backend server is running.");
                Ok(ContactOutcome::ConnectionFailed)
            }
        }
    }

    /// Whether a newer diagnosis has been issued since `seq`
    fn is_superseded(&self, seq: u64) -> bool {
        self.request_seq.load(Ordering::SeqCst) != seq
    }
}
