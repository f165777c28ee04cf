/*!
 * # Leafscan - Plant Disease Diagnosis Client
 *
 * A Rust client for a plant-disease inference backend.
 *
 * ## Features
 *
 * - Upload a leaf image and render the returned diagnosis
 * - Provenance badge distinguishing AI-assisted and offline-database answers
 * - English/Hindi display language toggle for description and remedy text
 * - Contact form submission with submit-control lifecycle
 * - Request fencing: a new upload supersedes an in-flight one
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `backend`: Clients for the inference service:
 *   - `backend::http`: reqwest client for the two HTTP/JSON endpoints
 *   - `backend::mock`: scriptable backend for tests
 * - `ui`: Explicit view state and terminal rendering:
 *   - `ui::panel`: result panel, badge styles, solution record
 *   - `ui::contact`: contact form state
 *   - `ui::render`: render functions over any write handle
 * - `app_controller`: Main application controller
 * - `language`: Display language utilities
 * - `file_utils`: Upload staging
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]
// Add other lints you want to allow but not auto-fix

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod backend;
pub mod errors;
pub mod file_utils;
pub mod language;
pub mod ui;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{ContactOutcome, Controller, DiagnosisOutcome};
pub use backend::{Backend, ContactRequest, ContactResponse, PredictResponse, SolutionInfo, Upload};
pub use errors::{AppError, BackendError};
pub use language::Language;
pub use ui::{BadgeStyle, DiagnosisStatus, ResultPanel, SolutionRecord, ViewState};
