/*!
 * View state for the diagnosis page, reworked as explicit values.
 *
 * Every visible field is owned state passed to render functions rather
 * than read from enclosing scope:
 * - `panel`: the result panel (label, badge, description/remedy, links)
 * - `contact`: the contact form and its submit-control lifecycle
 * - `render`: functions writing a state value to any `io::Write` handle
 */

pub mod contact;
pub mod panel;
pub mod render;

pub use contact::{ContactForm, Notification};
pub use panel::{Badge, BadgeStyle, DiagnosisStatus, ResultPanel, SolutionRecord, prettify_label};

use crate::backend::PredictResponse;
use crate::language::Language;

/// The whole page state owned by the controller
///
/// Holding the language selector, the current solution record, and both
/// visible surfaces behind one value means a render can never observe a
/// half-applied update or text in two languages at once.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Current display language
    pub language: Language,
    /// The most recent solution record, replaced wholesale on each diagnosis
    pub solution: Option<SolutionRecord>,
    /// Result panel state
    pub panel: ResultPanel,
    /// Contact form state
    pub contact: ContactForm,
}

impl ViewState {
    /// Create view state with the given initial language
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Switch to the other language and re-render the stored record
    ///
    /// No network call is made; with no record stored the panel text is
    /// left untouched.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.render_solution();
        self.language
    }

    /// Reset the panel to the loading state for a new upload
    pub fn begin_diagnosis(&mut self, file_name: &str) {
        self.panel.begin_diagnosis(file_name);
    }

    /// Apply a successful diagnosis response to the panel
    pub fn apply_success(&mut self, response: &PredictResponse) {
        self.panel.image_path = Some(response.image_path.clone());
        self.panel.status = DiagnosisStatus::Diagnosed(prettify_label(&response.result));
        self.panel.badge = Badge {
            text: response.source.clone(),
            style: BadgeStyle::classify(&response.source),
        };
        self.panel.search_url = response.search_url.clone();

        // A response without an info bundle keeps the fetching placeholders.
        if let Some(info) = &response.info {
            self.solution = Some(SolutionRecord::from(info.clone()));
            self.render_solution();
        }
    }

    /// Apply an application-level rejection; nothing else in the panel moves
    pub fn apply_rejection(&mut self, message: &str) {
        self.panel.apply_error(message);
    }

    /// Apply a transport-level failure
    ///
    /// Badge, image, and link keep their loading-state values; only the
    /// label and the hint change.
    pub fn apply_connection_failure(&mut self) {
        self.panel.apply_connection_failure();
    }

    /// Copy the stored record's fields for the current language into the panel
    fn render_solution(&mut self) {
        if let Some(record) = &self.solution {
            self.panel.description = record.description(self.language).to_string();
            self.panel.remedy = record.remedy(self.language).to_string();
        }
    }
}
