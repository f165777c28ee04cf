use crate::backend::SolutionInfo;
use crate::language::Language;

// @module: Result panel state

/// Replace class-name underscores with spaces for display
pub fn prettify_label(result: &str) -> String {
    result.replace('_', " ")
}

/// Visual style of the provenance badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeStyle {
    /// Gray, shown while connecting
    #[default]
    Neutral,
    /// Blue, remote/AI-assisted source
    Online,
    /// Orange, local/offline source
    Offline,
}

impl BadgeStyle {
    /// Classify a provenance label into a badge style
    ///
    /// "AI" and "Llama" mark the remote-assisted sources; everything else
    /// is treated as the local database.
    pub fn classify(source: &str) -> Self {
        if source.contains("AI") || source.contains("Llama") {
            Self::Online
        } else {
            Self::Offline
        }
    }
}

/// The provenance badge: label text plus its visual style
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Badge {
    pub text: String,
    pub style: BadgeStyle,
}

/// Diagnosis label state of the result panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DiagnosisStatus {
    /// No diagnosis has been requested yet
    #[default]
    Idle,
    /// An upload is in flight
    Analyzing,
    /// The prettified class name returned by the backend
    Diagnosed(String),
    /// The backend rejected the upload (application-level error)
    Error,
    /// The backend was unreachable or answered garbage
    ConnectionFailed,
}

impl std::fmt::Display for DiagnosisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, ""),
            Self::Analyzing => write!(f, "Analyzing..."),
            Self::Diagnosed(label) => write!(f, "{}", label),
            Self::Error => write!(f, "Error Occurred"),
            Self::ConnectionFailed => write!(f, "Server Connection Failed"),
        }
    }
}

/// Localized description/remedy bundle kept for the current diagnosis
///
/// Replaced wholesale on each successful upload, never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolutionRecord {
    pub description_en: String,
    pub description_hi: String,
    pub solution_en: String,
    pub solution_hi: String,
}

impl SolutionRecord {
    /// Description text for the given language
    pub fn description(&self, language: Language) -> &str {
        match language {
            Language::En => &self.description_en,
            Language::Hi => &self.description_hi,
        }
    }

    /// Remedy text for the given language
    pub fn remedy(&self, language: Language) -> &str {
        match language {
            Language::En => &self.solution_en,
            Language::Hi => &self.solution_hi,
        }
    }
}

impl From<SolutionInfo> for SolutionRecord {
    fn from(info: SolutionInfo) -> Self {
        Self {
            description_en: info.description_en,
            description_hi: info.description_hi,
            solution_en: info.solution_en,
            solution_hi: info.solution_hi,
        }
    }
}

/// The result panel: every visible field of the diagnosis area
#[derive(Debug, Clone, Default)]
pub struct ResultPanel {
    /// Whether the panel has been revealed
    pub visible: bool,
    /// Name of the selected file
    pub file_name: Option<String>,
    /// Server-side path of the uploaded image
    pub image_path: Option<String>,
    /// Diagnosis label
    pub status: DiagnosisStatus,
    /// Provenance badge
    pub badge: Badge,
    /// Description text (localized, or a fetching placeholder)
    pub description: String,
    /// Remedy text (localized, or a fetching placeholder)
    pub remedy: String,
    /// External search link, hidden unless the backend provides one
    pub search_url: Option<String>,
    /// Failure hint shown under the label on connection failure
    pub hint: Option<String>,
    /// Inline error message from an application-level rejection
    pub notice: Option<String>,
}

impl ResultPanel {
    /// Reset to the loading state for a new upload and reveal the panel
    ///
    /// The previous image stays in place until a new diagnosis replaces it.
    pub fn begin_diagnosis(&mut self, file_name: &str) {
        self.visible = true;
        self.file_name = Some(file_name.to_string());
        self.status = DiagnosisStatus::Analyzing;
        self.badge = Badge {
            text: "Connecting...".to_string(),
            style: BadgeStyle::Neutral,
        };
        self.description = "Fetching details...".to_string();
        self.remedy = "Fetching remedy...".to_string();
        self.search_url = None;
        self.hint = None;
        self.notice = None;
    }

    /// Application-level rejection: surface the message, flip the label,
    /// touch nothing else
    pub fn apply_error(&mut self, message: &str) {
        self.notice = Some(format!("Error: {}", message));
        self.status = DiagnosisStatus::Error;
    }

    /// Transport-level failure: flip the label and show the hint
    pub fn apply_connection_failure(&mut self) {
        self.status = DiagnosisStatus::ConnectionFailed;
        self.hint = Some("Check that the backend server is running.".to_string());
    }
}
