// @module: Contact form state

/// Notification shown after a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Failure(String),
}

/// The contact form: three text fields plus the submit-control lifecycle
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Current label of the submit control
    pub submit_label: String,
    /// Whether a submission is in flight (the control is disabled)
    pub sending: bool,
    /// Result of the last submission attempt
    pub notification: Option<Notification>,
    /// Label to restore once a submission finishes
    idle_label: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        let idle_label = "Send Message".to_string();
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            submit_label: idle_label.clone(),
            sending: false,
            notification: None,
            idle_label,
        }
    }
}

impl ContactForm {
    /// Stage a submission: fill the fields, disable and relabel the control
    ///
    /// Returns false without touching anything if a submission is already
    /// in flight.
    pub fn begin_submit(&mut self, name: &str, email: &str, message: &str) -> bool {
        if self.sending {
            return false;
        }

        self.name = name.to_string();
        self.email = email.to_string();
        self.message = message.to_string();
        self.sending = true;
        self.submit_label = "Sending...".to_string();
        self.notification = None;
        true
    }

    /// Re-enable the control and restore its original label
    pub fn finish_submit(&mut self) {
        self.sending = false;
        self.submit_label = self.idle_label.clone();
    }

    /// Accepted: clear the fields and show the success notification
    pub fn apply_success(&mut self, message: Option<String>) {
        self.clear_fields();
        self.notification = Some(Notification::Success(
            message.unwrap_or_else(|| "Message sent successfully!".to_string()),
        ));
    }

    /// Refused or unreachable: keep the fields, show the failure
    pub fn apply_failure(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::Failure(message.into()));
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}
