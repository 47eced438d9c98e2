//! Submission lifecycle of an editor page

/// Outcome of the latest submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// A request is in flight; the submit button is disabled
    Pending,
    Succeeded,
    /// The request failed; holds the page's fixed failure message
    Failed(String),
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Inline error shown under the form, if any
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Enter `Pending`, dropping any previous error.
    /// Returns false when a request is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = Self::Pending;
        true
    }

    /// Settle the in-flight request. Always leaves `Pending`.
    pub fn finish(&mut self, failure: Option<&str>) {
        *self = match failure {
            None => Self::Succeeded,
            Some(message) => Self::Failed(message.to_string()),
        };
    }
}
