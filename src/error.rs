use thiserror::Error;

/// A precondition of a user action was not met.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select at least one vendor and write a message.")]
    NoRecipientsOrEmptyMessage,
    #[error("Please select at least one vendor and describe the message purpose.")]
    MissingSelectionOrPurpose,
}

/// Every failure the dashboard can hit. None of them are fatal: each one ends
/// up as a pending notification and the interface stays usable.
///
/// `Display` is the text shown to the administrator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Could not generate a message. Please try again.")]
    GenerationEmpty,
    #[error("An error occurred while generating the message. Please try again later.")]
    GenerationTransport(String),
    #[error("Could not open the messaging app: {0}")]
    Handoff(String),
}

impl DashboardError {
    pub fn is_validation(&self) -> bool {
        matches!(self, DashboardError::Validation(_))
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(e: reqwest::Error) -> Self {
        DashboardError::GenerationTransport(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
