use thiserror::Error;

/// Result type alias for record state operations
pub type Result<T> = std::result::Result<T, RecordStateError>;

#[derive(Debug, Error)]
pub enum RecordStateError {
    #[error("No target state was requested")]
    MissingTargetState,
    #[error("Unknown record state: {0:?}")]
    UnknownState(String),
    #[error("Store error: {0}")]
    Store(String),
    #[error("View error: {0}")]
    View(String),
}

impl RecordStateError {
    /// Stable error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            RecordStateError::MissingTargetState => "MISSING_TARGET_STATE",
            RecordStateError::UnknownState(_) => "UNKNOWN_STATE",
            RecordStateError::Store(_) => "STORE_ERROR",
            RecordStateError::View(_) => "VIEW_ERROR",
        }
    }

    pub(crate) fn store(error: anyhow::Error) -> Self {
        RecordStateError::Store(format!("{:#}", error))
    }

    pub(crate) fn view(error: anyhow::Error) -> Self {
        RecordStateError::View(format!("{:#}", error))
    }
}
