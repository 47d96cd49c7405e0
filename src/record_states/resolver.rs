// Resolution of the requested target state from raw event arguments

use crate::config::TransitionConfig;
use crate::errors::{RecordStateError, Result};
use crate::record_states::types::RecordState;

/// Literal the view framework sends when an argument has no value
pub const NULL_LITERAL: &str = "null";

/// Extract the requested target state from an event argument list.
///
/// Returns the first argument verbatim, or `""` when the list is absent or
/// empty. With `null_is_absent` the literal `"null"` also yields `""`.
pub fn resolve_target_state(args: Option<&[String]>, null_is_absent: bool) -> String {
    match args.and_then(|args| args.first()) {
        Some(first) if null_is_absent && first == NULL_LITERAL => String::new(),
        Some(first) => first.clone(),
        None => String::new(),
    }
}

/// A transition request as received from a UI event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRequest {
    pub target: String,
}

impl TransitionRequest {
    pub fn from_args(args: Option<&[String]>, config: &TransitionConfig) -> Self {
        Self {
            target: resolve_target_state(args, config.treat_null_literal_as_absent),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Parse the requested target into a known state
    pub fn target_state(&self) -> Result<RecordState> {
        if self.is_empty() {
            return Err(RecordStateError::MissingTargetState);
        }
        self.target.parse()
    }
}
