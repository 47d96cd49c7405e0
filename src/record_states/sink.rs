// Forwarding of store validation errors to the message surface

use tracing::warn;

use crate::record_states::traits::MessageSurface;
use crate::record_states::types::{ErrorScope, MessageType, ValidationError};

/// Collects validation errors and forwards them at a fixed severity
pub struct ValidationErrorSink<'a, M: MessageSurface> {
    surface: &'a M,
    severity: MessageType,
}

impl<'a, M: MessageSurface> ValidationErrorSink<'a, M> {
    pub fn new(surface: &'a M, severity: MessageType) -> Self {
        Self { surface, severity }
    }

    /// Forward every error in order. Returns the number forwarded.
    pub fn forward(&self, errors: &[ValidationError]) -> usize {
        for error in errors {
            match &error.scope {
                ErrorScope::Field(field) => {
                    warn!(field = %field, message = %error.message, "Validation error on save")
                }
                ErrorScope::Global => {
                    warn!(message = %error.message, "Global validation error on save")
                }
            }
            self.surface.add_message(&error.message, self.severity);
        }
        errors.len()
    }
}
