// Production Record States Library
// State transitions for production records shown in a form/grid view

pub mod config;
pub mod errors;
pub mod record_states;
pub mod telemetry;

// Re-export key types for easy access
pub use config::{MessageConfig, ObservabilityConfig, RecordStatesConfig, TransitionConfig};
pub use errors::{RecordStateError, Result};
pub use record_states::{
    resolve_target_state, DirectCommitter, DraftGatingPolicy, FormBoundCommitter,
    InvocationContext, MessageSurface, MessageType, Record, RecordId, RecordState,
    RecordStateController, RecordStore, SaveOutcome, TransitionOutcome, TransitionRequest,
    ValidationError, ValidationErrorSink, ViewContext,
};
pub use telemetry::{create_transition_span, generate_correlation_id, init_telemetry};
