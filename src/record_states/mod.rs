// Record State Module - production record workflow status
//
// Keeps the visible status field, the form entity and the backing store
// consistent after a state change is requested. The view, store and message
// surface are injected through the traits in `traits`.

pub mod types;
pub mod traits;
pub mod resolver;
pub mod gating;
pub mod controller;
pub mod form;
pub mod direct;
pub mod sink;

#[cfg(test)]
pub mod mocks;


pub use types::{
    Component, ErrorScope, GatedField, GatedGrid, GatingOutcome, InvocationContext, MessageType,
    Record, RecordId, RecordState, SaveOutcome, TransitionOutcome, ValidationError, ViewEvent,
};
pub use traits::{MessageSurface, RecordStore, ViewContext};
pub use resolver::{resolve_target_state, TransitionRequest, NULL_LITERAL};
pub use gating::DraftGatingPolicy;
pub use controller::RecordStateController;
pub use form::FormBoundCommitter;
pub use direct::{DirectCommit, DirectCommitter};
pub use sink::ValidationErrorSink;
