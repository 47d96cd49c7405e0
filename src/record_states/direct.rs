// Commit path for transitions on records that are not loaded in the form

use tracing::{info, warn};

use crate::errors::{RecordStateError, Result};
use crate::record_states::sink::ValidationErrorSink;
use crate::record_states::traits::{MessageSurface, RecordStore};
use crate::record_states::types::{MessageType, Record, RecordState, ValidationError};

/// Result of a direct commit
#[derive(Debug, Clone)]
pub struct DirectCommit {
    /// Entity as returned by the store's save
    pub saved: Record,
    /// Field errors followed by global errors
    pub errors: Vec<ValidationError>,
}

/// Applies a state change to a detached record copy and persists it
pub struct DirectCommitter<'a, S: RecordStore, M: MessageSurface> {
    store: &'a S,
    sink: ValidationErrorSink<'a, M>,
}

impl<'a, S: RecordStore, M: MessageSurface> DirectCommitter<'a, S, M> {
    pub fn new(store: &'a S, surface: &'a M, severity: MessageType) -> Self {
        Self {
            store,
            sink: ValidationErrorSink::new(surface, severity),
        }
    }

    pub fn commit_direct(&self, mut record: Record, new_state: RecordState) -> Result<DirectCommit> {
        let record_id = record.id;
        record.state = new_state;

        let outcome = self.store.save(record).map_err(RecordStateError::store)?;
        let saved = outcome.record.clone();
        let errors = outcome.into_errors();
        self.sink.forward(&errors);

        if errors.is_empty() {
            info!(record_id, state = %saved.state, "Record state saved directly");
        } else {
            warn!(
                record_id,
                requested = %new_state,
                persisted = %saved.state,
                errors = errors.len(),
                "Direct save returned validation errors"
            );
        }

        Ok(DirectCommit { saved, errors })
    }
}
