// Commit path for transitions triggered from the form itself

use tracing::{info, warn};

use crate::errors::{RecordStateError, Result};
use crate::record_states::traits::{RecordStore, ViewContext};
use crate::record_states::types::{Component, RecordId, RecordState, ViewEvent};

/// Applies a state change through the live form binding
pub struct FormBoundCommitter<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> FormBoundCommitter<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Set the status field, run the form's save pipeline, then resync the
    /// field and the form entity from the store. Returns the persisted state.
    ///
    /// The field shown afterwards is always the persisted value, so a save
    /// rejected by validation reverts the optimistic update.
    pub fn commit_via_form<V: ViewContext>(
        &self,
        view: &mut V,
        record_id: RecordId,
        new_state: RecordState,
    ) -> Result<RecordState> {
        view.set_status_field(new_state);
        view.perform_event(ViewEvent::Save, &[])
            .map_err(RecordStateError::view)?;

        let saved = self.store.get(record_id).map_err(RecordStateError::store)?;
        let persisted = saved.state;
        view.set_status_field(persisted);
        view.set_form_record(saved);
        view.request_update(Component::StatusField);

        if persisted == new_state {
            info!(record_id, state = %persisted, "Form save persisted new state");
        } else {
            warn!(
                record_id,
                requested = %new_state,
                persisted = %persisted,
                "Form save did not persist requested state"
            );
        }
        Ok(persisted)
    }
}
