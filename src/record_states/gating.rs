// Read-only gating of record fields once a record leaves draft

use tracing::debug;

use crate::record_states::traits::ViewContext;
use crate::record_states::types::{Component, GatedField, GatedGrid, GatingOutcome};

/// Locks the record's fields and product grids when it is not a draft.
///
/// The policy only ever disables. Re-enabling components for a record that
/// returns to draft is left to whoever rebuilds the view.
#[derive(Debug, Clone)]
pub struct DraftGatingPolicy {
    fields: Vec<GatedField>,
    grids: Vec<GatedGrid>,
}

impl Default for DraftGatingPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftGatingPolicy {
    pub fn new() -> Self {
        Self {
            fields: GatedField::ALL.to_vec(),
            grids: GatedGrid::ALL.to_vec(),
        }
    }

    pub fn fields(&self) -> &[GatedField] {
        &self.fields
    }

    pub fn grids(&self) -> &[GatedGrid] {
        &self.grids
    }

    pub fn apply_gating<V: ViewContext>(&self, view: &mut V) -> GatingOutcome {
        let Some(record) = view.form_record() else {
            return GatingOutcome::NoRecord;
        };

        if record.state.is_draft() {
            return GatingOutcome::Editable;
        }

        for field in &self.fields {
            view.set_field_enabled(*field, false);
            view.request_update(Component::Field(*field));
        }
        for grid in &self.grids {
            view.set_grid_editable(*grid, false);
            view.request_update(Component::Grid(*grid));
        }

        debug!(record_id = record.id, state = %record.state, "Locked non-draft record");
        GatingOutcome::Locked {
            fields: self.fields.clone(),
            grids: self.grids.clone(),
        }
    }
}
