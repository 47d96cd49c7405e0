// Traits for dependency injection - the view, store and message surface
// are owned by the surrounding application

use anyhow::Result;

use crate::record_states::types::*;

/// Backing store for production records
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait RecordStore {
    /// Fetch the persisted record
    fn get(&self, id: RecordId) -> Result<Record>;

    /// Persist the record, returning the saved entity and any validation errors
    fn save(&self, record: Record) -> Result<SaveOutcome>;
}

/// Surface that displays messages to the user
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait MessageSurface {
    fn add_message(&self, message: &str, message_type: MessageType);
}

/// Typed handle onto the view a transition runs against
pub trait ViewContext {
    /// Record bound to the form, if any
    fn form_record(&self) -> Option<Record>;

    /// Replace the entity bound to the form
    fn set_form_record(&mut self, record: Record);

    /// Current value of the visible status field
    fn status_field(&self) -> Option<RecordState>;

    fn set_status_field(&mut self, state: RecordState);

    fn set_field_enabled(&mut self, field: GatedField, enabled: bool);

    fn is_field_enabled(&self, field: GatedField) -> bool;

    fn set_grid_editable(&mut self, grid: GatedGrid, editable: bool);

    fn is_grid_editable(&self, grid: GatedGrid) -> bool;

    /// Ask a component to re-render its state
    fn request_update(&mut self, component: Component);

    /// Dispatch an event to the form (e.g. its own save pipeline)
    fn perform_event(&mut self, event: ViewEvent, args: &[String]) -> Result<()>;
}

impl<T: RecordStore + ?Sized> RecordStore for &T {
    fn get(&self, id: RecordId) -> Result<Record> {
        (**self).get(id)
    }

    fn save(&self, record: Record) -> Result<SaveOutcome> {
        (**self).save(record)
    }
}

impl<T: MessageSurface + ?Sized> MessageSurface for &T {
    fn add_message(&self, message: &str, message_type: MessageType) {
        (**self).add_message(message, message_type)
    }
}
