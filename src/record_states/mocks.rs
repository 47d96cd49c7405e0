// Mock implementations for testing - no side effects outside memory

use anyhow::{anyhow, Result};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::record_states::traits::*;
use crate::record_states::types::*;

/// Store operations recorded by the in-memory store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    Get { id: RecordId },
    Save { id: RecordId, state: RecordState },
}

/// In-memory record store that can be told to reject particular states
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    pub records: RefCell<HashMap<RecordId, Record>>,
    pub rejections: RefCell<HashMap<RecordState, Vec<ValidationError>>>,
    pub executed_commands: RefCell<Vec<StoreCommand>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: Record) {
        self.records.borrow_mut().insert(record.id, record);
    }

    /// Reject any save that moves a record into `state` with a global error
    pub fn reject_state(&self, state: RecordState, message: &str) {
        self.rejections
            .borrow_mut()
            .entry(state)
            .or_default()
            .push(ValidationError::global(message));
    }

    /// Reject any save that moves a record into `state` with a field error
    pub fn reject_state_on_field(&self, state: RecordState, field: &str, message: &str) {
        self.rejections
            .borrow_mut()
            .entry(state)
            .or_default()
            .push(ValidationError::field(field, message));
    }

    pub fn stored_state(&self, id: RecordId) -> Option<RecordState> {
        self.records.borrow().get(&id).map(|record| record.state)
    }

    pub fn save_count(&self) -> usize {
        self.executed_commands
            .borrow()
            .iter()
            .filter(|command| matches!(command, StoreCommand::Save { .. }))
            .count()
    }

    pub fn get_executed_commands(&self) -> Vec<StoreCommand> {
        self.executed_commands.borrow().clone()
    }

    pub fn clear_executed_commands(&self) {
        self.executed_commands.borrow_mut().clear();
    }
}

impl RecordStore for InMemoryRecordStore {
    fn get(&self, id: RecordId) -> Result<Record> {
        self.executed_commands
            .borrow_mut()
            .push(StoreCommand::Get { id });
        self.records
            .borrow()
            .get(&id)
            .cloned()
            .ok_or_else(|| anyhow!("record {} not found", id))
    }

    fn save(&self, record: Record) -> Result<SaveOutcome> {
        self.executed_commands.borrow_mut().push(StoreCommand::Save {
            id: record.id,
            state: record.state,
        });

        let errors = self
            .rejections
            .borrow()
            .get(&record.state)
            .cloned()
            .unwrap_or_default();

        if errors.is_empty() {
            self.records.borrow_mut().insert(record.id, record.clone());
            return Ok(SaveOutcome::clean(record));
        }

        // rejected saves leave the stored entity untouched
        let persisted = self
            .records
            .borrow()
            .get(&record.id)
            .cloned()
            .unwrap_or(record);
        let mut outcome = SaveOutcome::clean(persisted);
        for error in errors {
            match &error.scope {
                ErrorScope::Field(field) => {
                    outcome.field_errors.insert(field.clone(), error);
                }
                ErrorScope::Global => outcome.global_errors.push(error),
            }
        }
        Ok(outcome)
    }
}

/// Message surface that keeps every message it was given
#[derive(Debug, Default)]
pub struct RecordingMessageSurface {
    pub messages: RefCell<Vec<(String, MessageType)>>,
}

impl RecordingMessageSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(String, MessageType)> {
        self.messages.borrow().clone()
    }
}

impl MessageSurface for RecordingMessageSurface {
    fn add_message(&self, message: &str, message_type: MessageType) {
        self.messages
            .borrow_mut()
            .push((message.to_string(), message_type));
    }
}

/// View with a form, a status field, the gated fields and the product grids.
///
/// When bound to a store, the `Save` event behaves like the form's own save
/// pipeline: it writes the status field into the form entity and saves it.
#[derive(Debug, Default)]
pub struct MockView<'a> {
    pub record: Option<Record>,
    pub status: Option<RecordState>,
    pub status_history: Vec<RecordState>,
    pub disabled_fields: HashSet<GatedField>,
    pub locked_grids: HashSet<GatedGrid>,
    pub update_requests: Vec<Component>,
    pub events: Vec<ViewEvent>,
    pub event_failure: Option<String>,
    store: Option<&'a InMemoryRecordStore>,
}

impl<'a> MockView<'a> {
    /// View with an empty form
    pub fn empty() -> Self {
        Self::default()
    }

    /// View showing `record` with no save pipeline behind it
    pub fn with_record(record: Record) -> Self {
        Self {
            status: Some(record.state),
            record: Some(record),
            ..Self::default()
        }
    }

    /// View showing the stored record `id`, saving through `store`
    pub fn bound_to(store: &'a InMemoryRecordStore, id: RecordId) -> Self {
        let record = store.records.borrow().get(&id).cloned();
        Self {
            status: record.as_ref().map(|r| r.state),
            record,
            store: Some(store),
            ..Self::default()
        }
    }

    pub fn fail_events(&mut self, message: &str) {
        self.event_failure = Some(message.to_string());
    }

    pub fn set_form_state(&mut self, state: RecordState) {
        if let Some(record) = self.record.as_mut() {
            record.state = state;
        }
    }

    pub fn status_field_history(&self) -> Vec<RecordState> {
        self.status_history.clone()
    }

    pub fn save_events(&self) -> usize {
        self.events
            .iter()
            .filter(|event| **event == ViewEvent::Save)
            .count()
    }

    fn run_save_pipeline(&mut self) -> Result<()> {
        let (Some(store), Some(record)) = (self.store, self.record.as_ref()) else {
            return Ok(());
        };
        let mut entity = record.clone();
        if let Some(status) = self.status {
            entity.state = status;
        }
        let outcome = store.save(entity)?;
        if outcome.is_valid() {
            self.record = Some(outcome.record);
        }
        Ok(())
    }
}

impl ViewContext for MockView<'_> {
    fn form_record(&self) -> Option<Record> {
        self.record.clone()
    }

    fn set_form_record(&mut self, record: Record) {
        self.record = Some(record);
    }

    fn status_field(&self) -> Option<RecordState> {
        self.status
    }

    fn set_status_field(&mut self, state: RecordState) {
        self.status = Some(state);
        self.status_history.push(state);
    }

    fn set_field_enabled(&mut self, field: GatedField, enabled: bool) {
        if enabled {
            self.disabled_fields.remove(&field);
        } else {
            self.disabled_fields.insert(field);
        }
    }

    fn is_field_enabled(&self, field: GatedField) -> bool {
        !self.disabled_fields.contains(&field)
    }

    fn set_grid_editable(&mut self, grid: GatedGrid, editable: bool) {
        if editable {
            self.locked_grids.remove(&grid);
        } else {
            self.locked_grids.insert(grid);
        }
    }

    fn is_grid_editable(&self, grid: GatedGrid) -> bool {
        !self.locked_grids.contains(&grid)
    }

    fn request_update(&mut self, component: Component) {
        self.update_requests.push(component);
    }

    fn perform_event(&mut self, event: ViewEvent, _args: &[String]) -> Result<()> {
        if let Some(message) = &self.event_failure {
            return Err(anyhow!("{} event failed: {}", event.name(), message));
        }
        self.events.push(event);
        match event {
            ViewEvent::Save => self.run_save_pipeline(),
        }
    }
}
