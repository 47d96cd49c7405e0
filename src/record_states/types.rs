// Core types for production record state transitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::RecordStateError;

/// Identifier of a persisted production record
pub type RecordId = u64;

/// Workflow states of a production record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordState {
    /// Initial, freely editable state
    #[serde(rename = "01draft")]
    Draft,
    /// Record has been accepted
    #[serde(rename = "02accepted")]
    Accepted,
    /// Record has been declined
    #[serde(rename = "03declined")]
    Declined,
}

impl RecordState {
    pub const ALL: [RecordState; 3] = [
        RecordState::Draft,
        RecordState::Accepted,
        RecordState::Declined,
    ];

    /// Persisted string value of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordState::Draft => "01draft",
            RecordState::Accepted => "02accepted",
            RecordState::Declined => "03declined",
        }
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, RecordState::Draft)
    }
}

impl fmt::Display for RecordState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordState {
    type Err = RecordStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordState::ALL
            .iter()
            .copied()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| RecordStateError::UnknownState(s.to_string()))
    }
}

/// A production record as held by the store or bound to the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub number: Option<String>,
    pub state: RecordState,
}

impl Record {
    pub fn new(id: RecordId, state: RecordState) -> Self {
        Self {
            id,
            number: None,
            state,
        }
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn with_state(mut self, state: RecordState) -> Self {
        self.state = state;
        self
    }
}

/// Where a validation message applies
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorScope {
    Field(String),
    Global,
}

/// A validation message produced by the store on save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub scope: ErrorScope,
    pub message: String,
}

impl ValidationError {
    pub fn field(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            scope: ErrorScope::Field(name.into()),
            message: message.into(),
        }
    }

    pub fn global(message: impl Into<String>) -> Self {
        Self {
            scope: ErrorScope::Global,
            message: message.into(),
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self.scope, ErrorScope::Global)
    }
}

/// Result of a store save: the saved entity plus any validation errors
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    pub record: Record,
    pub field_errors: BTreeMap<String, ValidationError>,
    pub global_errors: Vec<ValidationError>,
}

impl SaveOutcome {
    /// A save that produced no validation errors
    pub fn clean(record: Record) -> Self {
        Self {
            record,
            field_errors: BTreeMap::new(),
            global_errors: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty() && self.global_errors.is_empty()
    }

    /// Field errors (ascending field name) followed by global errors (store order)
    pub fn into_errors(self) -> Vec<ValidationError> {
        let mut errors: Vec<ValidationError> = self.field_errors.into_values().collect();
        errors.extend(self.global_errors);
        errors
    }
}

/// Which UI element triggered a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationContext {
    /// The form displaying the record triggered the transition
    FormBound,
    /// A grid or list row action triggered the transition
    Detached,
}

/// Severity of a message shown on the message surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Info,
    Success,
    Failure,
}

/// Events that can be dispatched to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    Save,
}

impl ViewEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ViewEvent::Save => "save",
        }
    }
}

/// Fields locked once a record leaves draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GatedField {
    LastRecord,
    Number,
    Order,
    OrderOperationComponent,
    Shift,
    MachineTime,
    LaborTime,
}

impl GatedField {
    pub const ALL: [GatedField; 7] = [
        GatedField::LastRecord,
        GatedField::Number,
        GatedField::Order,
        GatedField::OrderOperationComponent,
        GatedField::Shift,
        GatedField::MachineTime,
        GatedField::LaborTime,
    ];

    /// Component reference name in the view definition
    pub fn reference(&self) -> &'static str {
        match self {
            GatedField::LastRecord => "lastRecord",
            GatedField::Number => "number",
            GatedField::Order => "order",
            GatedField::OrderOperationComponent => "orderOperationComponent",
            GatedField::Shift => "shift",
            GatedField::MachineTime => "machineTime",
            GatedField::LaborTime => "laborTime",
        }
    }
}

/// Product grids locked once a record leaves draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GatedGrid {
    ProductInComponents,
    ProductOutComponents,
}

impl GatedGrid {
    pub const ALL: [GatedGrid; 2] = [GatedGrid::ProductInComponents, GatedGrid::ProductOutComponents];

    pub fn reference(&self) -> &'static str {
        match self {
            GatedGrid::ProductInComponents => "recordOperationProductInComponent",
            GatedGrid::ProductOutComponents => "recordOperationProductOutComponent",
        }
    }
}

/// Any component the controller may ask to re-render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    StatusField,
    Field(GatedField),
    Grid(GatedGrid),
}

impl Component {
    pub fn reference(&self) -> &'static str {
        match self {
            Component::StatusField => "state",
            Component::Field(field) => field.reference(),
            Component::Grid(grid) => grid.reference(),
        }
    }
}

/// What a transition request ended up doing
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    /// No record bound to the form, nothing was done
    NoRecord,
    /// Target equals the current state, nothing was done
    Unchanged { state: RecordState },
    /// Committed through the form's save pipeline
    FormBound {
        requested: RecordState,
        persisted: RecordState,
    },
    /// Committed directly to the store
    Detached {
        requested: RecordState,
        persisted: RecordState,
        errors: Vec<ValidationError>,
    },
}

impl TransitionOutcome {
    pub fn is_noop(&self) -> bool {
        matches!(
            self,
            TransitionOutcome::NoRecord | TransitionOutcome::Unchanged { .. }
        )
    }

    /// True when the store accepted the requested state
    pub fn was_applied(&self) -> bool {
        match self {
            TransitionOutcome::FormBound {
                requested,
                persisted,
            }
            | TransitionOutcome::Detached {
                requested,
                persisted,
                ..
            } => requested == persisted,
            _ => false,
        }
    }

    pub fn persisted_state(&self) -> Option<RecordState> {
        match self {
            TransitionOutcome::NoRecord => None,
            TransitionOutcome::Unchanged { state } => Some(*state),
            TransitionOutcome::FormBound { persisted, .. }
            | TransitionOutcome::Detached { persisted, .. } => Some(*persisted),
        }
    }
}

/// What the draft gating policy did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatingOutcome {
    NoRecord,
    Editable,
    Locked {
        fields: Vec<GatedField>,
        grids: Vec<GatedGrid>,
    },
}

impl GatingOutcome {
    pub fn is_locked(&self) -> bool {
        matches!(self, GatingOutcome::Locked { .. })
    }
}
