// Orchestration of record state transitions

use tracing::{debug, info};

use crate::config::{RecordStatesConfig, TransitionConfig};
use crate::errors::{RecordStateError, Result};
use crate::record_states::direct::DirectCommitter;
use crate::record_states::form::FormBoundCommitter;
use crate::record_states::resolver::TransitionRequest;
use crate::record_states::traits::{MessageSurface, RecordStore, ViewContext};
use crate::record_states::types::*;
use crate::telemetry::{create_transition_span, generate_correlation_id};

/// Entry point for state changes requested from the production record view
pub struct RecordStateController<S: RecordStore, M: MessageSurface> {
    store: S,
    messages: M,
    config: TransitionConfig,
    severity: MessageType,
}

impl<S: RecordStore, M: MessageSurface> RecordStateController<S, M> {
    /// Create a controller with default settings
    pub fn new(store: S, messages: M) -> Self {
        Self {
            store,
            messages,
            config: TransitionConfig::default(),
            severity: MessageType::Info,
        }
    }

    pub fn from_config(store: S, messages: M, config: &RecordStatesConfig) -> Self {
        Self {
            store,
            messages,
            config: config.transitions.clone(),
            severity: config.messages.validation_severity,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn messages(&self) -> &M {
        &self.messages
    }

    /// Handle a raw state change event from the view.
    ///
    /// The first argument names the target state. An empty form is a no-op
    /// even when the arguments are unusable.
    pub fn change_state_from_args<V: ViewContext>(
        &self,
        view: &mut V,
        context: InvocationContext,
        args: Option<&[String]>,
    ) -> Result<TransitionOutcome> {
        let request = TransitionRequest::from_args(args, &self.config);
        if view.form_record().is_none() {
            debug!(target_state = %request.target, "No record bound to form, ignoring state change");
            return Ok(TransitionOutcome::NoRecord);
        }
        let target = request.target_state()?;
        self.transition(view, context, target)
    }

    /// Move the form's record to `target`.
    ///
    /// Does nothing when no record is bound or the record is already in
    /// `target`. Otherwise commits through the form or directly to the store
    /// depending on `context`.
    pub fn transition<V: ViewContext>(
        &self,
        view: &mut V,
        context: InvocationContext,
        target: RecordState,
    ) -> Result<TransitionOutcome> {
        let Some(record) = view.form_record() else {
            debug!(target_state = %target, "No record bound to form, ignoring transition");
            return Ok(TransitionOutcome::NoRecord);
        };

        if record.state == target {
            debug!(record_id = record.id, state = %target, "Record already in target state");
            return Ok(TransitionOutcome::Unchanged { state: target });
        }

        let correlation_id = generate_correlation_id();
        let span = create_transition_span(record.id, target, context, &correlation_id);
        let _entered = span.enter();
        info!(
            record_id = record.id,
            from = %record.state,
            to = %target,
            "Changing record state"
        );

        match context {
            InvocationContext::FormBound => {
                let persisted =
                    FormBoundCommitter::new(&self.store).commit_via_form(view, record.id, target)?;
                Ok(TransitionOutcome::FormBound {
                    requested: target,
                    persisted,
                })
            }
            InvocationContext::Detached => {
                let detached = self
                    .store
                    .get(record.id)
                    .map_err(RecordStateError::store)?;
                if detached.state == target {
                    debug!(
                        record_id = record.id,
                        state = %target,
                        "Stored record already in target state"
                    );
                    view.set_form_record(detached);
                    return Ok(TransitionOutcome::Unchanged { state: target });
                }

                let commit = DirectCommitter::new(&self.store, &self.messages, self.severity)
                    .commit_direct(detached, target)?;
                let persisted = commit.saved.state;
                // the status field stays as is; only the bound entity follows the store
                view.set_form_record(commit.saved);
                Ok(TransitionOutcome::Detached {
                    requested: target,
                    persisted,
                    errors: commit.errors,
                })
            }
        }
    }

    /// Accept the record shown in the form and save the form
    pub fn accept_record<V: ViewContext>(&self, view: &mut V) -> Result<TransitionOutcome> {
        self.apply_shortcut(view, RecordState::Accepted)
    }

    /// Decline the record shown in the form and save the form
    pub fn decline_record<V: ViewContext>(&self, view: &mut V) -> Result<TransitionOutcome> {
        self.apply_shortcut(view, RecordState::Declined)
    }

    /// Write `target` into the form entity and status field, then run the
    /// form's save exactly once, also when the record is already in `target`.
    fn apply_shortcut<V: ViewContext>(
        &self,
        view: &mut V,
        target: RecordState,
    ) -> Result<TransitionOutcome> {
        let Some(record) = view.form_record() else {
            debug!(target_state = %target, "No record bound to form, ignoring shortcut");
            return Ok(TransitionOutcome::NoRecord);
        };
        let record_id = record.id;
        let unchanged = record.state == target;
        view.set_form_record(record.with_state(target));

        let persisted =
            FormBoundCommitter::new(&self.store).commit_via_form(view, record_id, target)?;
        if unchanged {
            return Ok(TransitionOutcome::Unchanged { state: persisted });
        }
        Ok(TransitionOutcome::FormBound {
            requested: target,
            persisted,
        })
    }
}
