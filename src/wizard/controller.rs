//! Wizard controller: step pointer, form data, and submission state machine.
//!
//! ```text
//! Step(1) ⇄ Step(2) ⇄ … ⇄ Step(N) ──submit──▶ Submitting ──ok──▶ Submitted
//!                           ▲                     │
//!                           └──── error ──────────┘
//! ```
//!
//! Forward moves are gated by the current step's validator; backward moves
//! are not. A failed submission returns to Step(N) with the error attached
//! and the form data untouched.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::state::{Section, WizardState};
use super::steps::StepKind;
use super::validators;
use crate::error::{ApiError, SubmitError};

/// What a concrete wizard plugs into the controller.
#[async_trait]
pub trait WizardFlow: Send + Sync {
    type Step: Copy
        + Eq
        + std::fmt::Debug
        + std::fmt::Display
        + Into<StepKind>
        + Send
        + Sync
        + 'static;
    type Payload: Send + Sync;
    type Output: Clone + std::fmt::Debug + Send + Sync;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// The fixed, ordered step sequence.
    fn steps(&self) -> &'static [Self::Step];

    /// Form data the wizard starts from.
    fn initial_state(&self) -> WizardState;

    /// Serialize accumulated state into the submission body.
    fn payload(&self, state: &WizardState) -> Self::Payload;

    /// Send the payload to the backend.
    async fn deliver(&self, payload: &Self::Payload) -> Result<Self::Output, ApiError>;

    fn validate(&self, step: Self::Step, state: &WizardState) -> bool {
        validators::validate(step.into(), state)
    }
}

/// Where the controller is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardPhase<O> {
    /// On step `n`, 1-based.
    Step(usize),
    Submitting,
    Submitted(O),
}

/// Drives one wizard instance.
pub struct WizardController<F: WizardFlow> {
    flow: F,
    state: WizardState,
    phase: WizardPhase<F::Output>,
    last_error: Option<String>,
}

impl<F: WizardFlow> WizardController<F> {
    pub fn new(flow: F) -> Self {
        let state = flow.initial_state();
        Self {
            flow,
            state,
            phase: WizardPhase::Step(1),
            last_error: None,
        }
    }

    pub fn flow(&self) -> &F {
        &self.flow
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn phase(&self) -> &WizardPhase<F::Output> {
        &self.phase
    }

    pub fn step_count(&self) -> usize {
        self.flow.steps().len()
    }

    /// 1-based index of the current step. Once submitting or submitted the
    /// wizard stays on its final step.
    pub fn current_step(&self) -> usize {
        match self.phase {
            WizardPhase::Step(n) => n,
            WizardPhase::Submitting | WizardPhase::Submitted(_) => self.step_count(),
        }
    }

    pub fn current_step_kind(&self) -> F::Step {
        self.flow.steps()[self.current_step() - 1]
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step() == 1
    }

    pub fn is_final_step(&self) -> bool {
        self.current_step() == self.step_count()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, WizardPhase::Submitting)
    }

    /// The submission result, once submitted.
    pub fn output(&self) -> Option<&F::Output> {
        match &self.phase {
            WizardPhase::Submitted(output) => Some(output),
            _ => None,
        }
    }

    /// Error from the last failed submission, for display.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether the current step's validator passes.
    pub fn can_proceed(&self) -> bool {
        self.flow.validate(self.current_step_kind(), &self.state)
    }

    /// What blocks the current step.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        validators::missing_fields(self.current_step_kind().into(), &self.state)
    }

    /// Shallow-merge `fields` (a JSON object) into `section`.
    ///
    /// Ignored while a submission is in flight or after it succeeded, and
    /// for non-object values.
    pub fn update(&mut self, section: Section, fields: Value) {
        if !matches!(self.phase, WizardPhase::Step(_)) {
            debug!(wizard = self.flow.name(), %section, "Update ignored outside editing");
            return;
        }
        match fields {
            Value::Object(fields) => {
                debug!(
                    wizard = self.flow.name(),
                    %section,
                    keys = ?fields.keys().collect::<Vec<_>>(),
                    "Merging fields"
                );
                self.state.merge(section, fields);
            }
            other => {
                warn!(wizard = self.flow.name(), %section, value = %other, "Ignoring non-object update");
            }
        }
    }

    /// Move forward one step if the current step is valid.
    ///
    /// Returns whether the step changed. A blocked move is not an error.
    pub fn advance(&mut self) -> bool {
        let WizardPhase::Step(current) = self.phase else {
            return false;
        };
        if current >= self.step_count() || !self.can_proceed() {
            debug!(wizard = self.flow.name(), step = current, "Advance blocked");
            return false;
        }
        self.phase = WizardPhase::Step(current + 1);
        info!(
            wizard = self.flow.name(),
            step = current + 1,
            title = %self.current_step_kind(),
            "Advanced"
        );
        true
    }

    /// Move back one step. Always allowed except from the first step.
    pub fn retreat(&mut self) -> bool {
        let WizardPhase::Step(current) = self.phase else {
            return false;
        };
        if current <= 1 {
            return false;
        }
        self.phase = WizardPhase::Step(current - 1);
        info!(
            wizard = self.flow.name(),
            step = current - 1,
            title = %self.current_step_kind(),
            "Went back"
        );
        true
    }

    /// Enter `Submitting` and hand back the payload to send.
    ///
    /// Refused while another submission is in flight, after success, away
    /// from the final step, or while any step is incomplete.
    pub fn begin_submit(&mut self) -> Result<F::Payload, SubmitError> {
        match self.phase {
            WizardPhase::Submitting => return Err(SubmitError::InFlight),
            WizardPhase::Submitted(_) => return Err(SubmitError::AlreadySubmitted),
            WizardPhase::Step(n) if n != self.step_count() => {
                return Err(SubmitError::NotAtFinalStep);
            }
            WizardPhase::Step(_) => {}
        }

        if let Some(step) = self
            .flow
            .steps()
            .iter()
            .find(|step| !self.flow.validate(**step, &self.state))
        {
            return Err(SubmitError::Incomplete {
                step: step.to_string(),
            });
        }

        let payload = self.flow.payload(&self.state);
        self.last_error = None;
        self.phase = WizardPhase::Submitting;
        info!(wizard = self.flow.name(), "Submitting");
        Ok(payload)
    }

    /// Record the outcome of a submission started with [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(
        &mut self,
        result: Result<F::Output, ApiError>,
    ) -> Result<F::Output, SubmitError> {
        if !self.is_submitting() {
            warn!(wizard = self.flow.name(), "Submission result arrived with none in flight");
            return Err(SubmitError::NotInFlight);
        }

        match result {
            Ok(output) => {
                info!(wizard = self.flow.name(), ?output, "Submitted");
                self.phase = WizardPhase::Submitted(output.clone());
                Ok(output)
            }
            Err(e) => {
                warn!(wizard = self.flow.name(), error = %e, "Submission failed");
                self.phase = WizardPhase::Step(self.step_count());
                self.last_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Submit the accumulated state through the flow.
    ///
    /// Retrying after a failure re-sends the same state.
    pub async fn submit(&mut self) -> Result<F::Output, SubmitError> {
        let payload = self.begin_submit()?;
        let result = self.flow.deliver(&payload).await;
        self.finish_submit(result)
    }
}
