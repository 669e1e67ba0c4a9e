use crate::options::FormField;
use crate::prediction::{FormInput, PredictionResult};
use crate::Result;

/// Submission phase of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// What a settled submission did to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A prediction arrived and replaced the previous result.
    Updated,
    /// The request failed; the previous result (if any) is still shown.
    Failed,
    /// A submission was already in flight, nothing was sent.
    Busy,
}

/// Proof that a submission is in flight.
///
/// Only [`FormState::begin_submit`] creates one, and at most one exists per
/// form at a time; [`FormState::settle`] or [`FormState::abandon`] consumes it.
#[derive(Debug)]
#[must_use = "an unsettled ticket leaves the form stuck in Submitting"]
pub struct SubmitTicket {
    input: FormInput,
}

impl SubmitTicket {
    /// The request body captured when the submission started.
    pub fn input(&self) -> &FormInput {
        &self.input
    }
}

/// State owned by one prediction form: selections, loading flag, last result.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    input: FormInput,
    phase: SubmitPhase,
    result: Option<PredictionResult>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    /// Label of the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            "Please wait"
        } else {
            "Submit"
        }
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn select(&mut self, field: FormField, value: &str) -> Result<()> {
        self.input.select(field, value)
    }

    pub fn select_option(&mut self, field: FormField, index: usize) -> Result<()> {
        self.input.select_option(field, index)
    }

    /// Enter `Submitting` and capture the request body.
    ///
    /// Returns `None` while another submission is in flight.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.is_loading() {
            tracing::debug!("Submit ignored, request already in flight");
            return None;
        }
        self.phase = SubmitPhase::Submitting;
        Some(SubmitTicket {
            input: self.input.clone(),
        })
    }

    /// Return to `Idle` with the outcome of the request.
    ///
    /// Failures are logged and otherwise swallowed: the previous result stays.
    pub fn settle(
        &mut self,
        ticket: SubmitTicket,
        outcome: Result<PredictionResult>,
    ) -> SubmitOutcome {
        self.phase = SubmitPhase::Idle;
        match outcome {
            Ok(prediction) => {
                tracing::info!(
                    area = %ticket.input.area_name,
                    road = %ticket.input.road_name,
                    ensemble = ?prediction.ensemble_prediction,
                    "Prediction received"
                );
                self.result = Some(prediction);
                SubmitOutcome::Updated
            }
            Err(e) => {
                tracing::error!(
                    area = %ticket.input.area_name,
                    road = %ticket.input.road_name,
                    "Error: {}",
                    e
                );
                SubmitOutcome::Failed
            }
        }
    }

    /// Return to `Idle` for a request that will never settle, e.g. because
    /// its future was dropped. The previous result stays.
    pub fn abandon(&mut self, ticket: SubmitTicket) {
        self.phase = SubmitPhase::Idle;
        tracing::warn!(
            area = %ticket.input.area_name,
            road = %ticket.input.road_name,
            "Prediction request abandoned"
        );
    }
}
