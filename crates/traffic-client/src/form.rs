use traffic_types::{
    FormField, FormState, PredictionResult, SubmitOutcome, SubmitTicket, TrafficError,
};

use crate::PredictionBackend;

/// A prediction form bound to a backend.
///
/// Holds the [`FormState`] and performs exactly one backend call per
/// [`submit`](PredictionForm::submit). Errors never escape `submit`; they are
/// logged and reported only through the returned [`SubmitOutcome`].
///
/// Dropping a `submit` future before it completes, e.g. under a timeout,
/// returns the form to `Idle` and keeps the previous result.
pub struct PredictionForm<B> {
    backend: B,
    state: FormState,
}

impl<B: PredictionBackend> PredictionForm<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: FormState::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn select_field(&mut self, field: FormField, value: &str) -> Result<(), TrafficError> {
        self.state.select(field, value)
    }

    pub fn select_option(&mut self, field: FormField, index: usize) -> Result<(), TrafficError> {
        self.state.select_option(field, index)
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(ticket) = self.state.begin_submit() else {
            return SubmitOutcome::Busy;
        };
        let input = ticket.input().clone();
        let in_flight = InFlight {
            state: &mut self.state,
            ticket: Some(ticket),
        };
        tracing::info!(backend = self.backend.name(), "Submitting prediction request");
        let outcome = self.backend.predict(&input).await;
        in_flight.settle(outcome)
    }
}

/// Ticket of the submission in progress. Abandons it when dropped unsettled.
struct InFlight<'a> {
    state: &'a mut FormState,
    ticket: Option<SubmitTicket>,
}

impl InFlight<'_> {
    fn settle(mut self, outcome: Result<PredictionResult, TrafficError>) -> SubmitOutcome {
        match self.ticket.take() {
            Some(ticket) => self.state.settle(ticket, outcome),
            None => SubmitOutcome::Busy,
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            self.state.abandon(ticket);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;
    use traffic_types::{FormInput, ResultReport};

    /// Records every request and answers with a canned response.
    struct MockBackend {
        requests: Mutex<Vec<FormInput>>,
        response: Mutex<Option<Result<PredictionResult, TrafficError>>>,
    }

    impl MockBackend {
        fn answering(response: Result<PredictionResult, TrafficError>) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                response: Mutex::new(Some(response)),
            }
        }

        fn respond_next(&self, response: Result<PredictionResult, TrafficError>) {
            *self.response.lock().unwrap() = Some(response);
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PredictionBackend for MockBackend {
        async fn predict(&self, input: &FormInput) -> Result<PredictionResult, TrafficError> {
            self.requests.lock().unwrap().push(input.clone());
            self.response
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(TrafficError::Transport("no canned response".into())))
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    /// Never answers its first request.
    #[derive(Default)]
    struct StallsOnce {
        stalled: AtomicBool,
    }

    #[async_trait]
    impl PredictionBackend for StallsOnce {
        async fn predict(&self, _input: &FormInput) -> Result<PredictionResult, TrafficError> {
            if !self.stalled.swap(true, Ordering::SeqCst) {
                tokio::time::sleep(Duration::from_secs(3600)).await;
            }
            Ok(PredictionResult {
                ensemble_prediction: Some("Low".into()),
                ..Default::default()
            })
        }

        fn name(&self) -> &str {
            "stalls-once"
        }
    }

    fn hebbal_prediction() -> PredictionResult {
        PredictionResult::from_json(
            r#"{
                "ensemble_prediction": "High",
                "individual_predictions": {"modelA": "High", "modelB": "Medium"},
                "traffic_volume": 1200, "average_speed": 18.5, "travel_time_index": 2.1,
                "road_capacity_utilization": 0.87, "incident_reports": 3,
                "environmental_impact": 0.6, "public_transport_usage": 0.4,
                "traffic_signal_compliance": 0.9, "parking_usage": 0.7,
                "pedestrian_cyclist_count": 150, "roadwork": 1
            }"#,
        )
        .unwrap()
    }

    fn server_error() -> TrafficError {
        TrafficError::HttpStatus {
            status: 500,
            message: "Internal Server Error".into(),
        }
    }

    #[tokio::test]
    async fn success_scenario_renders_prediction() {
        let mut form = PredictionForm::new(MockBackend::answering(Ok(hebbal_prediction())));
        form.select_field(FormField::AreaName, "Hebbal").unwrap();
        form.select_field(FormField::RoadName, "Ballari Road").unwrap();
        form.select_field(FormField::WeatherConditions, "Fog").unwrap();
        form.select_field(FormField::DayOfWeek, "1").unwrap();

        assert_eq!(form.submit().await, SubmitOutcome::Updated);
        assert!(!form.state().is_loading());

        let sent = form.backend().requests.lock().unwrap()[0].clone();
        assert_eq!(
            sent,
            FormInput {
                area_name: "Hebbal".into(),
                road_name: "Ballari Road".into(),
                weather_conditions: "Fog".into(),
                day_of_week: 1,
            }
        );

        let text = ResultReport::new(form.state().result().unwrap()).to_string();
        assert!(text.contains("Ensemble Prediction: High"));
        assert!(text.contains("modelA: High"));
        assert!(text.contains("modelB: Medium"));
        assert!(text.contains("Roadwork: Yes"));
    }

    #[tokio::test]
    async fn server_error_leaves_result_absent() {
        let mut form = PredictionForm::new(MockBackend::answering(Err(server_error())));
        assert_eq!(form.submit().await, SubmitOutcome::Failed);
        assert!(form.state().result().is_none());
        assert!(!form.state().is_loading());
        assert_eq!(form.state().submit_label(), "Submit");
    }

    #[tokio::test]
    async fn server_error_keeps_prior_result() {
        let mut form = PredictionForm::new(MockBackend::answering(Ok(hebbal_prediction())));
        form.submit().await;

        form.backend().respond_next(Err(server_error()));
        assert_eq!(form.submit().await, SubmitOutcome::Failed);
        assert_eq!(form.state().result(), Some(&hebbal_prediction()));
    }

    #[tokio::test]
    async fn each_submit_sends_exactly_one_request() {
        let mut form = PredictionForm::new(MockBackend::answering(Ok(hebbal_prediction())));
        form.submit().await;
        form.submit().await;
        assert_eq!(form.backend().request_count(), 2);
        assert!(!form.state().is_loading());
    }

    #[tokio::test]
    async fn empty_form_is_submitted_as_is() {
        let mut form = PredictionForm::new(MockBackend::answering(Ok(PredictionResult::default())));
        form.submit().await;
        let sent = form.backend().requests.lock().unwrap()[0].clone();
        assert_eq!(sent, FormInput::default());
    }

    #[tokio::test]
    async fn dropped_submit_returns_form_to_idle() {
        let mut form = PredictionForm::new(StallsOnce::default());

        let timed_out = tokio::time::timeout(Duration::from_millis(50), form.submit()).await;
        assert!(timed_out.is_err());
        assert!(!form.state().is_loading());
        assert_eq!(form.state().submit_label(), "Submit");
        assert!(form.state().result().is_none());

        assert_eq!(form.submit().await, SubmitOutcome::Updated);
        assert_eq!(
            form.state().result().unwrap().ensemble_prediction.as_deref(),
            Some("Low")
        );
    }
}
