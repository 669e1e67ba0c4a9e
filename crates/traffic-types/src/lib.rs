//! Shared types, errors and form state for the traffic prediction form.
//!
//! This crate holds everything the browser page, the CLI and the HTTP client
//! agree on:
//! - `TrafficError` — unified error taxonomy
//! - `FormInput` / `PredictionResult` — the wire contract of `POST /api/predict-traffic`
//! - `FormState` — the idle/submitting state machine behind the submit button
//! - `ResultReport` — the fixed rendering order of a prediction
//!
//! It performs no I/O and compiles for `wasm32`.

mod form;
pub mod options;
mod ordered_pairs;
mod prediction;
mod report;

pub use form::{FormState, SubmitOutcome, SubmitPhase, SubmitTicket};
pub use options::{DayOfWeek, FormField};
pub use prediction::{FormInput, Metric, MetricValue, PredictionResult};
pub use report::{MetricRow, ResultReport};

/// Path of the prediction endpoint, relative to the serving origin.
pub const PREDICT_PATH: &str = "/api/predict-traffic";

/// Unified error type for the form, the client and the server.
#[derive(Debug, thiserror::Error)]
pub enum TrafficError {
    // === Wire Errors ===
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Could not decode prediction: {0}")]
    Decode(String),

    // === Form Errors ===
    #[error("Invalid day of week '{0}', expected 0-6 or a day name")]
    InvalidDayOfWeek(String),

    #[error("Option index {index} is out of range for {field}")]
    OptionOutOfRange { field: FormField, index: usize },

    // === Generic ===
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TrafficError {
    /// Maps the error to an HTTP status code for server mode.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            TrafficError::HttpStatus { status, .. } => Some(*status),
            TrafficError::Transport(_) | TrafficError::Decode(_) => Some(502),
            TrafficError::InvalidDayOfWeek(_) | TrafficError::OptionOutOfRange { .. } => {
                Some(400)
            }
            TrafficError::Config(_) => None,
        }
    }
}

/// A convenience alias for `Result<T, TrafficError>`.
pub type Result<T> = std::result::Result<T, TrafficError>;
