//! Client side of `POST /api/predict-traffic`.
//!
//! Provides the `PredictionBackend` trait, the reqwest-backed
//! `HttpPredictionClient`, its `ClientConfig`, and `PredictionForm`, which
//! runs one submit-fetch-settle cycle over a [`traffic_types::FormState`].

mod backend;
mod config;
mod form;
mod http;

pub use backend::*;
pub use config::ClientConfig;
pub use form::PredictionForm;
pub use http::HttpPredictionClient;
