use async_trait::async_trait;

use traffic_types::{FormInput, PredictionResult, TrafficError};

// ---------------------------------------------------------------------------
// PredictionBackend
// ---------------------------------------------------------------------------

/// Anything that can turn a filled-in form into a prediction.
#[async_trait]
pub trait PredictionBackend: Send + Sync {
    async fn predict(&self, input: &FormInput) -> Result<PredictionResult, TrafficError>;
    fn name(&self) -> &str;
}
