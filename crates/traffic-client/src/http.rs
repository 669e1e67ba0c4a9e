use async_trait::async_trait;

use crate::{ClientConfig, PredictionBackend};
use traffic_types::{FormInput, PredictionResult, TrafficError};

// ---------------------------------------------------------------------------
// HttpPredictionClient
// ---------------------------------------------------------------------------

/// Posts the form as JSON to the prediction endpoint.
///
/// No timeout is configured; a request waits until the backend answers or
/// the transport gives up.
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpPredictionClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Result<Self, TrafficError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Post the form and return the response body untouched.
    ///
    /// Non-2xx answers become [`TrafficError::HttpStatus`] carrying the body.
    pub async fn fetch_body(&self, input: &FormInput) -> Result<String, TrafficError> {
        let url = self.config.predict_url();
        tracing::debug!(
            url = %url,
            area = %input.area_name,
            road = %input.road_name,
            weather = %input.weather_conditions,
            day = input.day_of_week,
            "Prediction request"
        );

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(input)
            .send()
            .await
            .map_err(|e| TrafficError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| TrafficError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(TrafficError::HttpStatus {
                status: status.as_u16(),
                message: body,
            });
        }

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "Prediction response");
        Ok(body)
    }
}

#[async_trait]
impl PredictionBackend for HttpPredictionClient {
    async fn predict(&self, input: &FormInput) -> Result<PredictionResult, TrafficError> {
        let body = self.fetch_body(input).await?;
        PredictionResult::from_json(&body)
    }

    fn name(&self) -> &str {
        "http"
    }
}
