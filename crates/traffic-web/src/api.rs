//! Browser-side call to `POST /api/predict-traffic`.

use traffic_types::{FormInput, PredictionResult, TrafficError};

/// Send the form to the serving origin and decode the prediction.
#[cfg(feature = "hydrate")]
pub async fn post_prediction(input: &FormInput) -> Result<PredictionResult, TrafficError> {
    use gloo_net::http::Request;
    use traffic_types::PREDICT_PATH;

    let resp = Request::post(PREDICT_PATH)
        .header("Content-Type", "application/json")
        .json(input)
        .map_err(|e| TrafficError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| TrafficError::Transport(e.to_string()))?;

    if !resp.ok() {
        return Err(TrafficError::HttpStatus {
            status: resp.status(),
            message: resp.status_text(),
        });
    }

    let body = resp
        .text()
        .await
        .map_err(|e| TrafficError::Transport(e.to_string()))?;
    PredictionResult::from_json(&body)
}

/// Click handlers never run during server rendering.
#[cfg(not(feature = "hydrate"))]
pub async fn post_prediction(_input: &FormInput) -> Result<PredictionResult, TrafficError> {
    Err(TrafficError::Transport(
        "predictions can only be requested from the browser".into(),
    ))
}
