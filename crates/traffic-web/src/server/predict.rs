//! `POST /api/predict-traffic`: forwards the form to the upstream prediction service.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use super::AppState;
use traffic_types::{FormInput, TrafficError};

/// The upstream body is relayed byte for byte. Upstream non-2xx statuses
/// pass through with their body; transport failures become 502.
pub async fn predict_traffic(
    State(state): State<AppState>,
    Json(input): Json<FormInput>,
) -> Response {
    let request_id = Uuid::new_v4();
    tracing::info!(
        %request_id,
        area = %input.area_name,
        road = %input.road_name,
        weather = %input.weather_conditions,
        day = input.day_of_week,
        "Forwarding prediction request"
    );

    match state.client.fetch_body(&input).await {
        Ok(body) => {
            tracing::info!(%request_id, bytes = body.len(), "Prediction forwarded");
            json_body(StatusCode::OK, body)
        }
        Err(TrafficError::HttpStatus { status, message }) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            tracing::error!(%request_id, status = status.as_u16(), "Upstream rejected prediction");
            json_body(status, message)
        }
        Err(e) => {
            let status = e
                .http_status()
                .and_then(|s| StatusCode::from_u16(s).ok())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            tracing::error!(%request_id, status = status.as_u16(), "Prediction failed: {}", e);
            (status, Json(serde_json::json!({ "error": e.to_string() }))).into_response()
        }
    }
}

fn json_body(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
