//! End-to-end tests against an in-process mock prediction service.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;

use traffic_client::{ClientConfig, HttpPredictionClient, PredictionBackend, PredictionForm};
use traffic_types::{FormField, FormInput, ResultReport, SubmitOutcome, TrafficError};

const HEBBAL_RESPONSE: &str = r#"{
    "ensemble_prediction": "High",
    "individual_predictions": {"modelA": "High", "modelB": "Medium"},
    "traffic_volume": 1200,
    "average_speed": 18.5,
    "travel_time_index": 2.1,
    "road_capacity_utilization": 0.87,
    "incident_reports": 3,
    "environmental_impact": 0.6,
    "public_transport_usage": 0.4,
    "traffic_signal_compliance": 0.9,
    "parking_usage": 0.7,
    "pedestrian_cyclist_count": 150,
    "roadwork": 1
}"#;

#[derive(Clone)]
struct MockService {
    status: StatusCode,
    body: &'static str,
    seen: Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>,
}

async fn predict_handler(
    State(service): State<MockService>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let json = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    service.seen.lock().unwrap().push((content_type, json));

    (
        service.status,
        [(header::CONTENT_TYPE, "application/json")],
        service.body,
    )
}

async fn spawn_service(status: StatusCode, body: &'static str) -> (SocketAddr, MockService) {
    let service = MockService {
        status,
        body,
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .route("/api/predict-traffic", post(predict_handler))
        .with_state(service.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, service)
}

fn client_for(addr: SocketAddr) -> HttpPredictionClient {
    HttpPredictionClient::new(ClientConfig::new(format!("http://{addr}")))
}

#[tokio::test]
async fn posts_json_and_decodes_prediction() {
    let (addr, service) = spawn_service(StatusCode::OK, HEBBAL_RESPONSE).await;
    let mut form = PredictionForm::new(client_for(addr));

    form.select_field(FormField::AreaName, "Hebbal").unwrap();
    form.select_field(FormField::RoadName, "Ballari Road").unwrap();
    form.select_field(FormField::WeatherConditions, "Fog").unwrap();
    form.select_field(FormField::DayOfWeek, "1").unwrap();

    assert_eq!(form.submit().await, SubmitOutcome::Updated);

    let seen = service.seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0.as_deref(), Some("application/json"));
    assert_eq!(
        seen[0].1,
        serde_json::json!({
            "area_name": "Hebbal",
            "road_name": "Ballari Road",
            "weather_conditions": "Fog",
            "day_of_week": 1
        })
    );

    let report = ResultReport::new(form.state().result().unwrap());
    assert_eq!(report.ensemble, "High");
    assert_eq!(report.individual.len(), 2);
    assert!(report.to_string().contains("Roadwork: Yes"));
}

#[tokio::test]
async fn day_of_week_goes_over_the_wire_as_integer() {
    let (addr, service) = spawn_service(StatusCode::OK, "{}").await;
    let mut form = PredictionForm::new(client_for(addr));
    form.select_field(FormField::DayOfWeek, "3").unwrap();
    form.submit().await;

    let seen = service.seen.lock().unwrap().clone();
    assert_eq!(seen[0].1["day_of_week"], serde_json::json!(3));
}

#[tokio::test]
async fn internal_server_error_is_swallowed() {
    let (addr, _service) = spawn_service(StatusCode::INTERNAL_SERVER_ERROR, "{}").await;
    let mut form = PredictionForm::new(client_for(addr));

    assert_eq!(form.submit().await, SubmitOutcome::Failed);
    assert!(form.state().result().is_none());
    assert!(!form.state().is_loading());
}

#[tokio::test]
async fn any_non_success_status_is_a_failure() {
    for status in [StatusCode::BAD_REQUEST, StatusCode::NOT_FOUND, StatusCode::BAD_GATEWAY] {
        let (addr, _service) = spawn_service(status, HEBBAL_RESPONSE).await;
        let err = client_for(addr)
            .predict(&FormInput::default())
            .await
            .unwrap_err();
        assert!(
            matches!(err, TrafficError::HttpStatus { status: s, .. } if s == status.as_u16()),
            "unexpected error for {status}: {err}"
        );
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let (addr, _service) = spawn_service(StatusCode::OK, "<html>oops</html>").await;
    let err = client_for(addr)
        .predict(&FormInput::default())
        .await
        .unwrap_err();
    assert!(matches!(err, TrafficError::Decode(_)));
}

#[tokio::test]
async fn fetch_body_returns_upstream_text_untouched() {
    let (addr, _service) = spawn_service(StatusCode::OK, HEBBAL_RESPONSE).await;
    let body = client_for(addr)
        .fetch_body(&FormInput::default())
        .await
        .unwrap();
    assert_eq!(body, HEBBAL_RESPONSE);

    let (addr, _service) =
        spawn_service(StatusCode::SERVICE_UNAVAILABLE, r#"{"detail":"down"}"#).await;
    let err = client_for(addr)
        .fetch_body(&FormInput::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TrafficError::HttpStatus { status: 503, ref message } if message == r#"{"detail":"down"}"#
    ));
}
