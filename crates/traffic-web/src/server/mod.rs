//! Axum routes served next to the Leptos page.

pub mod predict;

use axum::routing::post;
use axum::Router;
use traffic_client::HttpPredictionClient;
use traffic_types::PREDICT_PATH;

/// Shared application state accessible from Axum routes.
#[derive(Clone)]
pub struct AppState {
    /// Client for the upstream prediction service.
    pub client: HttpPredictionClient,
}

/// API routes, generic over the outer router state so they can be merged
/// into the Leptos router.
pub fn api_routes<S>(state: AppState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(PREDICT_PATH, post(predict::predict_traffic))
        .with_state(state)
}
