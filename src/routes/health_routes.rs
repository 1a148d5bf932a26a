use axum::{extract::State, routing::get, Json, Router};
use crate::dto::health_dto::HealthResponse;
use crate::state::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.store.len().await))
}
