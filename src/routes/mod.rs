//! Router de la API
//!
//! `build_router` arma las rutas y el middleware; lo usan tanto el binario
//! como los tests de integración.

pub mod health_routes;
pub mod scooter_routes;

use std::any::Any;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::error;

use crate::config::environment::EnvironmentConfig;
use crate::middleware::cors::cors_middleware_with_origins;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .merge(health_routes::create_health_router())
        .merge(scooter_routes::create_scooter_router());

    with_middleware(routes, &state.config).with_state(state)
}

/// Request id, trace, panic recovery, timeout y CORS sobre las rutas dadas
fn with_middleware(routes: Router<AppState>, config: &EnvironmentConfig) -> Router<AppState> {
    let cors = cors_middleware_with_origins(&config.cors_origins);
    let timeout = config.request_timeout;

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get("x-request-id")
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id
            )
        }))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::new(timeout))
        .layer(cors);

    routes.layer(middleware)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(panic = %detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "internal server error" })),
    )
        .into_response()
}
