use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use scooter_fleet::config::environment::EnvironmentConfig;
use scooter_fleet::{build_router, AppState, FleetStore};

// Función helper para crear la app de test con una flota nueva
fn create_test_app() -> Router {
    let store = FleetStore::seeded().unwrap();
    build_router(AppState::new(store, EnvironmentConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, body) = send(&app, Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["scooters"], 4);
}

#[tokio::test]
async fn test_list_scooters() {
    let app = create_test_app();

    for uri in ["/api/scooters", "/api/scooters/"] {
        let (status, body) = send(&app, Method::GET, uri).await;
        assert_eq!(status, StatusCode::OK);

        let mut ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap())
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["sc-1001", "sc-1002", "sc-1003", "sc-1004"]);
    }
}

#[tokio::test]
async fn test_get_scooter() {
    let app = create_test_app();

    let (status, body) = send(&app, Method::GET, "/api/scooters/sc-1003").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "sc-1003");
    assert_eq!(body["name"], "Parque Ibirapuera");
    assert_eq!(body["status"], "maintenance");
    assert_eq!(body["battery_level"], 15);
    assert_eq!(body["price_per_minute"], json!(0.5));

    let (status, body) = send(&app, Method::GET, "/api/scooters/sc-0000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "scooter not found" }));
}

#[tokio::test]
async fn test_unlock_and_lock_cycle() {
    let app = create_test_app();

    let (status, body) = send(&app, Method::POST, "/api/scooters/sc-1001/unlock").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "in_use");

    let (status, body) = send(&app, Method::POST, "/api/scooters/sc-1001/unlock").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "error": "scooter is in_use, cannot unlock" }));

    let (status, body) = send(&app, Method::POST, "/api/scooters/sc-1001/lock").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "available");

    let (status, body) = send(&app, Method::POST, "/api/scooters/sc-1001/lock").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "error": "scooter is available, cannot lock" }));
}

#[tokio::test]
async fn test_maintenance_scooter_rejected() {
    let app = create_test_app();

    let (status, body) = send(&app, Method::POST, "/api/scooters/sc-1003/unlock").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "scooter is maintenance, cannot unlock");

    let (status, _) = send(&app, Method::POST, "/api/scooters/sc-1003/lock").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_low_battery_returns_bad_request() {
    let mut fleet = scooter_fleet::models::scooter::seed_fleet();
    fleet[1].battery_level = 5;
    let store = FleetStore::new(fleet).unwrap();
    let app = build_router(AppState::new(store, EnvironmentConfig::default()));

    let (status, body) = send(&app, Method::POST, "/api/scooters/sc-1002/unlock").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "battery too low for ride" }));

    let (_, body) = send(&app, Method::GET, "/api/scooters/sc-1002").await;
    assert_eq!(body["status"], "available");
}

#[tokio::test]
async fn test_unknown_scooter_not_found_everywhere() {
    let app = create_test_app();
    for (method, uri) in [
        (Method::GET, "/api/scooters/sc-9999"),
        (Method::POST, "/api/scooters/sc-9999/unlock"),
        (Method::POST, "/api/scooters/sc-9999/lock"),
    ] {
        let (status, body) = send(&app, method, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "scooter not found");
    }
}

#[tokio::test]
async fn test_request_id_and_cors_headers() {
    let app = create_test_app();
    let request = Request::builder()
        .uri("/api/scooters")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );

    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/scooters/sc-1001/unlock")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(preflight).await.unwrap();

    assert!(response.status().is_success());
    let methods = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(methods.contains("POST"));
}

#[tokio::test]
async fn test_cors_allow_list() {
    let config = EnvironmentConfig::from_vars(vec![(
        "CORS_ORIGINS".to_string(),
        "http://a.test".to_string(),
    )])
    .unwrap();
    let app = build_router(AppState::new(FleetStore::seeded().unwrap(), config));

    let allowed_origin = |origin: &'static str| {
        let app = app.clone();
        async move {
            let request = Request::builder()
                .uri("/api/scooters")
                .header(header::ORIGIN, origin)
                .body(Body::empty())
                .unwrap();
            let response = app.oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|value| value.to_str().unwrap().to_string())
        }
    };

    assert_eq!(allowed_origin("http://a.test").await.as_deref(), Some("http://a.test"));
    assert_eq!(allowed_origin("http://evil.test").await, None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_unlock_requests() {
    let app = create_test_app();

    let tasks: Vec<_> = (0..32)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                send(&app, Method::POST, "/api/scooters/sc-1002/unlock").await.0
            })
        })
        .collect();

    let statuses: Vec<StatusCode> = futures::future::join_all(tasks)
        .await
        .into_iter()
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1);
    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::CONFLICT).count(), 31);
}
