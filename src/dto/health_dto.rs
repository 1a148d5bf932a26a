use chrono::{DateTime, Utc};
use serde::Serialize;

// Response del health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub scooters: usize,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn ok(scooters: usize) -> Self {
        Self {
            status: "ok",
            scooters,
            timestamp: Utc::now(),
        }
    }
}
