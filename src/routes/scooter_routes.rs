use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use crate::controllers::scooter_controller::ScooterController;
use crate::models::scooter::Scooter;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_scooter_router() -> Router<AppState> {
    Router::new()
        .route("/api/scooters", get(list_scooters))
        .route("/api/scooters/", get(list_scooters))
        .route("/api/scooters/:id", get(get_scooter))
        .route("/api/scooters/:id/unlock", post(unlock_scooter))
        .route("/api/scooters/:id/lock", post(lock_scooter))
}

async fn list_scooters(State(state): State<AppState>) -> Json<Vec<Scooter>> {
    let controller = ScooterController::new(state.store.clone());
    Json(controller.list().await)
}

async fn get_scooter(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Scooter>> {
    let controller = ScooterController::new(state.store.clone());
    let scooter = controller.get_by_id(&id).await?;
    Ok(Json(scooter))
}

// TODO: verificar el método de pago antes de desbloquear cuando exista el servicio de pagos
async fn unlock_scooter(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Scooter>> {
    let controller = ScooterController::new(state.store.clone());
    let scooter = controller.unlock(&id).await?;
    Ok(Json(scooter))
}

async fn lock_scooter(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Scooter>> {
    let controller = ScooterController::new(state.store.clone());
    let scooter = controller.lock(&id).await?;
    Ok(Json(scooter))
}
