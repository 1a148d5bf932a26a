use crate::models::scooter::Scooter;
use crate::repositories::fleet_store::FleetStore;
use crate::utils::errors::{AppError, FleetError};
use tracing::{info, warn};

pub struct ScooterController {
    store: FleetStore,
}

impl ScooterController {
    pub fn new(store: FleetStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Scooter> {
        let scooters = self.store.list().await;
        info!(count = scooters.len(), "listing scooters");
        scooters
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Scooter, AppError> {
        self.store.get(id).await.map_err(|e| Self::report(id, e))
    }

    pub async fn unlock(&self, id: &str) -> Result<Scooter, AppError> {
        let scooter = self.store.unlock(id).await.map_err(|e| Self::report(id, e))?;
        info!(id, battery = scooter.battery_level, "scooter unlocked");
        Ok(scooter)
    }

    pub async fn lock(&self, id: &str) -> Result<Scooter, AppError> {
        let scooter = self.store.lock(id).await.map_err(|e| Self::report(id, e))?;
        info!(id, "scooter locked");
        Ok(scooter)
    }

    fn report(id: &str, err: FleetError) -> AppError {
        match &err {
            FleetError::NotFound { .. } => warn!(id, "scooter not found"),
            FleetError::Conflict { current, action } => {
                warn!(id, status = %current, %action, "transition rejected")
            }
            FleetError::InvalidRequest(reason) => warn!(id, reason = %reason, "unlock rejected"),
            FleetError::InvalidRecord { .. } => {}
        }
        err.into()
    }
}
