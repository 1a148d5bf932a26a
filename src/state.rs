//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. La store se construye en el arranque y se
//! entrega aquí; no existe acceso global a la flota.

use crate::config::environment::EnvironmentConfig;
use crate::repositories::fleet_store::FleetStore;

#[derive(Clone)]
pub struct AppState {
    pub store: FleetStore,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: FleetStore, config: EnvironmentConfig) -> Self {
        Self { store, config }
    }
}
