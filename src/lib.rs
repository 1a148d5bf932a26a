//! API de flota de scooters compartidos
//!
//! Registro en memoria de scooters con operaciones de listado, consulta,
//! desbloqueo (inicio de viaje) y bloqueo (fin de viaje), expuesto por HTTP.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use repositories::fleet_store::FleetStore;
pub use routes::build_router;
pub use state::AppState;
