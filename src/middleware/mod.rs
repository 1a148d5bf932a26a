//! Middleware del sistema
//!
//! Este módulo contiene la configuración de CORS de la API.

pub mod cors;

pub use cors::*;
