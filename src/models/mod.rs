//! Modelos de datos
//!
//! Este módulo contiene las entidades del dominio de la flota.

pub mod scooter;

pub use scooter::*;
