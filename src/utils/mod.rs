//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores compartido por la store y la capa HTTP.

pub mod errors;
