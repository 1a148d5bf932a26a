//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables
//! tienen un valor por defecto; sólo los valores mal formados son error.

use std::collections::HashMap;
use std::env;
use std::time::Duration;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errores al leer la configuración
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("LOG_FORMAT must be 'json' or 'pretty', got '{0}'")]
    InvalidLogFormat(String),

    #[error("RUST_LOG is not a valid filter '{value}': {reason}")]
    InvalidLogFilter { value: String, reason: String },
}

/// Formato de salida de los logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub log_format: LogFormat,
    pub log_filter: String,
    pub request_timeout: Duration,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: Vec::new(),
            log_format: LogFormat::Json,
            log_filter: "info".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde el entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    /// Construir la configuración a partir de pares clave/valor
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = vars.into_iter().collect();
        let defaults = Self::default();
        let get = |name: &str| vars.get(name).map(|v| v.trim()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber {
                name: "PORT",
                value: value.to_string(),
            })?,
            None => defaults.port,
        };

        let request_timeout = match get("REQUEST_TIMEOUT_SECS") {
            Some(value) => value
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidNumber {
                    name: "REQUEST_TIMEOUT_SECS",
                    value: value.to_string(),
                })?,
            None => defaults.request_timeout,
        };

        let log_format = match get("LOG_FORMAT") {
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                _ => return Err(ConfigError::InvalidLogFormat(value.to_string())),
            },
            None => defaults.log_format,
        };

        let log_filter = match get("RUST_LOG") {
            Some(value) => {
                EnvFilter::try_new(value).map_err(|e| ConfigError::InvalidLogFilter {
                    value: value.to_string(),
                    reason: e.to_string(),
                })?;
                value.to_string()
            }
            None => defaults.log_filter,
        };

        let cors_origins = get("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            environment: get("ENVIRONMENT").map(str::to_string).unwrap_or(defaults.environment),
            host: get("HOST").map(str::to_string).unwrap_or(defaults.host),
            port,
            cors_origins,
            log_format,
            log_filter,
            request_timeout,
        })
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
