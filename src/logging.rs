//! Inicialización de logging
//!
//! JSON a stdout por defecto; `LOG_FORMAT=pretty` para desarrollo local.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::environment::{EnvironmentConfig, LogFormat};

pub fn init(config: &EnvironmentConfig) -> anyhow::Result<()> {
    // El filtro ya se validó al cargar la configuración
    let filter = EnvFilter::try_new(&config.log_filter)?;

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()?,
        LogFormat::Pretty => registry.with(fmt::layer()).try_init()?,
    }

    Ok(())
}
