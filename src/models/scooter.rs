//! Modelo de Scooter
//!
//! Este módulo contiene el struct Scooter, su estado de ciclo de vida y las
//! reglas de transición entre estados (unlock / lock).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::errors::FleetError;

/// Batería mínima (porcentaje) para iniciar un viaje
pub const MIN_UNLOCK_BATTERY: u8 = 10;

/// Estado del scooter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScooterStatus {
    Available,
    InUse,
    Maintenance,
}

impl ScooterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScooterStatus::Available => "available",
            ScooterStatus::InUse => "in_use",
            ScooterStatus::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for ScooterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operación solicitada sobre un scooter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideAction {
    Unlock,
    Lock,
}

impl fmt::Display for RideAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RideAction::Unlock => f.write_str("unlock"),
            RideAction::Lock => f.write_str("lock"),
        }
    }
}

/// Scooter de la flota
///
/// Las coordenadas y el precio son opcionales: un registro sin ellos sigue
/// siendo el mismo tipo de entidad, simplemente se omiten en el JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scooter {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub battery_level: u8,
    pub status: ScooterStatus,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price_per_minute: Option<Decimal>,
}

impl Scooter {
    /// Verificar los invariantes del registro antes de aceptarlo en la flota
    pub fn validate(&self) -> Result<(), FleetError> {
        if self.id.trim().is_empty() {
            return Err(FleetError::InvalidRecord {
                id: self.id.clone(),
                reason: "id must not be empty".to_string(),
            });
        }
        if self.battery_level > 100 {
            return Err(FleetError::InvalidRecord {
                id: self.id.clone(),
                reason: format!("battery level {} out of range 0-100", self.battery_level),
            });
        }
        if let Some(price) = self.price_per_minute {
            if price.is_sign_negative() {
                return Err(FleetError::InvalidRecord {
                    id: self.id.clone(),
                    reason: format!("price per minute {} is negative", price),
                });
            }
        }
        Ok(())
    }

    /// available -> in_use
    ///
    /// Se comprueba primero el estado y después la batería. Si alguna
    /// comprobación falla el registro queda intacto.
    pub fn start_ride(&mut self) -> Result<(), FleetError> {
        if self.status != ScooterStatus::Available {
            return Err(FleetError::Conflict {
                current: self.status,
                action: RideAction::Unlock,
            });
        }
        if self.battery_level < MIN_UNLOCK_BATTERY {
            return Err(FleetError::InvalidRequest(
                "battery too low for ride".to_string(),
            ));
        }
        self.status = ScooterStatus::InUse;
        Ok(())
    }

    /// in_use -> available
    pub fn end_ride(&mut self) -> Result<(), FleetError> {
        if self.status != ScooterStatus::InUse {
            return Err(FleetError::Conflict {
                current: self.status,
                action: RideAction::Lock,
            });
        }
        self.status = ScooterStatus::Available;
        Ok(())
    }
}

/// Flota de ejemplo cargada al arrancar el proceso
pub fn seed_fleet() -> Vec<Scooter> {
    let price = Some(Decimal::new(50, 2));
    let scooter = |id: &str, name: &str, lat: f64, lon: f64, battery: u8, status| Scooter {
        id: id.to_string(),
        name: name.to_string(),
        latitude: Some(lat),
        longitude: Some(lon),
        battery_level: battery,
        status,
        price_per_minute: price,
    };

    vec![
        scooter(
            "sc-1001",
            "Av. Paulista & Rua Augusta",
            -23.5613,
            -46.6560,
            87,
            ScooterStatus::Available,
        ),
        scooter("sc-1002", "Praça da Sé", -23.5503, -46.6340, 42, ScooterStatus::Available),
        scooter(
            "sc-1003",
            "Parque Ibirapuera",
            -23.5874,
            -46.6576,
            15,
            ScooterStatus::Maintenance,
        ),
        scooter("sc-1004", "Pinheiros", -23.5670, -46.6914, 95, ScooterStatus::InUse),
    ]
}
