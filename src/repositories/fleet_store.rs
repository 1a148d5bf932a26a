//! Store en memoria de la flota
//!
//! Un único `RwLock` protege todo el mapa id -> Scooter: `list` necesita ver
//! una foto consistente del mapa completo, así que no hay locks por registro.
//! Las lecturas devuelven copias, nunca referencias al estado interno.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::scooter::{seed_fleet, Scooter};
use crate::utils::errors::FleetError;

/// Registro de scooters, compartido entre handlers vía `Clone`
#[derive(Clone, Debug)]
pub struct FleetStore {
    scooters: Arc<RwLock<HashMap<String, Scooter>>>,
}

impl FleetStore {
    /// Crear una store a partir de registros ya validados
    pub fn new(records: impl IntoIterator<Item = Scooter>) -> Result<Self, FleetError> {
        let mut scooters = HashMap::new();
        for record in records {
            record.validate()?;
            if scooters.contains_key(&record.id) {
                return Err(FleetError::InvalidRecord {
                    id: record.id,
                    reason: "duplicate id".to_string(),
                });
            }
            scooters.insert(record.id.clone(), record);
        }

        Ok(Self {
            scooters: Arc::new(RwLock::new(scooters)),
        })
    }

    /// Store con la flota de ejemplo
    pub fn seeded() -> Result<Self, FleetError> {
        Self::new(seed_fleet())
    }

    /// Foto de todos los scooters. El orden no está definido.
    pub async fn list(&self) -> Vec<Scooter> {
        let scooters = self.scooters.read().await;
        scooters.values().cloned().collect()
    }

    pub async fn get(&self, id: &str) -> Result<Scooter, FleetError> {
        let scooters = self.scooters.read().await;
        scooters.get(id).cloned().ok_or_else(|| FleetError::NotFound {
            id: id.to_string(),
        })
    }

    /// Iniciar un viaje. Comprobación y mutación ocurren bajo el mismo guard de escritura.
    pub async fn unlock(&self, id: &str) -> Result<Scooter, FleetError> {
        self.transition(id, Scooter::start_ride).await
    }

    /// Terminar un viaje
    pub async fn lock(&self, id: &str) -> Result<Scooter, FleetError> {
        self.transition(id, Scooter::end_ride).await
    }

    pub async fn len(&self) -> usize {
        self.scooters.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn transition(
        &self,
        id: &str,
        apply: fn(&mut Scooter) -> Result<(), FleetError>,
    ) -> Result<Scooter, FleetError> {
        let mut scooters = self.scooters.write().await;
        let scooter = scooters.get_mut(id).ok_or_else(|| FleetError::NotFound {
            id: id.to_string(),
        })?;
        apply(scooter)?;
        Ok(scooter.clone())
    }
}
