//! In-process store implementing the driver and vehicle repository ports.
//!
//! Records are kept in ordered maps keyed by identifier. Identifiers are
//! handed out sequentially per record kind starting at `1`. Deletion is soft:
//! the record keeps its slot with a `deleted_at` stamp and disappears from
//! every read.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{DriverRepository, RepositoryError, VehicleRepository};
use crate::domain::{Driver, Vehicle};

#[derive(Debug, Clone)]
struct Row<T> {
    record: T,
    deleted_at: Option<DateTime<Utc>>,
}

impl<T> Row<T> {
    fn live(record: T) -> Self {
        Self {
            record,
            deleted_at: None,
        }
    }

    fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }
}

#[derive(Debug, Default)]
struct Tables {
    drivers: BTreeMap<i64, Row<Driver>>,
    vehicles: BTreeMap<i64, Row<Vehicle>>,
    last_driver_id: i64,
    last_vehicle_id: i64,
}

impl Tables {
    fn live_driver_mut(&mut self, id: i64) -> Option<&mut Driver> {
        self.drivers
            .get_mut(&id)
            .filter(|row| row.is_live())
            .map(|row| &mut row.record)
    }

    fn live_vehicle_mut(&mut self, id: i64) -> Option<&mut Vehicle> {
        self.vehicles
            .get_mut(&id)
            .filter(|row| row.is_live())
            .map(|row| &mut row.record)
    }

    fn vehicles_of(&self, driver_id: i64) -> Vec<Vehicle> {
        self.vehicles
            .values()
            .filter(|row| row.is_live() && row.record.driver_id == Some(driver_id))
            .map(|row| row.record.clone())
            .collect()
    }
}

fn map_poison_error<G>(_: PoisonError<G>) -> RepositoryError {
    RepositoryError::query("store lock poisoned")
}

/// Shared in-memory fleet store.
///
/// Cloning yields another handle onto the same tables, so one store can back
/// both the driver and the vehicle service.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use fleet::domain::Driver;
/// use fleet::domain::ports::DriverRepository;
/// use fleet::outbound::memory::InMemoryFleetStore;
/// use mockable::DefaultClock;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let store = InMemoryFleetStore::new(Arc::new(DefaultClock));
/// let id = store.create(&Driver::new()).await.expect("insert");
/// assert_eq!(id, 1);
/// # });
/// ```
#[derive(Clone)]
pub struct InMemoryFleetStore {
    tables: Arc<RwLock<Tables>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryFleetStore {
    /// Create an empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            clock,
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, RepositoryError> {
        self.tables.read().map_err(map_poison_error)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, RepositoryError> {
        self.tables.write().map_err(map_poison_error)
    }
}

#[async_trait]
impl DriverRepository for InMemoryFleetStore {
    async fn list(&self) -> Result<Vec<Driver>, RepositoryError> {
        let tables = self.read()?;
        Ok(tables
            .drivers
            .values()
            .filter(|row| row.is_live())
            .map(|row| row.record.clone())
            .collect())
    }

    async fn find_by_id(
        &self,
        id: i64,
        include_vehicles: bool,
    ) -> Result<Option<Driver>, RepositoryError> {
        let tables = self.read()?;
        let Some(row) = tables.drivers.get(&id).filter(|row| row.is_live()) else {
            return Ok(None);
        };
        let mut driver = row.record.clone();
        if include_vehicles {
            driver.vehicles = tables.vehicles_of(id);
        }
        Ok(Some(driver))
    }

    async fn create(&self, driver: &Driver) -> Result<i64, RepositoryError> {
        let now = self.clock.utc();
        let mut tables = self.write()?;
        tables.last_driver_id += 1;
        let id = tables.last_driver_id;

        let record = Driver {
            id,
            vehicles: Vec::new(),
            created_at: Some(now),
            updated_at: Some(now),
            ..driver.clone()
        };
        tables.drivers.insert(id, Row::live(record));
        debug!(driver_id = id, "driver row inserted");
        Ok(id)
    }

    async fn attach_vehicle(
        &self,
        driver: &Driver,
        vehicle: &Vehicle,
    ) -> Result<(), RepositoryError> {
        let now = self.clock.utc();
        let mut tables = self.write()?;
        if tables.live_driver_mut(driver.id).is_none() {
            return Err(RepositoryError::query(format!(
                "driver {} is not stored",
                driver.id
            )));
        }
        tables.last_vehicle_id += 1;
        let id = tables.last_vehicle_id;

        let record = Vehicle {
            id,
            driver_id: Some(driver.id),
            created_at: Some(now),
            updated_at: Some(now),
            ..vehicle.clone()
        };
        tables.vehicles.insert(id, Row::live(record));
        debug!(driver_id = driver.id, vehicle_id = id, "vehicle row inserted");
        Ok(())
    }

    async fn save(&self, driver: &Driver) -> Result<(), RepositoryError> {
        let now = self.clock.utc();
        let mut tables = self.write()?;
        let stored = tables
            .live_driver_mut(driver.id)
            .ok_or_else(|| RepositoryError::query(format!("driver {} is not stored", driver.id)))?;

        *stored = Driver {
            vehicles: Vec::new(),
            created_at: stored.created_at,
            updated_at: Some(now),
            ..driver.clone()
        };
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let now = self.clock.utc();
        let mut tables = self.write()?;
        if let Some(row) = tables.drivers.get_mut(&id).filter(|row| row.is_live()) {
            row.deleted_at = Some(now);
            debug!(driver_id = id, "driver row soft-deleted");
        }
        Ok(())
    }
}

#[async_trait]
impl VehicleRepository for InMemoryFleetStore {
    async fn list(&self) -> Result<Vec<Vehicle>, RepositoryError> {
        let tables = self.read()?;
        Ok(tables
            .vehicles
            .values()
            .filter(|row| row.is_live())
            .map(|row| row.record.clone())
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, RepositoryError> {
        let tables = self.read()?;
        Ok(tables
            .vehicles
            .get(&id)
            .filter(|row| row.is_live())
            .map(|row| row.record.clone()))
    }

    async fn save(&self, vehicle: &Vehicle) -> Result<(), RepositoryError> {
        let now = self.clock.utc();
        let mut tables = self.write()?;
        let stored = tables.live_vehicle_mut(vehicle.id).ok_or_else(|| {
            RepositoryError::query(format!("vehicle {} is not stored", vehicle.id))
        })?;

        // Ownership is fixed at attachment time.
        *stored = Vehicle {
            driver_id: stored.driver_id,
            created_at: stored.created_at,
            updated_at: Some(now),
            ..vehicle.clone()
        };
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let now = self.clock.utc();
        let mut tables = self.write()?;
        if let Some(row) = tables.vehicles.get_mut(&id).filter(|row| row.is_live()) {
            row.deleted_at = Some(now);
            debug!(vehicle_id = id, "vehicle row soft-deleted");
        }
        Ok(())
    }
}
