//! Driver domain service.
//!
//! Implements the driver driving ports on top of a [`DriverRepository`].
//! Each write follows the same pipeline: identifier guard, existence check,
//! payload validation, persistence. Any failing stage returns immediately,
//! so nothing reaches the store unless every earlier stage passed.
//!
//! Read-modify-write is not guarded here; two concurrent updates of the same
//! driver race and the last save wins.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{DriverCommand, DriverQuery, DriverRepository, RepositoryError};
use crate::domain::{Driver, DriverPatch, EntityKind, Error, Vehicle};

/// Reject identifiers that are not positive.
pub(crate) fn ensure_positive_id(id: i64, entity: EntityKind) -> Result<(), Error> {
    if id <= 0 {
        debug!(id, %entity, "rejected non-positive identifier");
        return Err(Error::invalid_id(entity));
    }
    Ok(())
}

/// Log a store failure and lift it into the domain error unchanged.
pub(crate) fn repository_failure(operation: &'static str) -> impl Fn(RepositoryError) -> Error {
    move |error| {
        warn!(operation, %error, "fleet repository call failed");
        Error::Repository(error)
    }
}

/// Driver service implementing [`DriverQuery`] and [`DriverCommand`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use fleet::domain::DriverService;
/// use fleet::domain::ports::{DriverQuery, FixtureDriverRepository};
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let service = DriverService::new(Arc::new(FixtureDriverRepository));
/// assert!(service.get_driver(1, false).await.expect("lookup").is_none());
/// assert!(service.get_driver(0, false).await.is_err());
/// # });
/// ```
#[derive(Clone)]
pub struct DriverService<R> {
    drivers: Arc<R>,
}

impl<R> DriverService<R> {
    /// Create a new service backed by `drivers`.
    pub fn new(drivers: Arc<R>) -> Self {
        Self { drivers }
    }
}

impl<R> DriverService<R>
where
    R: DriverRepository,
{
    async fn fetch_existing(&self, driver_id: i64) -> Result<Driver, Error> {
        self.drivers
            .find_by_id(driver_id, false)
            .await
            .map_err(repository_failure("find driver"))?
            .ok_or_else(|| {
                debug!(driver_id, "driver not found");
                Error::not_found(EntityKind::Driver)
            })
    }
}

#[async_trait]
impl<R> DriverQuery for DriverService<R>
where
    R: DriverRepository,
{
    async fn list_drivers(&self) -> Result<Vec<Driver>, Error> {
        self.drivers
            .list()
            .await
            .map_err(repository_failure("list drivers"))
    }

    async fn get_driver(
        &self,
        driver_id: i64,
        include_vehicles: bool,
    ) -> Result<Option<Driver>, Error> {
        ensure_positive_id(driver_id, EntityKind::Driver)?;
        self.drivers
            .find_by_id(driver_id, include_vehicles)
            .await
            .map_err(repository_failure("find driver"))
    }
}

#[async_trait]
impl<R> DriverCommand for DriverService<R>
where
    R: DriverRepository,
{
    async fn create_driver(&self, driver: Option<Driver>) -> Result<i64, Error> {
        let driver = driver.ok_or_else(|| Error::missing_payload(EntityKind::Driver))?;
        driver.validate()?;

        let id = self
            .drivers
            .create(&driver)
            .await
            .map_err(repository_failure("create driver"))?;
        debug!(driver_id = id, "driver created");
        Ok(id)
    }

    async fn attach_vehicle(
        &self,
        driver_id: i64,
        vehicle: Option<Vehicle>,
    ) -> Result<(), Error> {
        ensure_positive_id(driver_id, EntityKind::Driver)?;
        let vehicle = vehicle.ok_or_else(|| Error::missing_payload(EntityKind::Vehicle))?;
        vehicle.validate()?;

        let driver = self.fetch_existing(driver_id).await?;
        self.drivers
            .attach_vehicle(&driver, &vehicle)
            .await
            .map_err(repository_failure("attach vehicle"))?;
        debug!(driver_id, plate = %vehicle.plate, "vehicle attached");
        Ok(())
    }

    async fn update_driver(&self, driver_id: i64, patch: DriverPatch) -> Result<(), Error> {
        ensure_positive_id(driver_id, EntityKind::Driver)?;
        let mut driver = self.fetch_existing(driver_id).await?;

        driver.apply(patch);
        driver.validate()?;

        self.drivers
            .save(&driver)
            .await
            .map_err(repository_failure("save driver"))?;
        debug!(driver_id, "driver updated");
        Ok(())
    }

    async fn delete_driver(&self, driver_id: i64) -> Result<(), Error> {
        ensure_positive_id(driver_id, EntityKind::Driver)?;
        self.drivers
            .delete(driver_id)
            .await
            .map_err(repository_failure("delete driver"))
    }
}

#[cfg(test)]
#[path = "driver_service_tests.rs"]
mod tests;
