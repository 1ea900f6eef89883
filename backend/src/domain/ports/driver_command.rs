//! Driving port for driver mutations, including vehicle attachment.

use async_trait::async_trait;

use crate::domain::{Driver, DriverPatch, Error, Vehicle};

/// Write side of the driver use-cases.
///
/// Every operation runs identifier guard, existence check, payload
/// validation, and persistence in that order; a failing stage stops the
/// pipeline before anything is written.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriverCommand: Send + Sync {
    /// Validate and insert a driver, returning the generated identifier.
    async fn create_driver(&self, driver: Option<Driver>) -> Result<i64, Error>;

    /// Validate `vehicle` and attach it to an existing driver.
    async fn attach_vehicle(&self, driver_id: i64, vehicle: Option<Vehicle>)
    -> Result<(), Error>;

    /// Merge `patch` into the stored driver, validate, and save the whole
    /// record.
    async fn update_driver(&self, driver_id: i64, patch: DriverPatch) -> Result<(), Error>;

    /// Delete a driver.
    async fn delete_driver(&self, driver_id: i64) -> Result<(), Error>;
}

/// Fixture command that accepts everything and persists nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDriverCommand;

#[async_trait]
impl DriverCommand for FixtureDriverCommand {
    async fn create_driver(&self, _driver: Option<Driver>) -> Result<i64, Error> {
        Ok(1)
    }

    async fn attach_vehicle(
        &self,
        _driver_id: i64,
        _vehicle: Option<Vehicle>,
    ) -> Result<(), Error> {
        Ok(())
    }

    async fn update_driver(&self, _driver_id: i64, _patch: DriverPatch) -> Result<(), Error> {
        Ok(())
    }

    async fn delete_driver(&self, _driver_id: i64) -> Result<(), Error> {
        Ok(())
    }
}
