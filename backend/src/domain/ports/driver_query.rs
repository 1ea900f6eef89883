//! Driving port for driver read operations.

use async_trait::async_trait;

use crate::domain::{Driver, Error};

/// Read side of the driver use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriverQuery: Send + Sync {
    /// Every live driver; store failures pass through unchanged.
    async fn list_drivers(&self) -> Result<Vec<Driver>, Error>;

    /// Fetch one driver, optionally with its vehicles.
    ///
    /// `Ok(None)` means the driver does not exist; an identifier that is not
    /// positive fails before the store is consulted.
    async fn get_driver(
        &self,
        driver_id: i64,
        include_vehicles: bool,
    ) -> Result<Option<Driver>, Error>;
}

/// Fixture query that knows no drivers.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDriverQuery;

#[async_trait]
impl DriverQuery for FixtureDriverQuery {
    async fn list_drivers(&self) -> Result<Vec<Driver>, Error> {
        Ok(Vec::new())
    }

    async fn get_driver(
        &self,
        _driver_id: i64,
        _include_vehicles: bool,
    ) -> Result<Option<Driver>, Error> {
        Ok(None)
    }
}
