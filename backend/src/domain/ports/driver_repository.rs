//! Port abstraction for driver persistence adapters.

use async_trait::async_trait;

use crate::domain::{Driver, Vehicle};

use super::RepositoryError;

/// Driven port storing drivers and their vehicle ownership.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Every live driver, without vehicles.
    async fn list(&self) -> Result<Vec<Driver>, RepositoryError>;

    /// Fetch a driver by identifier.
    ///
    /// Returns `None` when no live driver has the identifier. Owned vehicles
    /// are loaded only when `include_vehicles` is set.
    async fn find_by_id(
        &self,
        id: i64,
        include_vehicles: bool,
    ) -> Result<Option<Driver>, RepositoryError>;

    /// Insert a new driver and return its generated identifier.
    async fn create(&self, driver: &Driver) -> Result<i64, RepositoryError>;

    /// Insert `vehicle` and record `driver` as its owner.
    async fn attach_vehicle(
        &self,
        driver: &Driver,
        vehicle: &Vehicle,
    ) -> Result<(), RepositoryError>;

    /// Persist every scalar field of an existing driver.
    ///
    /// The `vehicles` collection is ignored; ownership only changes through
    /// [`DriverRepository::attach_vehicle`].
    async fn save(&self, driver: &Driver) -> Result<(), RepositoryError>;

    /// Soft-delete a driver. Deleting an unknown identifier is not an error.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

/// Fixture implementation for tests that never touch persistence.
///
/// Lookups find nothing, writes are discarded, and creation always yields
/// identifier `1`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDriverRepository;

#[async_trait]
impl DriverRepository for FixtureDriverRepository {
    async fn list(&self) -> Result<Vec<Driver>, RepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(
        &self,
        _id: i64,
        _include_vehicles: bool,
    ) -> Result<Option<Driver>, RepositoryError> {
        Ok(None)
    }

    async fn create(&self, _driver: &Driver) -> Result<i64, RepositoryError> {
        Ok(1)
    }

    async fn attach_vehicle(
        &self,
        _driver: &Driver,
        _vehicle: &Vehicle,
    ) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn save(&self, _driver: &Driver) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn delete(&self, _id: i64) -> Result<(), RepositoryError> {
        Ok(())
    }
}
