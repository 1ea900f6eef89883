//! Port abstraction for vehicle persistence adapters.

use async_trait::async_trait;

use crate::domain::Vehicle;

use super::RepositoryError;

/// Driven port storing vehicles.
///
/// Vehicles are created through [`super::DriverRepository::attach_vehicle`];
/// this port only reads, rewrites, and deletes them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Every live vehicle.
    async fn list(&self) -> Result<Vec<Vehicle>, RepositoryError>;

    /// Fetch a vehicle by identifier, `None` when absent.
    async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, RepositoryError>;

    /// Persist every field of an existing vehicle.
    async fn save(&self, vehicle: &Vehicle) -> Result<(), RepositoryError>;

    /// Soft-delete a vehicle. Deleting an unknown identifier is not an error.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

/// Fixture implementation that stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureVehicleRepository;

#[async_trait]
impl VehicleRepository for FixtureVehicleRepository {
    async fn list(&self) -> Result<Vec<Vehicle>, RepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Vehicle>, RepositoryError> {
        Ok(None)
    }

    async fn save(&self, _vehicle: &Vehicle) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn delete(&self, _id: i64) -> Result<(), RepositoryError> {
        Ok(())
    }
}
