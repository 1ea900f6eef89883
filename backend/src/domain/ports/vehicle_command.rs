//! Driving port for vehicle mutations.

use async_trait::async_trait;

use crate::domain::{Error, VehiclePatch};

/// Write side of the vehicle use-cases. Attachment belongs to
/// [`super::DriverCommand`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VehicleCommand: Send + Sync {
    /// Merge `patch` into the stored vehicle, validate, and save it whole.
    async fn update_vehicle(&self, vehicle_id: i64, patch: VehiclePatch) -> Result<(), Error>;

    /// Delete a vehicle.
    async fn delete_vehicle(&self, vehicle_id: i64) -> Result<(), Error>;
}

/// Fixture command that accepts everything and persists nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureVehicleCommand;

#[async_trait]
impl VehicleCommand for FixtureVehicleCommand {
    async fn update_vehicle(&self, _vehicle_id: i64, _patch: VehiclePatch) -> Result<(), Error> {
        Ok(())
    }

    async fn delete_vehicle(&self, _vehicle_id: i64) -> Result<(), Error> {
        Ok(())
    }
}
