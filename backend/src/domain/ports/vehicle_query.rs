//! Driving port for vehicle read operations.

use async_trait::async_trait;

use crate::domain::{Error, Vehicle};

/// Read side of the vehicle use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VehicleQuery: Send + Sync {
    /// Every live vehicle.
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, Error>;

    /// Fetch one vehicle; `Ok(None)` when it does not exist.
    async fn get_vehicle(&self, vehicle_id: i64) -> Result<Option<Vehicle>, Error>;
}

/// Fixture query that knows no vehicles.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureVehicleQuery;

#[async_trait]
impl VehicleQuery for FixtureVehicleQuery {
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, Error> {
        Ok(Vec::new())
    }

    async fn get_vehicle(&self, _vehicle_id: i64) -> Result<Option<Vehicle>, Error> {
        Ok(None)
    }
}
