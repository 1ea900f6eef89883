//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    DriverCommand, DriverQuery, FixtureDriverCommand, FixtureDriverQuery, FixtureVehicleCommand,
    FixtureVehicleQuery, VehicleCommand, VehicleQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub drivers: Arc<dyn DriverCommand>,
    pub drivers_query: Arc<dyn DriverQuery>,
    pub vehicles: Arc<dyn VehicleCommand>,
    pub vehicles_query: Arc<dyn VehicleQuery>,
}

impl HttpState {
    /// Construct state from the four fleet ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use fleet::domain::ports::{
    ///     FixtureDriverCommand, FixtureDriverQuery, FixtureVehicleCommand, FixtureVehicleQuery,
    /// };
    /// use fleet::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureDriverCommand),
    ///     Arc::new(FixtureDriverQuery),
    ///     Arc::new(FixtureVehicleCommand),
    ///     Arc::new(FixtureVehicleQuery),
    /// );
    /// let _drivers = state.drivers.clone();
    /// ```
    pub fn new(
        drivers: Arc<dyn DriverCommand>,
        drivers_query: Arc<dyn DriverQuery>,
        vehicles: Arc<dyn VehicleCommand>,
        vehicles_query: Arc<dyn VehicleQuery>,
    ) -> Self {
        Self {
            drivers,
            drivers_query,
            vehicles,
            vehicles_query,
        }
    }

    /// Replace the driver ports, keeping the vehicle ones.
    pub fn with_drivers(
        self,
        drivers: Arc<dyn DriverCommand>,
        drivers_query: Arc<dyn DriverQuery>,
    ) -> Self {
        Self {
            drivers,
            drivers_query,
            ..self
        }
    }

    /// Replace the vehicle ports, keeping the driver ones.
    pub fn with_vehicles(
        self,
        vehicles: Arc<dyn VehicleCommand>,
        vehicles_query: Arc<dyn VehicleQuery>,
    ) -> Self {
        Self {
            vehicles,
            vehicles_query,
            ..self
        }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(
            Arc::new(FixtureDriverCommand),
            Arc::new(FixtureDriverQuery),
            Arc::new(FixtureVehicleCommand),
            Arc::new(FixtureVehicleQuery),
        )
    }
}
