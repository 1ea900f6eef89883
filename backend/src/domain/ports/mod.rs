//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Command`, `*Query`) are what inbound adapters call.
//! Driven ports (`*Repository`) are what the domain services call and what
//! outbound adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod driver_command;
mod driver_query;
mod driver_repository;
mod repository_error;
mod vehicle_command;
mod vehicle_query;
mod vehicle_repository;

pub use driver_command::{DriverCommand, FixtureDriverCommand};
#[cfg(test)]
pub use driver_command::MockDriverCommand;
pub use driver_query::{DriverQuery, FixtureDriverQuery};
#[cfg(test)]
pub use driver_query::MockDriverQuery;
pub use driver_repository::{DriverRepository, FixtureDriverRepository};
#[cfg(test)]
pub use driver_repository::MockDriverRepository;
pub use repository_error::RepositoryError;
pub use vehicle_command::{FixtureVehicleCommand, VehicleCommand};
#[cfg(test)]
pub use vehicle_command::MockVehicleCommand;
pub use vehicle_query::{FixtureVehicleQuery, VehicleQuery};
#[cfg(test)]
pub use vehicle_query::MockVehicleQuery;
pub use vehicle_repository::{FixtureVehicleRepository, VehicleRepository};
#[cfg(test)]
pub use vehicle_repository::MockVehicleRepository;
