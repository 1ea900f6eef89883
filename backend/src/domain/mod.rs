//! Fleet domain: records, validation, and the services behind the API.
//!
//! Purpose: Define the driver and vehicle records together with their field
//! validators, and the services that orchestrate guard, lookup, validation,
//! and persistence for every use-case. Transport and storage concerns live
//! behind the traits in [`ports`].
//!
//! Public surface:
//! - Driver / DriverPatch: person record and its partial-update payload.
//! - Vehicle / VehiclePatch: vehicle record and its partial-update payload.
//! - Violations: ordered aggregate of validation messages.
//! - Error / ErrorCode / EntityKind: service failure taxonomy.
//! - DriverService / VehicleService: port implementations.

pub mod driver;
mod driver_service;
pub mod error;
pub mod ports;
pub mod vehicle;
mod vehicle_service;
pub mod violations;

pub use self::driver::{Driver, DriverPatch, LicenseClass, ParseLicenseClassError};
pub use self::driver_service::DriverService;
pub use self::error::{EntityKind, Error, ErrorCode};
pub use self::vehicle::{Vehicle, VehiclePatch};
pub use self::vehicle_service::VehicleService;
pub use self::violations::{VIOLATION_DELIMITER, Violations};

/// Convenient result alias for service calls.
///
/// # Examples
/// ```
/// use fleet::domain::{EntityKind, Error, FleetResult};
///
/// fn lookup(id: i64) -> FleetResult<i64> {
///     if id <= 0 {
///         return Err(Error::invalid_id(EntityKind::Vehicle));
///     }
///     Ok(id)
/// }
///
/// assert!(lookup(0).is_err());
/// ```
pub type FleetResult<T> = Result<T, Error>;
