//! Vehicle record and its partial-update payload.
//!
//! A vehicle belongs to at most one driver. Ownership is recorded on the
//! vehicle (`driver_id`) but only the driver service may establish it.

use chrono::{DateTime, Utc};

mod validation;
#[cfg(test)]
mod tests;

pub use validation::{FIRST_CAR_YEAR, VEHICLE_TEXT_MIN};

/// Vehicle assignable to a driver.
///
/// ## Invariants
/// Enforced by [`Vehicle::validate`] rather than at construction so that
/// invalid candidates can be reported field by field:
/// - `brand` and `model` hold at least three characters.
/// - `year` is later than 1886.
/// - `plate` matches `AAA-XXXX`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vehicle {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub plate: String,
    pub driver_id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Vehicle {
    /// Build an unsaved vehicle from its descriptive fields.
    ///
    /// # Examples
    /// ```
    /// use fleet::domain::Vehicle;
    ///
    /// let vehicle = Vehicle::new("Toyota", "Camry", 2022, "ABC-1234");
    /// assert!(vehicle.validate().is_ok());
    /// ```
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        plate: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
            plate: plate.into(),
            ..Self::default()
        }
    }

    /// Merge `patch` into this record.
    ///
    /// Empty strings and a zero year leave the current value untouched, so
    /// a field can never be cleared through a patch.
    pub fn apply(&mut self, patch: VehiclePatch) {
        let VehiclePatch {
            brand,
            model,
            year,
            plate,
        } = patch;
        if !brand.is_empty() {
            self.brand = brand;
        }
        if !model.is_empty() {
            self.model = model;
        }
        if year != 0 {
            self.year = year;
        }
        if !plate.is_empty() {
            self.plate = plate;
        }
    }
}

/// Partial update for a [`Vehicle`]; zero values mean "keep current".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehiclePatch {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub plate: String,
}

impl From<&Vehicle> for VehiclePatch {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year,
            plate: vehicle.plate.clone(),
        }
    }
}
