//! Field checks for vehicle records.

use std::sync::OnceLock;

use regex::Regex;

use super::Vehicle;
use crate::domain::Violations;

/// Minimum number of characters for brand and model.
pub const VEHICLE_TEXT_MIN: usize = 3;
/// Year the first car was built; model years must be later.
pub const FIRST_CAR_YEAR: i32 = 1886;

static PLATE_RE: OnceLock<Regex> = OnceLock::new();

fn plate_regex() -> &'static Regex {
    PLATE_RE.get_or_init(|| {
        Regex::new("^[A-Z]{3}-[A-Za-z0-9]{4}$")
            .unwrap_or_else(|error| panic!("plate regex failed to compile: {error}"))
    })
}

fn too_short(value: &str) -> bool {
    value.chars().count() < VEHICLE_TEXT_MIN
}

impl Vehicle {
    /// Run every field check and collect the failures in field order:
    /// brand, model, year, plate.
    ///
    /// # Examples
    /// ```
    /// use fleet::domain::Vehicle;
    ///
    /// let vehicle = Vehicle::new("T", "Camry", 2022, "ABC-1234");
    /// assert_eq!(
    ///     vehicle.violations().messages(),
    ///     ["vehicle brand is invalid".to_owned()]
    /// );
    /// ```
    pub fn violations(&self) -> Violations {
        let mut violations = Violations::new();
        violations.check(too_short(&self.brand), "vehicle brand is invalid");
        violations.check(too_short(&self.model), "vehicle model is invalid");
        violations.check(self.year <= FIRST_CAR_YEAR, "vehicle year is invalid");
        violations.check(
            !plate_regex().is_match(&self.plate),
            "vehicle plate is invalid",
        );
        violations
    }

    /// Validate the record, failing with every violated check.
    pub fn validate(&self) -> Result<(), Violations> {
        self.violations().into_result()
    }
}
