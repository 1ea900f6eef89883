//! Driver record, licence classes, and the partial-update payload.

use chrono::{DateTime, Utc};

use crate::domain::Vehicle;

mod license_class;
mod validation;

pub use license_class::{LicenseClass, ParseLicenseClassError};
pub use validation::DRIVER_NAME_MIN;

/// Person authorised to operate vehicles.
///
/// `license_type` keeps the raw code so unknown classes survive until
/// [`Driver::validate`] reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub license: String,
    pub license_type: String,
    /// Owned vehicles; only populated when explicitly requested.
    pub vehicles: Vec<Vehicle>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Driver {
    /// Start an unsaved driver; pair with [`Driver::apply`] to fill fields.
    ///
    /// # Examples
    /// ```
    /// use fleet::domain::{Driver, DriverPatch};
    ///
    /// let mut driver = Driver::new();
    /// driver.apply(DriverPatch {
    ///     name: "John".into(),
    ///     last_name: "Doe".into(),
    ///     email: "john.doe@example.com".into(),
    ///     phone: "1234567890".into(),
    ///     license: "ABC123".into(),
    ///     license_type: "A".into(),
    /// });
    /// assert!(driver.validate().is_ok());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsed licence class, if the stored code is recognised.
    pub fn license_class(&self) -> Option<LicenseClass> {
        self.license_type.parse().ok()
    }

    /// Merge `patch` into this record; empty strings keep the current value.
    pub fn apply(&mut self, patch: DriverPatch) {
        let DriverPatch {
            name,
            last_name,
            email,
            phone,
            license,
            license_type,
        } = patch;
        overwrite_unless_empty(&mut self.name, name);
        overwrite_unless_empty(&mut self.last_name, last_name);
        overwrite_unless_empty(&mut self.email, email);
        overwrite_unless_empty(&mut self.phone, phone);
        overwrite_unless_empty(&mut self.license, license);
        overwrite_unless_empty(&mut self.license_type, license_type);
    }
}

fn overwrite_unless_empty(current: &mut String, candidate: String) {
    if !candidate.is_empty() {
        *current = candidate;
    }
}

/// Partial update for a [`Driver`]; empty strings mean "keep current".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverPatch {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub license: String,
    pub license_type: String,
}

impl From<&Driver> for DriverPatch {
    fn from(driver: &Driver) -> Self {
        Self {
            name: driver.name.clone(),
            last_name: driver.last_name.clone(),
            email: driver.email.clone(),
            phone: driver.phone.clone(),
            license: driver.license.clone(),
            license_type: driver.license_type.clone(),
        }
    }
}

impl From<DriverPatch> for Driver {
    fn from(patch: DriverPatch) -> Self {
        let mut driver = Self::new();
        driver.apply(patch);
        driver
    }
}
