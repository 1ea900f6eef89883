//! Driving licence classes.

use std::fmt;
use std::str::FromStr;

/// Licence class codes accepted for a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseClass {
    Acc,
    A,
    A1,
    Ab,
    B,
    B1,
    C,
    C1,
    D,
    D1,
    Be,
    Ce,
    C1e,
    De,
    D1e,
}

impl LicenseClass {
    /// Every accepted class, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Acc,
        Self::A,
        Self::A1,
        Self::Ab,
        Self::B,
        Self::B1,
        Self::C,
        Self::C1,
        Self::D,
        Self::D1,
        Self::Be,
        Self::Ce,
        Self::C1e,
        Self::De,
        Self::D1e,
    ];

    /// Canonical code, e.g. `"C1E"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Acc => "ACC",
            Self::A => "A",
            Self::A1 => "A1",
            Self::Ab => "AB",
            Self::B => "B",
            Self::B1 => "B1",
            Self::C => "C",
            Self::C1 => "C1",
            Self::D => "D",
            Self::D1 => "D1",
            Self::Be => "BE",
            Self::Ce => "CE",
            Self::C1e => "C1E",
            Self::De => "DE",
            Self::D1e => "D1E",
        }
    }
}

/// Error returned when parsing an unknown licence class code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLicenseClassError;

impl fmt::Display for LicenseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ParseLicenseClassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid licence class")
    }
}

impl std::error::Error for ParseLicenseClassError {}

impl FromStr for LicenseClass {
    type Err = ParseLicenseClassError;

    /// Codes are case sensitive: `"c1e"` is rejected.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.as_str() == value)
            .ok_or(ParseLicenseClassError)
    }
}
