//! Domain-level error taxonomy.
//!
//! These errors are transport agnostic. Inbound adapters dispatch on
//! [`Error::code`] to pick an outward signal (HTTP status, exit code, ...)
//! and never inspect the concrete variant payloads.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Violations;
use crate::domain::ports::RepositoryError;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// A collaborator could not be reached.
    ServiceUnavailable,
    /// An unexpected error occurred inside a collaborator.
    InternalError,
}

/// Entity kinds managed by the fleet domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Driver,
    Vehicle,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Driver => f.write_str("driver"),
            Self::Vehicle => f.write_str("vehicle"),
        }
    }
}

/// Failure returned by the driver and vehicle services.
///
/// # Examples
/// ```
/// use fleet::domain::{EntityKind, Error, ErrorCode};
///
/// let err = Error::not_found(EntityKind::Driver);
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.to_string(), "driver not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Identifier was not positive, or a required payload was absent.
    #[error("{message}")]
    InvalidIdentifier { message: String },
    /// One or more field checks failed.
    #[error("{0}")]
    Validation(Violations),
    /// The addressed record does not exist.
    #[error("{entity} not found")]
    NotFound { entity: EntityKind },
    /// The store collaborator failed; passed through untouched.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl Error {
    /// Identifier guard failure for `entity`, e.g. `"driver id is invalid"`.
    pub fn invalid_id(entity: EntityKind) -> Self {
        Self::InvalidIdentifier {
            message: format!("{entity} id is invalid"),
        }
    }

    /// Missing payload failure for `entity`, e.g. `"vehicle is invalid"`.
    pub fn missing_payload(entity: EntityKind) -> Self {
        Self::InvalidIdentifier {
            message: format!("{entity} is invalid"),
        }
    }

    /// Not-found sentinel for `entity`.
    pub fn not_found(entity: EntityKind) -> Self {
        Self::NotFound { entity }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidIdentifier { .. } | Self::Validation(_) => ErrorCode::InvalidRequest,
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::Repository(RepositoryError::Connection { .. }) => ErrorCode::ServiceUnavailable,
            Self::Repository(RepositoryError::Query { .. }) => ErrorCode::InternalError,
        }
    }

    /// Violations carried by a validation failure, if any.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Validation(violations) => Some(violations),
            _ => None,
        }
    }
}

impl From<Violations> for Error {
    fn from(violations: Violations) -> Self {
        Self::Validation(violations)
    }
}
