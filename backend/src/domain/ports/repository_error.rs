//! Failure type shared by the driver and vehicle store adapters.
//!
//! A missing record is not a failure: lookups return `Ok(None)` so callers can
//! tell "not found" apart from a store that could not answer.

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by fleet repository adapters.
    pub enum RepositoryError {
        /// Store connection could not be established.
        Connection { message: String } => "fleet repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "fleet repository query failed: {message}",
    }
}
