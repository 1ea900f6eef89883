//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local store backing both repository ports.
//!
//! Adapters translate between domain records and their storage shape and
//! contain no business rules.

pub mod memory;
