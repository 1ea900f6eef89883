//! Shared request parsing helpers for inbound HTTP adapters.
//!
//! These only check that raw path and query values have the right shape.
//! Range checks such as "identifier must be positive" stay in the services.

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use tracing::debug;

use crate::inbound::http::error::ApiError;

/// Parse a numeric path segment; `field` names it in the error message.
pub(crate) fn parse_id(raw: &str, field: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::malformed(format!("{field} must be a number")))
}

/// Parse an optional boolean flag, defaulting to `false` when absent.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts.
pub(crate) fn parse_flag(raw: Option<&str>, field: &str) -> Result<bool, ApiError> {
    match raw.unwrap_or("false") {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "" | "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ApiError::malformed(format!("{field} must be a boolean"))),
    }
}

/// `JsonConfig` error handler producing the JSON error envelope.
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(%error, "request body rejected");
    ApiError::malformed("invalid request body").into()
}

/// `QueryConfig` error handler producing the JSON error envelope.
pub fn query_error_handler(error: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(%error, "query string rejected");
    ApiError::malformed("invalid query string").into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("7", 7)]
    #[case("-3", -3)]
    #[case("0", 0)]
    fn numeric_segments_parse(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_id(raw, "driverId"), Ok(expected));
    }

    #[rstest]
    #[case("abc")]
    #[case("1.5")]
    #[case("")]
    #[case(" 12 ")]
    #[case("12 ")]
    #[case("+")]
    fn non_numeric_segments_are_rejected(#[case] raw: &str) {
        let err = parse_id(raw, "vehicleId").expect_err("not a number");
        assert_eq!(err.to_string(), "vehicleId must be a number");
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some("true"), true)]
    #[case(Some("1"), true)]
    #[case(Some("T"), true)]
    #[case(Some("False"), false)]
    #[case(Some("0"), false)]
    fn flags_parse(#[case] raw: Option<&str>, #[case] expected: bool) {
        assert_eq!(parse_flag(raw, "includeVehicle"), Ok(expected));
    }

    #[rstest]
    #[case("yes")]
    #[case("tRuE")]
    fn unknown_flag_values_are_rejected(#[case] raw: &str) {
        let err = parse_flag(Some(raw), "includeVehicle").expect_err("not a boolean");
        assert_eq!(err.to_string(), "includeVehicle must be a boolean");
    }
}
