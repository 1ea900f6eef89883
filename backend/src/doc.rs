//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every driver, vehicle, and health endpoint together
//! with the request, response, and error schemas. The server publishes it at
//! `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::domain::ErrorCode;
use crate::inbound::http::drivers::{CreatedBody, DriverRequestBody, DriverResponse};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::vehicles::{VehicleRequestBody, VehicleResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fleet API",
        description = "Driver and vehicle registry with field validation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::drivers::list_drivers,
        crate::inbound::http::drivers::get_driver,
        crate::inbound::http::drivers::create_driver,
        crate::inbound::http::drivers::attach_vehicle,
        crate::inbound::http::drivers::update_driver,
        crate::inbound::http::drivers::delete_driver,
        crate::inbound::http::vehicles::list_vehicles,
        crate::inbound::http::vehicles::get_vehicle,
        crate::inbound::http::vehicles::update_vehicle,
        crate::inbound::http::vehicles::delete_vehicle,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        DriverRequestBody,
        DriverResponse,
        CreatedBody,
        VehicleRequestBody,
        VehicleResponse,
        ErrorBody,
        ErrorCode
    )),
    tags(
        (name = "drivers", description = "Driver registration and vehicle attachment"),
        (name = "vehicles", description = "Vehicle lookup and maintenance"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/api/v1/drivers")]
    #[case("/api/v1/drivers/{id}")]
    #[case("/api/v1/drivers/{id}/vehicle")]
    #[case("/api/v1/vehicles")]
    #[case("/api/v1/vehicles/{id}")]
    #[case("/health/ready")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "{path} missing");
    }

    #[rstest]
    fn driver_routes_share_one_path_item() {
        let doc = ApiDoc::openapi();
        let item = doc
            .paths
            .paths
            .get("/api/v1/drivers/{id}")
            .expect("driver item path");
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }

    #[rstest]
    fn error_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        assert!(schemas.contains_key("ErrorBody"));
        assert!(schemas.contains_key("VehicleRequestBody"));
    }
}
