//! Driver HTTP handlers.
//!
//! ```text
//! GET /api/v1/drivers
//! POST /api/v1/drivers
//! GET /api/v1/drivers/{id}?includeVehicle=true
//! PUT /api/v1/drivers/{id}
//! DELETE /api/v1/drivers/{id}
//! POST /api/v1/drivers/{id}/vehicle
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Driver, DriverPatch, EntityKind, Error, Vehicle};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_flag, parse_id};
use crate::inbound::http::vehicles::{VehicleRequestBody, VehicleResponse};

const DRIVER_ID: &str = "driverId";

/// Driver fields accepted on create and update.
///
/// Omitted fields decode to empty strings; on update an empty string keeps
/// the stored field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DriverRequestBody {
    #[schema(example = "John")]
    pub name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    #[schema(example = "+55 1234567890")]
    pub phone: String,
    #[schema(example = "ABC123")]
    pub license: String,
    #[schema(example = "B")]
    pub license_type: String,
}

impl From<DriverRequestBody> for DriverPatch {
    fn from(body: DriverRequestBody) -> Self {
        Self {
            name: body.name,
            last_name: body.last_name,
            email: body.email,
            phone: body.phone,
            license: body.license,
            license_type: body.license_type,
        }
    }
}

/// Stored driver as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponse {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub license: String,
    pub license_type: String,
    /// Present only when requested with `includeVehicle`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vehicles: Vec<VehicleResponse>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name,
            last_name: driver.last_name,
            email: driver.email,
            phone: driver.phone,
            license: driver.license,
            license_type: driver.license_type,
            vehicles: driver
                .vehicles
                .into_iter()
                .map(VehicleResponse::from)
                .collect(),
            created_at: driver.created_at,
            updated_at: driver.updated_at,
        }
    }
}

/// Identifier of a newly created driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedBody {
    #[schema(example = 1)]
    pub id: i64,
}

/// Query parameters for fetching a driver.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DriverLookupQuery {
    /// Load the driver's vehicles as well; defaults to `false`.
    #[param(value_type = Option<bool>)]
    pub include_vehicle: Option<String>,
}

/// List every driver.
#[utoipa::path(
    get,
    path = "/api/v1/drivers",
    responses(
        (status = 200, description = "Drivers", body = [DriverResponse]),
        (status = 500, description = "Internal server error", body = ErrorBody),
        (status = 503, description = "Service unavailable", body = ErrorBody)
    ),
    tags = ["drivers"],
    operation_id = "listDrivers"
)]
#[get("/drivers")]
pub async fn list_drivers(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<DriverResponse>>> {
    let drivers = state.drivers_query.list_drivers().await?;
    Ok(web::Json(
        drivers.into_iter().map(DriverResponse::from).collect(),
    ))
}

/// Fetch one driver, optionally with its vehicles.
#[utoipa::path(
    get,
    path = "/api/v1/drivers/{id}",
    params(("id" = i64, Path, description = "Driver identifier"), DriverLookupQuery),
    responses(
        (status = 200, description = "Driver", body = DriverResponse),
        (status = 400, description = "Invalid identifier or flag", body = ErrorBody),
        (status = 404, description = "Driver not found", body = ErrorBody),
        (status = 503, description = "Service unavailable", body = ErrorBody)
    ),
    tags = ["drivers"],
    operation_id = "getDriver"
)]
#[get("/drivers/{id}")]
pub async fn get_driver(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<DriverLookupQuery>,
) -> ApiResult<web::Json<DriverResponse>> {
    let driver_id = parse_id(&path, DRIVER_ID)?;
    let include_vehicles = parse_flag(query.include_vehicle.as_deref(), "includeVehicle")?;
    let driver = state
        .drivers_query
        .get_driver(driver_id, include_vehicles)
        .await?
        .ok_or_else(|| Error::not_found(EntityKind::Driver))?;
    Ok(web::Json(DriverResponse::from(driver)))
}

/// Register a driver.
///
/// A missing or undecodable body is reported as `"driver is invalid"`.
#[utoipa::path(
    post,
    path = "/api/v1/drivers",
    request_body = DriverRequestBody,
    responses(
        (status = 201, description = "Driver created", body = CreatedBody),
        (status = 400, description = "Invalid driver", body = ErrorBody),
        (status = 503, description = "Service unavailable", body = ErrorBody)
    ),
    tags = ["drivers"],
    operation_id = "createDriver"
)]
#[post("/drivers")]
pub async fn create_driver(
    state: web::Data<HttpState>,
    payload: Option<web::Json<DriverRequestBody>>,
) -> ApiResult<HttpResponse> {
    let driver = payload.map(|body| Driver::from(DriverPatch::from(body.into_inner())));
    let id = state.drivers.create_driver(driver).await?;
    Ok(HttpResponse::Created().json(CreatedBody { id }))
}

/// Attach a new vehicle to a driver.
///
/// A missing or undecodable body is reported as `"vehicle is invalid"`.
#[utoipa::path(
    post,
    path = "/api/v1/drivers/{id}/vehicle",
    params(("id" = i64, Path, description = "Driver identifier")),
    request_body = VehicleRequestBody,
    responses(
        (status = 201, description = "Vehicle attached"),
        (status = 400, description = "Invalid identifier or vehicle", body = ErrorBody),
        (status = 404, description = "Driver not found", body = ErrorBody),
        (status = 503, description = "Service unavailable", body = ErrorBody)
    ),
    tags = ["drivers"],
    operation_id = "attachVehicle"
)]
#[post("/drivers/{id}/vehicle")]
pub async fn attach_vehicle(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: Option<web::Json<VehicleRequestBody>>,
) -> ApiResult<HttpResponse> {
    let driver_id = parse_id(&path, DRIVER_ID)?;
    let vehicle = payload.map(|body| Vehicle::from(body.into_inner()));
    state.drivers.attach_vehicle(driver_id, vehicle).await?;
    Ok(HttpResponse::Created().finish())
}

/// Merge non-empty fields into a stored driver.
#[utoipa::path(
    put,
    path = "/api/v1/drivers/{id}",
    params(("id" = i64, Path, description = "Driver identifier")),
    request_body = DriverRequestBody,
    responses(
        (status = 200, description = "Driver updated"),
        (status = 400, description = "Invalid request or merged record", body = ErrorBody),
        (status = 404, description = "Driver not found", body = ErrorBody),
        (status = 503, description = "Service unavailable", body = ErrorBody)
    ),
    tags = ["drivers"],
    operation_id = "updateDriver"
)]
#[put("/drivers/{id}")]
pub async fn update_driver(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<DriverRequestBody>,
) -> ApiResult<HttpResponse> {
    let driver_id = parse_id(&path, DRIVER_ID)?;
    state
        .drivers
        .update_driver(driver_id, payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().finish())
}

/// Delete a driver.
#[utoipa::path(
    delete,
    path = "/api/v1/drivers/{id}",
    params(("id" = i64, Path, description = "Driver identifier")),
    responses(
        (status = 204, description = "Driver deleted"),
        (status = 400, description = "Invalid identifier", body = ErrorBody),
        (status = 503, description = "Service unavailable", body = ErrorBody)
    ),
    tags = ["drivers"],
    operation_id = "deleteDriver"
)]
#[delete("/drivers/{id}")]
pub async fn delete_driver(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let driver_id = parse_id(&path, DRIVER_ID)?;
    state.drivers.delete_driver(driver_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "drivers_tests.rs"]
mod tests;
