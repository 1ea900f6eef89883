//! Vehicle HTTP handlers.
//!
//! ```text
//! GET /api/v1/vehicles
//! GET /api/v1/vehicles/{id}
//! PUT /api/v1/vehicles/{id}
//! DELETE /api/v1/vehicles/{id}
//! ```
//!
//! Vehicles are created by attaching them to a driver, see
//! [`crate::inbound::http::drivers::attach_vehicle`].

use actix_web::{HttpResponse, delete, get, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{EntityKind, Error, Vehicle, VehiclePatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_id;

const VEHICLE_ID: &str = "vehicleId";

/// Vehicle fields accepted on attach and update.
///
/// Omitted fields decode to their zero value; on update a zero value keeps
/// the stored field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleRequestBody {
    #[schema(example = "Toyota")]
    pub brand: String,
    #[schema(example = "Camry")]
    pub vehicle_model: String,
    #[schema(example = 2022)]
    pub year: i32,
    #[schema(example = "ABC-1234")]
    pub plate: String,
}

impl From<VehicleRequestBody> for VehiclePatch {
    fn from(body: VehicleRequestBody) -> Self {
        Self {
            brand: body.brand,
            model: body.vehicle_model,
            year: body.year,
            plate: body.plate,
        }
    }
}

impl From<VehicleRequestBody> for Vehicle {
    fn from(body: VehicleRequestBody) -> Self {
        Self::new(body.brand, body.vehicle_model, body.year, body.plate)
    }
}

/// Stored vehicle as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: i64,
    pub brand: String,
    pub vehicle_model: String,
    pub year: i32,
    pub plate: String,
    pub driver_id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            brand: vehicle.brand,
            vehicle_model: vehicle.model,
            year: vehicle.year,
            plate: vehicle.plate,
            driver_id: vehicle.driver_id,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}

/// List every vehicle.
#[utoipa::path(
    get,
    path = "/api/v1/vehicles",
    responses(
        (status = 200, description = "Vehicles", body = [VehicleResponse]),
        (status = 500, description = "Internal server error", body = ErrorBody),
        (status = 503, description = "Service unavailable", body = ErrorBody)
    ),
    tags = ["vehicles"],
    operation_id = "listVehicles"
)]
#[get("/vehicles")]
pub async fn list_vehicles(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<VehicleResponse>>> {
    let vehicles = state.vehicles_query.list_vehicles().await?;
    Ok(web::Json(
        vehicles.into_iter().map(VehicleResponse::from).collect(),
    ))
}

/// Fetch one vehicle.
#[utoipa::path(
    get,
    path = "/api/v1/vehicles/{id}",
    params(("id" = i64, Path, description = "Vehicle identifier")),
    responses(
        (status = 200, description = "Vehicle", body = VehicleResponse),
        (status = 400, description = "Invalid identifier", body = ErrorBody),
        (status = 404, description = "Vehicle not found", body = ErrorBody),
        (status = 503, description = "Service unavailable", body = ErrorBody)
    ),
    tags = ["vehicles"],
    operation_id = "getVehicle"
)]
#[get("/vehicles/{id}")]
pub async fn get_vehicle(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<VehicleResponse>> {
    let vehicle_id = parse_id(&path, VEHICLE_ID)?;
    let vehicle = state
        .vehicles_query
        .get_vehicle(vehicle_id)
        .await?
        .ok_or_else(|| Error::not_found(EntityKind::Vehicle))?;
    Ok(web::Json(VehicleResponse::from(vehicle)))
}

/// Merge non-empty fields into a stored vehicle.
#[utoipa::path(
    put,
    path = "/api/v1/vehicles/{id}",
    params(("id" = i64, Path, description = "Vehicle identifier")),
    request_body = VehicleRequestBody,
    responses(
        (status = 200, description = "Vehicle updated"),
        (status = 400, description = "Invalid request or merged record", body = ErrorBody),
        (status = 404, description = "Vehicle not found", body = ErrorBody),
        (status = 503, description = "Service unavailable", body = ErrorBody)
    ),
    tags = ["vehicles"],
    operation_id = "updateVehicle"
)]
#[put("/vehicles/{id}")]
pub async fn update_vehicle(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<VehicleRequestBody>,
) -> ApiResult<HttpResponse> {
    let vehicle_id = parse_id(&path, VEHICLE_ID)?;
    state
        .vehicles
        .update_vehicle(vehicle_id, payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().finish())
}

/// Delete a vehicle.
#[utoipa::path(
    delete,
    path = "/api/v1/vehicles/{id}",
    params(("id" = i64, Path, description = "Vehicle identifier")),
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 400, description = "Invalid identifier", body = ErrorBody),
        (status = 503, description = "Service unavailable", body = ErrorBody)
    ),
    tags = ["vehicles"],
    operation_id = "deleteVehicle"
)]
#[delete("/vehicles/{id}")]
pub async fn delete_vehicle(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let vehicle_id = parse_id(&path, VEHICLE_ID)?;
    state.vehicles.delete_vehicle(vehicle_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "vehicles_tests.rs"]
mod tests;
