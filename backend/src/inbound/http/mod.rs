//! HTTP inbound adapter exposing the fleet REST endpoints.

pub mod drivers;
pub mod error;
pub mod health;
pub mod state;
pub mod validation;
pub mod vehicles;

use actix_web::web;

pub use error::{ApiError, ApiResult};

/// Register the `/api/v1` routes and extractor error handling.
///
/// State (`web::Data<HttpState>`) is registered by the caller.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use fleet::inbound::http::{configure_api, state::HttpState};
///
/// let _app = App::new()
///     .app_data(web::Data::new(HttpState::default()))
///     .configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(validation::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(validation::query_error_handler))
        .service(
            web::scope("/api/v1")
                .service(drivers::list_drivers)
                .service(drivers::create_driver)
                .service(drivers::get_driver)
                .service(drivers::update_driver)
                .service(drivers::delete_driver)
                .service(drivers::attach_vehicle)
                .service(vehicles::list_vehicles)
                .service(vehicles::get_vehicle)
                .service(vehicles::update_vehicle)
                .service(vehicles::delete_vehicle),
        );
}
