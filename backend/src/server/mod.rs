//! Server construction and middleware wiring.

mod config;

pub use config::ServerSettings;

use std::future::Future;
use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, HttpServer, web};
use mockable::DefaultClock;
use tracing::{info, warn};
use utoipa::OpenApi;

use fleet::Trace;
use fleet::doc::ApiDoc;
use fleet::domain::{DriverService, VehicleService};
use fleet::inbound::http::configure_api;
use fleet::inbound::http::health::{HealthState, live, ready};
use fleet::inbound::http::state::HttpState;
use fleet::outbound::memory::InMemoryFleetStore;

/// Wire the services onto a fresh in-memory store.
fn build_http_state() -> HttpState {
    let store = Arc::new(InMemoryFleetStore::new(Arc::new(DefaultClock)));
    let drivers = Arc::new(DriverService::new(store.clone()));
    let vehicles = Arc::new(VehicleService::new(store));
    HttpState::new(drivers.clone(), drivers, vehicles.clone(), vehicles)
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_api)
        .service(ready)
        .service(live)
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
}

/// Bind the HTTP server described by `settings`.
///
/// actix-web's own signal handling is disabled; pair the server with
/// [`drain_on_signal`] so liveness fails before the listener stops. In-flight
/// requests get [`ServerSettings::shutdown_timeout`] to finish.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state());
    let server_health_state = health_state.clone();
    let (host, port) = settings.bind_addr();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .shutdown_timeout(settings.shutdown_timeout().as_secs())
        .disable_signals()
        .bind((host, port))?
        .run();

    info!(%host, port, "fleet server listening");
    health_state.mark_ready();
    Ok(server)
}

/// Resolve on SIGINT, or on SIGTERM where the platform has it.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = terminate.recv() => {}
                }
                return;
            }
            Err(error) => warn!(%error, "SIGTERM handler unavailable"),
        }
    }

    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "SIGINT handler unavailable");
        std::future::pending::<()>().await;
    }
}

/// Wait for `signal`, fail liveness, then stop the server gracefully.
pub async fn drain_on_signal<F>(
    health_state: web::Data<HealthState>,
    handle: ServerHandle,
    signal: F,
) where
    F: Future<Output = ()>,
{
    signal.await;
    info!("shutdown requested, draining connections");
    health_state.mark_unhealthy();
    handle.stop(true).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn assembled_app_serves_the_fleet_routes() {
        let health = web::Data::new(HealthState::new());
        let app = test::init_service(build_app(health, web::Data::new(build_http_state()))).await;

        let created = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/drivers")
                .set_json(json!({
                    "name": "John",
                    "lastName": "Doe",
                    "email": "john.doe@example.com",
                    "phone": "1234567890",
                    "license": "ABC123",
                    "licenseType": "A"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        assert!(created.headers().contains_key("trace-id"));

        let listed = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/drivers").to_request(),
        )
        .await;
        let body: Value = test::read_body_json(listed).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
    }

    #[actix_web::test]
    async fn openapi_document_is_served() {
        let health = web::Data::new(HealthState::new());
        let app = test::init_service(build_app(health, web::Data::new(build_http_state()))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api-docs/openapi.json")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert!(body["paths"].get("/api/v1/drivers/{id}/vehicle").is_some());
    }

    #[actix_web::test]
    async fn signal_fails_liveness_then_stops_the_server() {
        let health = web::Data::new(HealthState::new());
        let settings = ServerSettings {
            host: "127.0.0.1".to_owned(),
            port: 0,
            shutdown_timeout_secs: 1,
        };
        let server = create_server(health.clone(), &settings).expect("bind ephemeral port");
        assert!(health.is_ready());
        assert!(health.is_alive());

        let drain = actix_web::rt::spawn(drain_on_signal(
            health.clone(),
            server.handle(),
            std::future::ready(()),
        ));
        server.await.expect("server stops cleanly");
        drain.await.expect("drain task completes");

        assert!(!health.is_alive());
    }
}
