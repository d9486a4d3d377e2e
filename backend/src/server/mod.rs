//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use petdex::Trace;
#[cfg(debug_assertions)]
use petdex::doc::ApiDoc;
use petdex::inbound::http::health::{HealthState, live, ready};
use petdex::inbound::http::payload::json_config;
use petdex::inbound::http::pets::{create_pet, find_pet, list_user_pets, update_pet};
use petdex::inbound::http::state::HttpState;
use petdex::outbound::memory::InMemoryPetStore;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use std::future::Future;
use std::sync::Arc;

fn build_http_state() -> web::Data<HttpState> {
    let store = Arc::new(InMemoryPetStore::default());
    web::Data::new(HttpState::new(store.clone(), store))
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    json_limit: usize,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        json_limit,
    } = deps;

    let api = web::scope("/api/v1")
        .service(create_pet)
        .service(update_pet)
        .service(find_pet)
        .service(list_user_pets);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config(json_limit))
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Fail liveness once `signal` resolves, then stop `server` gracefully.
async fn drain_on<S>(signal: S, health_state: web::Data<HealthState>, server: ServerHandle)
where
    S: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            info!("shutdown requested, draining");
            health_state.mark_unhealthy();
            server.stop(true).await;
        }
        Err(error) => warn!(%error, "failed to listen for shutdown signal"),
    }
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The pet ports are backed by a shared [`InMemoryPetStore`], so every worker
/// sees the same records. Ctrl-C fails the liveness probe before the
/// server drains.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state();
    let ServerConfig {
        bind_addr,
        json_limit,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            json_limit,
        })
    })
    .bind(bind_addr)?
    .run();

    actix_web::rt::spawn(drain_on(
        tokio::signal::ctrl_c(),
        health_state.clone(),
        server.handle(),
    ));
    health_state.mark_ready();
    Ok(server)
}
