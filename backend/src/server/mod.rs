//! Server construction and middleware wiring.

mod config;
mod settings;
mod state_builders;

pub use config::{ConfigError, ServerConfig};
pub use settings::ServerSettings;
pub use state_builders::{build_http_state, http_state_from_records};

use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Condition;
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::configure;
use crate::inbound::http::fallback::{expose_internal_errors, not_found};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::home::landing_page;
use crate::inbound::http::state::HttpState;

/// Shared state handed to every worker's app.
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
}

/// Build the application: `/api` routes, landing page, health checks,
/// Swagger UI in debug builds and the plain-text 404 fallback.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;
    let development = http_state.development;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .configure(configure)
        .service(landing_page)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(not_found))
        .wrap(Condition::new(development, expose_internal_errors()))
        .wrap(Trace)
}

/// Construct an Actix HTTP server from the given configuration.
///
/// Loads the store (seeded unless disabled), binds the listener and marks the
/// health state ready.
///
/// # Errors
/// Propagates [`std::io::Error`] when seeding, binding or starting fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(
        build_http_state(&config).map_err(|err| std::io::Error::other(err.to_string()))?,
    );
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    info!(
        bind_addr = %config.bind_addr,
        development = config.development,
        seed_data = config.seed_data,
        "server listening"
    );
    health_state.mark_ready();
    Ok(server)
}
