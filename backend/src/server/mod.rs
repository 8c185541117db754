//! Server construction and middleware wiring.

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::RequestTrace;
use crate::config::AppConfig;
use crate::doc::ApiDoc;
use crate::domain::ports::UserService;
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;

/// Build the Actix application for one worker.
///
/// Swagger UI and the OpenAPI document are mounted only when `debug` is set
/// (see [`AppConfig::debug`]).
pub fn build_app(
    debug: bool,
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
    let mut app = App::new()
        .app_data(http_state)
        .wrap(RequestTrace)
        .configure(configure);

    if debug {
        app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    app
}

/// Construct an Actix HTTP server bound to [`AppConfig::bind_addr`].
///
/// # Parameters
/// - `config`: resolved configuration; its `debug` flag is copied into every
///   worker's app factory.
/// - `users`: user port implementation injected into the handlers.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: AppConfig, users: Arc<dyn UserService>) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::new(users));
    let bind_addr = config.bind_addr();
    let debug = config.debug;

    let server = HttpServer::new(move || build_app(debug, http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "HTTP listener bound");
    Ok(server)
}

#[cfg(test)]
mod tests {
    //! Tests for application and server construction.

    use super::*;
    use crate::domain::ports::FixtureUserService;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::{fixture, rstest};

    #[fixture]
    fn ephemeral_config() -> AppConfig {
        AppConfig {
            port: 0,
            ..AppConfig::default()
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn create_server_binds_ephemeral_port(ephemeral_config: AppConfig) {
        let _server = create_server(ephemeral_config, Arc::new(FixtureUserService))
            .expect("server should bind");
    }

    #[rstest]
    #[case(false, StatusCode::NOT_FOUND)]
    #[case(true, StatusCode::OK)]
    #[actix_web::test]
    async fn openapi_document_is_served_only_in_debug(
        #[case] debug: bool,
        #[case] expected: StatusCode,
    ) {
        let app =
            actix_test::init_service(build_app(debug, web::Data::new(HttpState::default()))).await;
        let req = actix_test::TestRequest::get()
            .uri("/api-docs/openapi.json")
            .to_request();

        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), expected);
    }
}
