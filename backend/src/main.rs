//! Roster entry-point: loads configuration, initialises logging, and serves
//! the users API.

use std::sync::Arc;

use ortho_config::OrthoConfig;
use tracing::{error, info};

use roster::APP_NAME;
use roster::config::ConfigSettings;
use roster::domain::ports::FixtureUserService;
use roster::server::create_server;
use roster::telemetry::init_tracing;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = ConfigSettings::load().map_err(|e| {
        std::io::Error::other(format!("failed to load configuration: {e}"))
    })?;
    let config = settings.into_config();
    init_tracing(config.debug)?;

    if !config.is_valid() {
        error!(
            port = config.port,
            database_set = !config.database.is_empty(),
            "invalid configuration"
        );
        return Err(std::io::Error::other(
            "invalid configuration: port must be non-zero and database must not be empty",
        ));
    }

    info!(
        port = config.port,
        debug = config.debug,
        "Starting {APP_NAME} server on port {}",
        config.port
    );
    let server = create_server(config, Arc::new(FixtureUserService))
        .inspect_err(|e| error!(error = %e, "failed to start server"))?;
    server
        .await
        .inspect_err(|e| error!(error = %e, "server error"))
}
