//! Roster: a minimal users HTTP service backed by fixture data.
//!
//! Layout follows a hexagonal split:
//! - [`domain`]: users, errors and the [`domain::ports::UserService`] port.
//! - [`inbound`]: Actix handlers translating HTTP into port calls.
//! - [`middleware`]: request correlation and logging.
//! - [`config`] and [`server`]: start-up configuration and wiring.
//! - [`telemetry`]: JSON log subscriber.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod server;
pub mod telemetry;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::RequestTrace;

/// Service name reported in start-up logs.
pub const APP_NAME: &str = "roster";
