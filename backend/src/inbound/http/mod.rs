//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod state;
pub mod users;

pub use error::{ApiResult, ErrorBody};

/// Register every HTTP resource on an Actix application or scope.
///
/// Handlers read [`state::HttpState`] from application data, which the caller
/// must register.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(users::users_resource())
        .service(health::health_resource());
}
