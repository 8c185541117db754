//! Domain ports and supporting types for the hexagonal boundary.

mod user_service;

#[cfg(test)]
pub use user_service::MockUserService;
pub use user_service::{FixtureUserService, UserService};
