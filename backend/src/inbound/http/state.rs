//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FixtureUserService, UserService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User operations backing `/users`.
    pub users: Arc<dyn UserService>,
}

impl HttpState {
    /// Bundle the given port implementations.
    pub fn new(users: Arc<dyn UserService>) -> Self {
        Self { users }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureUserService))
    }
}
