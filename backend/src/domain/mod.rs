//! Domain primitives and ports.
//!
//! Purpose: Define strongly typed domain entities used by the HTTP adapter.
//! Document invariants and serialisation contracts (serde) in each type's
//! Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport agnostic failure.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - User (alias to `user::User`) — user identity and contact data.
//! - UserValidationError — rejected field mutation.

pub mod error;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::user::{User, UserId, UserValidationError};
