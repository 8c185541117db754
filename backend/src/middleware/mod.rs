//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns such
//! as request correlation and logging.

pub mod trace;

pub use trace::RequestTrace;
