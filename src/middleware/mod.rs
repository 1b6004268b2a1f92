//! Middleware module
//!
//! Cross-cutting concerns applied to every backend request.

pub mod auth;
pub mod logging;

pub use auth::AuthProvider;
pub use logging::{RequestLogger, RequestTrace, REQUEST_ID_HEADER};
