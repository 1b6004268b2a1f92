//! EventDesk
//!
//! Data layer for an organization's event program. This library provides
//! REST clients for conferences, webinars, workshops, registrations and
//! research, payload normalization, multi-step form wizards, client-side
//! filters and the admin and public flows built on them.

pub mod config;
pub mod filters;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod normalize;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EventDeskError, Result};

// Re-export main components for easy access
pub use handlers::{AdminBoard, PublicCatalog};
pub use services::ServiceFactory;
pub use state::{FormDraft, ResourceStore, WizardManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
