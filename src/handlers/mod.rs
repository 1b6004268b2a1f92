//! Screen handlers module
//!
//! The flows screens run on top of the services:
//! - Admin boards that manage one resource each
//! - The public catalog used by the public site

pub mod admin;
pub mod public;

// Re-export commonly used handler types
pub use admin::{notice, ActionResult, AdminBoard};
pub use public::{Overview, ProgramSnapshot, PublicCatalog};
