//! State management module
//!
//! Wizard definitions, the drafts screens fill in, and the cached lists they show.

pub mod context;
pub mod scenarios;
pub mod storage;

// Re-export commonly used state components
pub use context::{DraftMode, FormDraft};
pub use scenarios::{
    CrossCheck, FieldRule, InputType, Wizard, WizardManager, WizardStep, CONFERENCE_WIZARD, REGISTRATION_WIZARD,
    WEBINAR_WIZARD,
};
pub use storage::ResourceStore;
