//! Data models module
//!
//! Canonical (camelCase) shapes of every resource, plus the request bodies
//! sent to the backend. Payloads are turned into these by `crate::normalize`.

pub mod common;
pub mod conference;
pub mod webinar;
pub mod registration;
pub mod research;
pub mod workshop;

// Re-export commonly used models
pub use common::{Speaker, Session, UploadedFile, AnalyticsReport, Identified};
pub use conference::{Conference, ConferenceFees, ConferenceType, ConferenceStatus, CreateConferenceRequest, UpdateConferenceRequest};
pub use webinar::{Webinar, WebinarStatus, WebinarType, CreateWebinarRequest, UpdateWebinarRequest};
pub use registration::{Registration, Attendee, RegistrationType, PaymentStatus, EventRef, CreateRegistrationRequest, UpdateRegistrationRequest};
pub use research::{ResearchProject, Publication, ResearchPaper, ResearchProjectRequest, PublicationRequest};
pub use workshop::{Workshop, CreateWorkshopRequest, UpdateWorkshopRequest};
