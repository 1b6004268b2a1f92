//! Resource service tests against the mock backend

pub mod conference_test;
pub mod registration_test;
pub mod webinar_test;
pub mod workshop_test;
