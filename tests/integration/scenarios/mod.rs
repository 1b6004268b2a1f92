//! End-to-end flows through wizards, handlers and the backend

pub mod webinar_wizard_test;
