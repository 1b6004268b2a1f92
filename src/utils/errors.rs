//! Error handling for EventDesk
//!
//! This module defines the main error types used throughout the crate
//! and the static user-facing messages that screens display on failure.

use std::collections::BTreeMap;
use thiserror::Error;

/// Main error type for EventDesk
#[derive(Error, Debug)]
pub enum EventDeskError {
    #[error("Backend API error: {0}")]
    Api(#[from] ApiError),

    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid step transition: {from} -> {to}")]
    InvalidStepTransition { from: String, to: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Backend API specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API timeout")]
    Timeout,

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("API service unavailable")]
    ServiceUnavailable,

    /// Non-success status; `message` is the backend's own text or `HTTP <status>`
    #[error("{message}")]
    Status { status: u16, message: String },
}

/// File upload errors raised before any request is made
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("File type not allowed: {0}")]
    UnsupportedType(String),

    #[error("File too large: {size} (limit {limit})")]
    TooLarge { size: String, limit: String },

    #[error("File is empty")]
    Empty,
}

/// Per-field form validation errors, keyed by field name
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{}", summarize(.fields))]
pub struct ValidationErrors {
    pub fields: BTreeMap<String, String>,
}

fn summarize(fields: &BTreeMap<String, String>) -> String {
    fields
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field; the first error per field wins
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn into_result(self) -> std::result::Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Result type alias for EventDesk operations
pub type Result<T> = std::result::Result<T, EventDeskError>;

impl EventDeskError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            EventDeskError::Api(ApiError::Status { status, .. }) => *status >= 500 || *status == 429,
            EventDeskError::Api(_) => true,
            EventDeskError::Upload(_) => false,
            EventDeskError::Config(_) => false,
            EventDeskError::NotFound { .. } => false,
            EventDeskError::Validation(_) => false,
            EventDeskError::InvalidStepTransition { .. } => false,
            EventDeskError::Http(_) => true,
            EventDeskError::Serialization(_) => false,
            EventDeskError::Io(_) => true,
            EventDeskError::UrlParse(_) => false,
            EventDeskError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EventDeskError::Config(_) => ErrorSeverity::Critical,
            EventDeskError::UrlParse(_) => ErrorSeverity::Critical,
            EventDeskError::NotFound { .. } => ErrorSeverity::Warning,
            EventDeskError::Api(ApiError::Status { status, .. }) if *status < 500 => ErrorSeverity::Warning,
            EventDeskError::Validation(_) => ErrorSeverity::Info,
            EventDeskError::InvalidInput(_) => ErrorSeverity::Info,
            EventDeskError::Upload(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// HTTP status reported by the backend, if the failure carried one
    pub fn status(&self) -> Option<u16> {
        match self {
            EventDeskError::Api(ApiError::Status { status, .. }) => Some(*status),
            EventDeskError::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// What a screen was trying to do when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Create,
    Update,
    Delete,
    UpdateStatus,
    ToggleFeatured,
    LoadAnalytics,
    LoadRegistrations,
    Register,
    Upload,
}

impl Action {
    fn verb(&self) -> &'static str {
        match self {
            Action::Load => "load",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::UpdateStatus => "update status of",
            Action::ToggleFeatured => "update featured flag of",
            Action::LoadAnalytics => "load analytics for",
            Action::LoadRegistrations => "load registrations for",
            Action::Register => "register for",
            Action::Upload => "upload image for",
        }
    }
}

/// Static user-facing message for a failed action, e.g. "Failed to load conferences"
pub fn failure_message(action: Action, subject: &str) -> String {
    format!("Failed to {} {}", action.verb(), subject)
}

/// A failure as shown to the user: a static message plus the underlying cause
#[derive(Error, Debug)]
#[error("{message}")]
pub struct FailureNotice {
    pub message: String,
    #[source]
    pub cause: EventDeskError,
}

impl FailureNotice {
    pub fn new(action: Action, subject: &str, cause: EventDeskError) -> Self {
        Self {
            message: failure_message(action, subject),
            cause,
        }
    }
}
