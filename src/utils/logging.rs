//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for EventDesk.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{EventDeskError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file appender when dropped; keep it alive
/// for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| EventDeskError::Config(format!("Invalid log filter: {}", e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "eventdesk.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| EventDeskError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an outgoing API request once its response is known
pub fn log_api_request(method: &str, path: &str, status: u16, duration_ms: u64, request_id: &str) {
    if status >= 400 {
        warn!(
            method = method,
            path = path,
            status = status,
            duration_ms = duration_ms,
            request_id = request_id,
            "API request returned error status"
        );
    } else {
        debug!(
            method = method,
            path = path,
            status = status,
            duration_ms = duration_ms,
            request_id = request_id,
            "API request completed"
        );
    }
}

/// Log a failed operation where it is reported to the user
pub fn log_api_error(resource: &str, error: &EventDeskError, message: &str) {
    error!(
        resource = resource,
        error = %error,
        status = error.status(),
        severity = %error.severity(),
        "{}",
        message
    );
}

/// Log admin actions
pub fn log_admin_action(action: &str, resource: &str, id: Option<&str>, details: Option<&str>) {
    info!(
        action = action,
        resource = resource,
        id = id,
        details = details,
        "Admin action performed"
    );
}

/// Log a public registration
pub fn log_registration(event_kind: &str, event_id: &str, registration_id: &str) {
    info!(
        event_kind = event_kind,
        event_id = event_id,
        registration_id = registration_id,
        "Registration submitted"
    );
}

/// Log file uploads
pub fn log_upload(resource: &str, filename: &str, size_bytes: u64, success: bool) {
    if success {
        info!(resource = resource, filename = filename, size_bytes = size_bytes, "File uploaded");
    } else {
        warn!(resource = resource, filename = filename, size_bytes = size_bytes, "File upload failed");
    }
}
