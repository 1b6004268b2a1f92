//! Logging middleware
//!
//! Tracks each backend request from send to response: a request id that is
//! also sent as `X-Request-Id`, elapsed time, and the final status.

use std::time::Instant;
use reqwest::RequestBuilder;
use tracing::debug;
use crate::utils::helpers::generate_request_id;
use crate::utils::logging::log_api_request;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Logging middleware for backend requests
#[derive(Clone, Debug)]
pub struct RequestLogger {
    log_requests: bool,
}

/// An in-flight request being timed
#[derive(Debug)]
pub struct RequestTrace {
    pub request_id: String,
    method: String,
    path: String,
    started: Instant,
}

impl RequestLogger {
    /// Create a new RequestLogger instance
    pub fn new(log_requests: bool) -> Self {
        Self { log_requests }
    }

    /// Start timing a request and tag it with a fresh request id
    pub fn start(&self, method: &str, path: &str, request: RequestBuilder) -> (RequestBuilder, RequestTrace) {
        let request_id = generate_request_id();
        if self.log_requests {
            debug!(method = method, path = path, request_id = %request_id, "Sending API request");
        }
        let request = request.header(REQUEST_ID_HEADER, request_id.as_str());
        let trace = RequestTrace {
            request_id,
            method: method.to_string(),
            path: path.to_string(),
            started: Instant::now(),
        };
        (request, trace)
    }

    /// Record the outcome; returns elapsed milliseconds
    pub fn finish(&self, trace: RequestTrace, status: u16) -> u64 {
        let elapsed = trace.started.elapsed().as_millis() as u64;
        if self.log_requests {
            log_api_request(&trace.method, &trace.path, status, elapsed, &trace.request_id);
        }
        elapsed
    }
}

impl Default for RequestLogger {
    fn default() -> Self {
        Self::new(true)
    }
}
