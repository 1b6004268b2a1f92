//! Mock event backend for testing
//!
//! A wiremock server standing in for the REST backend. Each helper mounts one
//! endpoint with a canned JSON answer.

use serde_json::{json, Value};
use wiremock::{
    matchers::{any, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock backend server
pub struct BackendMockServer {
    pub server: MockServer,
}

impl BackendMockServer {
    /// Start a new mock backend
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Answer `verb path` with `status` and a JSON body
    pub async fn mock_json(&self, verb: &str, endpoint: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer `GET path` with 200 and the body
    pub async fn mock_get(&self, endpoint: &str, body: Value) {
        self.mock_json("GET", endpoint, 200, body).await;
    }

    /// Answer `verb path` with an empty 204
    pub async fn mock_no_content(&self, verb: &str, endpoint: &str) {
        Mock::given(method(verb))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(204))
            .mount(&self.server)
            .await;
    }

    /// Answer `verb path` with an error status and a `{message}` body
    pub async fn mock_error(&self, verb: &str, endpoint: &str, status: u16, message: &str) {
        self.mock_json(verb, endpoint, status, json!({ "message": message })).await;
    }

    /// Answer every request with a 500 HTML page
    pub async fn mock_outage(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>Internal Server Error</html>"))
            .mount(&self.server)
            .await;
    }

    /// Requests the server has seen so far
    pub async fn received(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Drop every mounted mock
    pub async fn reset(&self) {
        self.server.reset().await;
    }
}
