//! Test context for unified test setup
//!
//! Starts the mock backend and builds settings and services pointing at it.

use eventdesk::config::Settings;
use eventdesk::normalize::FieldCase;
use eventdesk::services::ServiceFactory;
use tempfile::TempDir;

use super::backend_mock::BackendMockServer;

/// Configuration for a test context
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub wire_case: FieldCase,
    pub token: Option<String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            wire_case: FieldCase::Snake,
            token: Some("test-token".to_string()),
        }
    }
}

/// Unified test context that manages all test components
pub struct TestContext {
    pub backend: BackendMockServer,
    pub settings: Settings,
    pub services: ServiceFactory,
    pub temp_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with default configuration
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::new_with_config(TestConfig::default()).await
    }

    /// Create a new test context with custom configuration
    pub async fn new_with_config(config: TestConfig) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let temp_dir = tempfile::tempdir()?;
        let backend = BackendMockServer::new().await;

        let mut settings = Settings::for_base_url(backend.uri());
        settings.api.wire_case = config.wire_case;
        settings.api.timeout_seconds = 5;
        settings.auth.token = config.token;
        settings.uploads.max_file_size_mb = 1;

        let services = ServiceFactory::new(&settings)?;

        Ok(Self {
            backend,
            settings,
            services,
            temp_dir,
        })
    }

    /// Write a file into the context's temp directory
    pub fn write_file(&self, name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}
