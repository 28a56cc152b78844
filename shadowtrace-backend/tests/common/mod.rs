use service_core::config::Config as CoreConfig;
use shadowtrace_backend::config::{BackendConfig, GoogleConfig, ModelConfig};
use shadowtrace_backend::services::providers::TextProvider;
use shadowtrace_backend::startup::Application;
use std::sync::Arc;
use std::time::Duration;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the app with a configured credential and the given provider.
    pub async fn spawn(provider: Arc<dyn TextProvider>) -> Self {
        Self::spawn_with_api_key("test-api-key", provider).await
    }

    /// Spawn the app with no credential configured.
    pub async fn spawn_without_credential(provider: Arc<dyn TextProvider>) -> Self {
        Self::spawn_with_api_key("", provider).await
    }

    async fn spawn_with_api_key(api_key: &str, provider: Arc<dyn TextProvider>) -> Self {
        // Use random port for testing (port 0)
        let config = BackendConfig {
            common: CoreConfig {
                port: 0,
                log_level: "info".to_string(),
            },
            models: ModelConfig {
                text_model: "gemini-1.5-flash".to_string(),
            },
            google: GoogleConfig {
                api_key: api_key.to_string(),
            },
        };

        let app = Application::with_provider(config, provider)
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp { address }
    }
}
