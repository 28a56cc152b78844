use service_core::observability::init_tracing;
use shadowtrace_backend::config::BackendConfig;
use shadowtrace_backend::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = BackendConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(&config.common.log_level);

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
