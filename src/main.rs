use qa_service::config::AppConfig;
use qa_service::telemetry::init_tracing;
use qa_service::{build_app, run_server, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    init_tracing(config.json_logs);

    let answerer = config.build_answerer()?;
    tracing::info!(
        answerer = answerer.name(),
        timeout_ms = config.timeout_ms,
        "starting qa-service v{}",
        env!("CARGO_PKG_VERSION")
    );

    let app = build_app(AppState::new(answerer));
    run_server(app, config.port).await?;

    Ok(())
}
