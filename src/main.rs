use std::sync::Arc;

use clap::Parser;

use voiceflow::api::{ApiGateway, HttpGateway};
use voiceflow::config::ConsoleConfig;
use voiceflow::console::commands::{App, Cli};
use voiceflow::session::SessionContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = ConsoleConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("  export VOICEFLOW_API_URL=http://localhost:8000/api/v1");
        std::process::exit(1);
    });

    let session = Arc::new(
        SessionContext::load(config.session_path.clone(), config.default_theme)
            .await
            .unwrap_or_else(|e| {
                eprintln!(
                    "Error: Failed to load session from {}: {}",
                    config.session_path.display(),
                    e
                );
                std::process::exit(1);
            }),
    );

    tracing::debug!(
        api = %config.api_base_url,
        session = %config.session_path.display(),
        signed_in = session.is_signed_in().await,
        "Console starting"
    );

    let gateway: Arc<dyn ApiGateway> = Arc::new(HttpGateway::from_config(&config, session.clone()));
    let app = App {
        config,
        session,
        gateway,
    };
    app.run(cli.command).await
}
