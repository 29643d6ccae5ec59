use std::io;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use heartwise::adapters::{Console, Control, FileSessionStore, InMemorySessionStore, MockPredictionProvider};
use heartwise::application::PageFlowController;
use heartwise::config::{AppConfig, SessionBackend};
use heartwise::ports::{PredictionProvider, SessionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    init_tracing(&config)?;

    let store: Arc<dyn SessionStore> = match config.session.backend {
        SessionBackend::Memory => Arc::new(InMemorySessionStore::new()),
        SessionBackend::File => Arc::new(FileSessionStore::new(config.session.path.clone())),
    };
    let provider: Arc<dyn PredictionProvider> =
        Arc::new(MockPredictionProvider::new().with_delay(config.prediction.delay()));

    info!(
        backend = ?config.session.backend,
        delay_ms = config.prediction.delay_ms,
        "Heartwise starting"
    );

    let flow = PageFlowController::new(store, provider, config.features.guard_policy());
    let mut console = Console::new(flow, io::stdout(), config.features.show_redirect_notices);
    console.greet()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read input")? {
        if console.run_line(&line).await? == Control::Quit {
            break;
        }
    }

    info!("Heartwise stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.runtime.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    let result = if config.is_production() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}
