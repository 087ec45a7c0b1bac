//! AttractionBuddy SMS Bot
//!
//! Main application entry point

use anyhow::Context;
use tracing::info;

use AttractionBuddy::{
    config::Settings,
    services::ServiceFactory,
    state::AppContext,
    utils::logging,
    Poller,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;

    if std::env::args().any(|arg| arg == "--print-config") {
        println!("{}", settings.to_toml().context("Failed to render configuration")?);
        return Ok(());
    }

    settings.validate().context("Invalid configuration")?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging).context("Failed to initialize logging")?;

    info!("Starting {}...", AttractionBuddy::info());

    // Initialize services
    info!("Initializing services...");
    let services = ServiceFactory::new(&settings).context("Failed to initialize services")?;
    let context = AppContext::new(settings, services);

    info!("AttractionBuddy is ready!");
    Poller::new(context).run().await.context("Polling loop failed")?;

    info!("AttractionBuddy has been shut down.");
    Ok(())
}
