//! EventDesk
//!
//! Loads the program from the configured backend and prints a summary

use tracing::{info, warn};

use eventdesk::{
    config::Settings,
    handlers::PublicCatalog,
    services::ServiceFactory,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Keep the guard so the file appender flushes on exit
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {} against {}", eventdesk::info(), settings.api.base_url);

    let services = ServiceFactory::new(&settings)?;
    let catalog = PublicCatalog::new(services);

    let overview = catalog.overview().await;
    for failure in overview.failures() {
        warn!("{}", failure);
    }

    for line in overview.snapshot().lines() {
        println!("{}", line);
    }

    Ok(())
}
