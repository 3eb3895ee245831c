use anyhow::{Context, Result};
use campusdesk::backend::Clients;
use campusdesk::config::Config;
use campusdesk::logger::Logger;
use campusdesk::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        return Config::generate_default_config(path);
    }

    let config = Config::load().context("Failed to load configuration")?;

    let logger = Logger::from_config(&config.logging)?;
    logger.install()?;

    let clients = Clients::http(&config.api)?;

    ui::run_app(config, clients, logger).await
}
