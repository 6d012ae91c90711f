//! Dashboard API server entry point.

use anyhow::Result;
use dashboard::config::Config;
use dashboard::logger::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    // Write a default config file and exit
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;

    let logger = Logger::from_config(&config.logging)?;
    logger.install()?;

    if config.integrations.weather.api_key().is_none() {
        log::warn!(
            "{} is not set; /api/weather will report an error",
            config.integrations.weather.api_key_env
        );
    }

    dashboard::server::serve(config, logger).await
}
