mod app;
mod config;
mod domain;
mod infrastructure;
mod practicum;
mod tasks;
mod telegram;

use std::process;

use anyhow::Result;
use config::{DirectoryConfig, LoggingConfig};
use infrastructure::{directories, logging, shutdown};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let paths = directories::ensure_directories(&DirectoryConfig::from_env())?;
    logging::init_tracing(&LoggingConfig::from_env(), &paths)?;

    let config = match config::load_config() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(
                target: "config",
                severity = "CRITICAL",
                error = %err,
                "required configuration is missing; exiting"
            );
            logging::flush();
            process::exit(1);
        }
    };

    let (shutdown, _) = shutdown::Shutdown::new();
    shutdown::install_signal_handlers(shutdown.clone());

    let app = app::HomeworkBotApp::initialize(config, shutdown)?;
    app.run().await
}
