use std::io;

use anyhow::Result;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{
    config::{env::DEFAULT_LOG_FILTER, LoggingConfig},
    infrastructure::directories::{ResolvedPaths, LOG_FILE_NAME},
};

static INIT: OnceCell<()> = OnceCell::new();
static GUARD: Mutex<Option<WorkerGuard>> = parking_lot::const_mutex(None);

pub fn init_tracing(config: &LoggingConfig, paths: &ResolvedPaths) -> Result<()> {
    INIT.get_or_try_init::<_, anyhow::Error>(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let file_appender = tracing_appender::rolling::never(&paths.logs_dir, LOG_FILE_NAME);
        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
        *GUARD.lock() = Some(guard);

        let console_layer = fmt::layer()
            .with_writer(io::stdout)
            .with_target(true)
            .with_ansi(true);

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_target(true)
            .with_ansi(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()?;

        tracing::info!(log_file = %paths.log_file.display(), "tracing initialized");
        Ok(())
    })?;
    Ok(())
}

/// Flushes the file writer. Call before `process::exit`, which skips destructors.
pub fn flush() {
    drop(GUARD.lock().take());
}
