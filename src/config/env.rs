use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
// Debug for our own targets, quieter for the HTTP stack.
pub const DEFAULT_LOG_FILTER: &str = "debug,hyper=info,hyper_util=info,reqwest=info,rustls=info,h2=info";
pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: i64,
    pub practicum: PracticumConfig,
    pub poller: PollerConfig,
}

#[derive(Debug, Clone)]
pub struct PracticumConfig {
    pub endpoint: String,
}

#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub retry_period: Duration,
}

/// Resolved before the secrets so that a missing secret can still be logged to file.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub logs_dir: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
