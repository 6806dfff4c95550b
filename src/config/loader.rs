use std::{env, time::Duration};

use url::Url;

use super::env::{
    AppConfig, ConfigError, DirectoryConfig, LoggingConfig, PollerConfig, PracticumConfig,
    DEFAULT_ENDPOINT, DEFAULT_LOG_FILTER, DEFAULT_RETRY_PERIOD,
};

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

impl AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let practicum_token = required("PRACTICUM_TOKEN")?;
        let telegram_token = required("TELEGRAM_TOKEN")?;
        let telegram_chat_id = required("TELEGRAM_CHAT_ID")?
            .trim()
            .parse::<i64>()
            .map_err(|err| ConfigError::Invalid {
                key: "TELEGRAM_CHAT_ID",
                reason: err.to_string(),
            })?;

        let endpoint = optional("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Url::parse(&endpoint).map_err(|err| ConfigError::Invalid {
            key: "PRACTICUM_ENDPOINT",
            reason: err.to_string(),
        })?;

        let retry_period = match optional("RETRY_PERIOD_SECS") {
            Some(raw) => parse_retry_period(&raw)?,
            None => DEFAULT_RETRY_PERIOD,
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum: PracticumConfig { endpoint },
            poller: PollerConfig { retry_period },
        })
    }
}

impl DirectoryConfig {
    pub fn from_env() -> Self {
        Self {
            logs_dir: optional("LOGS_DIR").unwrap_or_else(|| "logs".to_string()),
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            level: optional("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    optional(key).ok_or(ConfigError::Missing(key))
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_retry_period(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        Ok(_) => Err(ConfigError::Invalid {
            key: "RETRY_PERIOD_SECS",
            reason: "must be greater than zero".to_string(),
        }),
        Err(err) => Err(ConfigError::Invalid {
            key: "RETRY_PERIOD_SECS",
            reason: err.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_period_accepts_positive_seconds() {
        assert_eq!(parse_retry_period(" 30 ").unwrap(), Duration::from_secs(30));
    }

    #[test]
    fn retry_period_rejects_zero_and_garbage() {
        assert!(matches!(
            parse_retry_period("0"),
            Err(ConfigError::Invalid { key: "RETRY_PERIOD_SECS", .. })
        ));
        assert!(parse_retry_period("ten").is_err());
    }

    #[test]
    fn missing_error_names_the_variable() {
        let err = ConfigError::Missing("TELEGRAM_TOKEN");
        assert_eq!(
            err.to_string(),
            "missing required environment variable: TELEGRAM_TOKEN"
        );
    }
}
