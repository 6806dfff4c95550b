use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client};
use serde_json::Value;

use crate::{config::PracticumConfig, domain::FetchError};

/// Source of raw homework status payloads.
///
/// Implementations return `homeworks` newest-first; the poller relies on
/// index 0 being the latest record.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch(&self, from_date: i64) -> Result<Value, FetchError>;
}

#[derive(Clone)]
pub struct PracticumClient {
    http: Client,
    token: String,
    config: PracticumConfig,
}

impl PracticumClient {
    pub fn new(http: Client, token: String, config: PracticumConfig) -> Self {
        Self {
            http,
            token,
            config,
        }
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, FetchError> {
        let response = self
            .http
            .get(&self.config.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        tracing::debug!(target: "practicum", status = status.as_u16(), from_date, "homework API responded");
        if let Some(err) = FetchError::from_status(status) {
            return Err(err);
        }

        response.json::<Value>().await.map_err(FetchError::Decode)
    }
}
