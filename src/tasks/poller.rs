use std::{sync::Arc, time::Duration};

use chrono::Utc;
use tokio::time::sleep;

use crate::{
    domain::{NotificationMessage, PollError},
    infrastructure::shutdown::ShutdownListener,
    practicum::{
        response::{extract_status, validate_response},
        StatusSource,
    },
    telegram::Notifier,
};

const FAILURE_PREFIX: &str = "Bot failure: ";

#[derive(Debug, Clone, Default)]
pub struct PollState {
    pub last_poll_timestamp: i64,
    pub last_notified_message: Option<String>,
    pub last_reported_error: Option<String>,
}

pub struct HomeworkPoller {
    source: Arc<dyn StatusSource>,
    notifier: Arc<dyn Notifier>,
    retry_period: Duration,
    state: PollState,
}

impl HomeworkPoller {
    pub fn new(
        source: Arc<dyn StatusSource>,
        notifier: Arc<dyn Notifier>,
        retry_period: Duration,
        from_date: i64,
    ) -> Self {
        Self {
            source,
            notifier,
            retry_period,
            state: PollState {
                last_poll_timestamp: from_date,
                last_notified_message: None,
                last_reported_error: None,
            },
        }
    }

    /// Polls until shutdown. A failing cycle never ends the loop.
    pub async fn run(mut self, mut shutdown: ShutdownListener) {
        tracing::info!(
            target: "poller",
            retry_secs = self.retry_period.as_secs(),
            from_date = self.state.last_poll_timestamp,
            "poller started"
        );
        loop {
            if shutdown.is_triggered() {
                break;
            }

            self.run_cycle().await;

            tokio::select! {
                _ = sleep(self.retry_period) => {}
                _ = shutdown.notified() => break,
            }
            self.advance_timestamp();
        }
        tracing::info!(target: "poller", "poller stopped");
    }

    pub async fn run_cycle(&mut self) {
        match self.poll_once().await {
            Ok(Some(message)) => {
                self.state.last_reported_error = None;
                self.dispatch_status(message.into_string()).await;
            }
            Ok(None) => {
                self.state.last_reported_error = None;
                tracing::debug!(target: "poller", "no new status");
            }
            Err(err) => {
                tracing::error!(target: "poller", error = %err, "poll cycle failed");
                self.dispatch_error(format!("{FAILURE_PREFIX}{err}")).await;
            }
        }
    }

    // The window always moves forward, even after a failed cycle.
    pub fn advance_timestamp(&mut self) {
        self.state.last_poll_timestamp = Utc::now().timestamp();
    }

    async fn poll_once(&self) -> Result<Option<NotificationMessage>, PollError> {
        let raw = self.source.fetch(self.state.last_poll_timestamp).await?;
        let homeworks = validate_response(&raw)?;
        match homeworks.first() {
            Some(latest) => extract_status(latest).map(Some),
            None => Ok(None),
        }
    }

    async fn dispatch_status(&mut self, text: String) {
        if self.state.last_notified_message.as_deref() == Some(text.as_str()) {
            tracing::debug!(target: "poller", "status unchanged since last notification; skipping");
            return;
        }
        self.notifier.notify(&text).await;
        self.state.last_notified_message = Some(text);
    }

    // Failures never touch the status slot.
    async fn dispatch_error(&mut self, text: String) {
        if self.state.last_reported_error.as_deref() == Some(text.as_str()) {
            tracing::debug!(target: "poller", "same failure already reported; skipping");
            return;
        }
        self.notifier.notify(&text).await;
        self.state.last_reported_error = Some(text);
    }
}
