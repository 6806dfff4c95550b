use async_trait::async_trait;
use teloxide::prelude::*;

pub type DeliveryError = teloxide::RequestError;

/// Delivery channel for status updates.
///
/// `notify` never fails: a broken channel must not stop polling.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str);
}

pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    pub fn new(bot: Bot, chat_id: i64) -> Self {
        Self {
            bot,
            chat_id: ChatId(chat_id),
        }
    }

    async fn deliver(&self, text: &str) -> Result<(), DeliveryError> {
        self.bot.send_message(self.chat_id, text).await?;
        Ok(())
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) {
        match self.deliver(text).await {
            Ok(()) => tracing::debug!(
                target: "telegram",
                chat_id = self.chat_id.0,
                text,
                "message delivered"
            ),
            Err(err) => tracing::error!(
                target: "telegram",
                chat_id = self.chat_id.0,
                error = %err,
                "failed to send message to Telegram"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use reqwest::Url;
    use tokio::net::TcpListener;

    use super::*;

    async fn unreachable_bot() -> Bot {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let api_url = Url::parse(&format!("http://{}/", listener.local_addr().unwrap())).unwrap();
        drop(listener);
        Bot::new("0:test-token").set_api_url(api_url)
    }

    #[tokio::test]
    async fn delivery_failure_surfaces_from_deliver() {
        let notifier = TelegramNotifier::new(unreachable_bot().await, 42);
        assert!(notifier.deliver("status changed").await.is_err());
    }

    #[tokio::test]
    async fn notify_absorbs_delivery_failure() {
        let notifier = TelegramNotifier::new(unreachable_bot().await, 42);
        tokio::time::timeout(Duration::from_secs(10), notifier.notify("status changed"))
            .await
            .expect("notify should return after a failed delivery");
    }
}
