use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use reqwest::Client;
use teloxide::Bot;

use crate::{
    config::AppConfig,
    infrastructure::shutdown::Shutdown,
    practicum::PracticumClient,
    tasks::poller::HomeworkPoller,
    telegram::TelegramNotifier,
};

pub struct HomeworkBotApp {
    poller: HomeworkPoller,
    shutdown: Shutdown,
}

impl HomeworkBotApp {
    pub fn initialize(config: AppConfig, shutdown: Shutdown) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(format!("homework-status-bot/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        let practicum = Arc::new(PracticumClient::new(
            http_client,
            config.practicum_token.clone(),
            config.practicum.clone(),
        ));

        let bot = Bot::new(&config.telegram_token);
        let notifier = Arc::new(TelegramNotifier::new(bot, config.telegram_chat_id));

        let poller = HomeworkPoller::new(
            practicum,
            notifier,
            config.poller.retry_period,
            Utc::now().timestamp(),
        );

        Ok(Self { poller, shutdown })
    }

    pub async fn run(self) -> Result<()> {
        let HomeworkBotApp { poller, shutdown } = self;

        tracing::info!("homework status bot started");
        poller.run(shutdown.subscribe()).await;
        tracing::info!("homework status bot stopped");
        Ok(())
    }
}
