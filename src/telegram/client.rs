use super::types::{TelegramConfig, TelegramMessage, TelegramResponse};
use super::Notifier;
use crate::{config::AppConfig, errors::NotifyError};
use reqwest::Client;

pub struct TelegramClient {
    client: Client,
    config: TelegramConfig,
}

impl TelegramClient {
    pub fn new(config: &AppConfig) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            config: TelegramConfig::from_app_config(config),
        })
    }

    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), NotifyError> {
        let message = TelegramMessage {
            chat_id: chat_id.to_string(),
            text: text.to_string(),
            disable_web_page_preview: Some(true),
        };

        let response = self
            .client
            .post(self.config.send_message_url())
            .json(&message)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(NotifyError::Api(format!("{status}: {error_text}")));
        }

        let telegram_response: TelegramResponse<serde_json::Value> = response.json().await?;

        if !telegram_response.ok {
            let error_msg = telegram_response
                .description
                .unwrap_or_else(|| "Unknown Telegram API error".to_string());
            return Err(NotifyError::Api(error_msg));
        }

        if telegram_response.result.is_some() {
            Ok(())
        } else {
            Err(NotifyError::Api("No result in Telegram response".to_string()))
        }
    }
}

impl Notifier for TelegramClient {
    async fn send_text(&self, text: &str) -> Result<(), NotifyError> {
        self.send_message(&self.config.chat_id, text).await
    }
}
