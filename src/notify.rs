//! Telegram delivery for status and failure notifications.

use crate::error::NotifyError;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::info;

#[cfg(test)]
use mockall::automock;

/// Outbound channel for chat notifications
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a plain-text message to the configured chat.
    async fn notify(&self, text: &str) -> Result<(), NotifyError>;
}

/// Sends messages to a fixed chat through the Telegram Bot API
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    #[must_use]
    pub const fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        self.bot
            .send_message(self.chat_id, text)
            .await
            .map_err(|e| NotifyError(e.to_string()))?;
        info!("Message sent to chat {}", self.chat_id);
        Ok(())
    }
}
