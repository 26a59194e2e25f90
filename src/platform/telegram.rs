//! [`ChatPlatform`] backed by the Telegram Bot API.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::MessageId;
use tokio::sync::OnceCell;
use tracing::debug;

use super::{ChatPlatform, OutgoingMessage, PlatformError};

/// Telegram implementation via teloxide.
pub struct TeloxidePlatform {
    bot: Bot,
    username: OnceCell<String>,
}

impl TeloxidePlatform {
    /// Wrap a bot. A configured username skips the `getMe` lookup.
    pub fn new(bot: Bot, username: Option<String>) -> Self {
        let cell = match username {
            Some(name) => OnceCell::new_with(Some(name)),
            None => OnceCell::new(),
        };

        Self {
            bot,
            username: cell,
        }
    }
}

#[async_trait]
impl ChatPlatform for TeloxidePlatform {
    async fn bot_username(&self) -> Result<String, PlatformError> {
        let name = self
            .username
            .get_or_try_init(|| async {
                let me = self.bot.get_me().await?;
                debug!("Resolved bot username via getMe: @{}", me.username());
                Ok::<_, PlatformError>(me.username().to_string())
            })
            .await?;

        Ok(name.clone())
    }

    async fn send_message(
        &self,
        chat_id: ChatId,
        message: OutgoingMessage,
    ) -> Result<(), PlatformError> {
        let mut request = self.bot.send_message(chat_id, message.text);
        if let Some(mode) = message.parse_mode {
            request = request.parse_mode(mode);
        }
        if let Some(keyboard) = message.keyboard {
            request = request.reply_markup(keyboard);
        }

        request.await?;
        Ok(())
    }

    async fn delete_message(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
    ) -> Result<(), PlatformError> {
        self.bot.delete_message(chat_id, message_id).await?;
        Ok(())
    }

    async fn edit_message(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        message: OutgoingMessage,
    ) -> Result<(), PlatformError> {
        let mut request = self.bot.edit_message_text(chat_id, message_id, message.text);
        if let Some(mode) = message.parse_mode {
            request = request.parse_mode(mode);
        }
        if let Some(keyboard) = message.keyboard {
            request = request.reply_markup(keyboard);
        }

        request.await?;
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str) -> Result<(), PlatformError> {
        self.bot.answer_callback_query(query_id).await?;
        Ok(())
    }
}
