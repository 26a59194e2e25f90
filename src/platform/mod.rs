//! Messaging platform seam.
//!
//! Handlers talk to Telegram only through [`ChatPlatform`], so every
//! outbound call returns an explicit [`PlatformError`] kind that the
//! caller has to match on.

mod error;
mod telegram;

use async_trait::async_trait;
use teloxide::types::{ChatId, InlineKeyboardMarkup, MessageId, ParseMode};

pub use error::PlatformError;
pub use telegram::TeloxidePlatform;

/// A message ready to be sent or written over an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMessage {
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub keyboard: Option<InlineKeyboardMarkup>,
}

impl OutgoingMessage {
    /// Plain text, no formatting.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: None,
            keyboard: None,
        }
    }

    /// HTML formatted text.
    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: Some(ParseMode::Html),
            keyboard: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: InlineKeyboardMarkup) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

/// Outbound operations the bot performs on the messaging platform.
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// The bot's public username, without `@`.
    async fn bot_username(&self) -> Result<String, PlatformError>;

    /// Send a new message to a chat.
    async fn send_message(
        &self,
        chat_id: ChatId,
        message: OutgoingMessage,
    ) -> Result<(), PlatformError>;

    /// Delete one message from a chat.
    async fn delete_message(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
    ) -> Result<(), PlatformError>;

    /// Replace the text of an existing message in place.
    async fn edit_message(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        message: OutgoingMessage,
    ) -> Result<(), PlatformError>;

    /// Acknowledge a callback query so the client stops its spinner.
    async fn answer_callback(&self, query_id: &str) -> Result<(), PlatformError>;
}
