//! Help menu.
//!
//! The welcome menu's help button rewrites that message with the help text.

use teloxide::prelude::*;
use teloxide::types::MessageId;

use crate::bot::AppState;
use crate::platform::{ChatPlatform, OutgoingMessage};

/// Callback data carried by the help button.
pub const HELP_CALLBACK: &str = "help";

pub const HELP_TEXT: &str = "⚙️ <b>Help menu</b>\n\n\
🔹 <b>Message guardian:</b> if someone edits a message in a group, the bot deletes it.\n\
🔹 <b>Broadcast:</b> only the admin can broadcast messages to all users and groups.\n\n\
✅ Make sure the bot has the <b>Delete messages</b> right in your groups.";

/// Whether callback data belongs to the help button.
pub fn is_help_callback(data: Option<&str>) -> bool {
    data.is_some_and(|d| d.starts_with(HELP_CALLBACK))
}

/// A press of the help button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpRequest {
    pub query_id: String,
    /// Message holding the button, if Telegram still exposes it.
    pub origin: Option<(ChatId, MessageId)>,
}

/// Handle help callback queries.
pub async fn help_callback(q: CallbackQuery, state: AppState) -> anyhow::Result<()> {
    let request = HelpRequest {
        query_id: q.id.clone(),
        origin: q.message.as_ref().map(|m| (m.chat().id, m.id())),
    };

    show_help(state.platform.as_ref(), &request).await
}

/// Answer the callback, then replace the menu with the help text.
pub async fn show_help(platform: &dyn ChatPlatform, request: &HelpRequest) -> anyhow::Result<()> {
    platform.answer_callback(&request.query_id).await?;

    if let Some((chat_id, message_id)) = request.origin {
        platform
            .edit_message(chat_id, message_id, OutgoingMessage::html(HELP_TEXT))
            .await?;
    }

    Ok(())
}
