//! /start command plugin.
//!
//! Registers the chat in the directory and sends the welcome menu.

use anyhow::Context;
use teloxide::prelude::*;
use teloxide::types::{Chat, InlineKeyboardButton, InlineKeyboardMarkup, UserId};
use url::Url;

use super::help::HELP_CALLBACK;
use crate::bot::AppState;
use crate::config::Links;
use crate::database::{GroupRecord, UserRecord};
use crate::platform::OutgoingMessage;

const WELCOME_TEXT: &str = "✨ <b>Welcome to Edit Guardian Bot</b> ✨\n\n\
🔹 This bot automatically <b>deletes edited messages</b> in groups.\n\
🔹 Helps keep conversations transparent.\n\n\
✅ Add me to your group and give me the <b>Delete messages</b> permission.";

/// Kind of chat a `/start` came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatScope {
    Private,
    /// Group or supergroup.
    Group { title: String },
    /// Channels and anything else; not recorded.
    Other,
}

impl ChatScope {
    pub fn from_chat(chat: &Chat) -> Self {
        if chat.is_private() {
            Self::Private
        } else if chat.is_group() || chat.is_supergroup() {
            Self::Group {
                title: chat.title().unwrap_or_default().to_string(),
            }
        } else {
            Self::Other
        }
    }
}

/// User who sent `/start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoker {
    pub id: UserId,
    pub full_name: String,
}

/// Everything the onboarding step needs from a `/start` message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartRequest {
    pub chat_id: ChatId,
    pub scope: ChatScope,
    pub invoker: Option<Invoker>,
}

impl StartRequest {
    pub fn from_message(msg: &Message) -> Self {
        Self {
            chat_id: msg.chat.id,
            scope: ChatScope::from_chat(&msg.chat),
            invoker: msg.from.as_ref().map(|user| Invoker {
                id: user.id,
                full_name: user.full_name(),
            }),
        }
    }
}

/// Handle the /start command.
pub async fn start_command(msg: Message, state: AppState) -> anyhow::Result<()> {
    onboard(&state, &StartRequest::from_message(&msg)).await
}

/// Record the chat, then send the welcome menu.
pub async fn onboard(state: &AppState, request: &StartRequest) -> anyhow::Result<()> {
    let username = state.platform.bot_username().await?;

    match (&request.scope, &request.invoker) {
        (ChatScope::Private, Some(user)) => {
            let record = UserRecord::new(user.id.0 as i64, user.full_name.as_str());
            state.directory.upsert_user(&record).await?;
        }
        (ChatScope::Group { title }, _) => {
            let record = GroupRecord::new(request.chat_id.0, title.as_str());
            state.directory.upsert_group(&record).await?;
        }
        _ => {}
    }

    let keyboard = welcome_keyboard(&username, &state.links)?;
    state
        .platform
        .send_message(request.chat_id, OutgoingMessage::html(WELCOME_TEXT).with_keyboard(keyboard))
        .await?;

    Ok(())
}

/// Deep link that opens Telegram's "add to group" picker for the bot.
pub fn add_to_group_url(username: &str) -> anyhow::Result<Url> {
    let raw = format!("https://t.me/{username}?startgroup=true");
    Url::parse(&raw).with_context(|| format!("invalid add-to-group link {raw}"))
}

/// Welcome menu buttons.
pub fn welcome_keyboard(username: &str, links: &Links) -> anyhow::Result<InlineKeyboardMarkup> {
    Ok(InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::url(
            "➕ Add me to your group",
            add_to_group_url(username)?,
        )],
        vec![
            InlineKeyboardButton::url("📢 Channel", links.channel.clone()),
            InlineKeyboardButton::url("💬 Support group", links.support_group.clone()),
        ],
        vec![InlineKeyboardButton::callback("ℹ️ Help", HELP_CALLBACK)],
    ]))
}
