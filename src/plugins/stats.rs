//! /stats command plugin.

use teloxide::prelude::*;
use teloxide::types::UserId;

use super::NOT_AUTHORIZED;
use crate::bot::AppState;
use crate::database::ChatKind;
use crate::platform::OutgoingMessage;

/// Handle the /stats command.
pub async fn stats_command(msg: Message, state: AppState) -> anyhow::Result<()> {
    let caller = msg.from.as_ref().map(|u| u.id);
    stats(&state, msg.chat.id, caller).await
}

/// Reply with directory sizes. Admins only.
pub async fn stats(state: &AppState, reply_to: ChatId, caller: Option<UserId>) -> anyhow::Result<()> {
    let text = if caller.is_some_and(|id| state.is_admin(id.0)) {
        let users = state.directory.count(ChatKind::User).await?;
        let groups = state.directory.count(ChatKind::Group).await?;
        format!("📊 Known chats\n\nUsers: {users}\nGroups: {groups}")
    } else {
        NOT_AUTHORIZED.to_string()
    };

    state
        .platform
        .send_message(reply_to, OutgoingMessage::plain(text))
        .await?;
    Ok(())
}
