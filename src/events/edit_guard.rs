//! Edit guard.
//!
//! Deletes every edited message and warns its author. Failures are logged
//! and swallowed so a single bad edit never affects the dispatcher.

use teloxide::types::{ChatId, Message, MessageId, UserId};
use tracing::{debug, info, warn};

use crate::platform::{ChatPlatform, OutgoingMessage, PlatformError};
use crate::utils::mention_html;

/// Author of an edited message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: UserId,
    pub first_name: String,
}

/// The parts of an edit notification the guard needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditedMessage {
    pub chat_id: ChatId,
    pub message_id: MessageId,
    /// `None` for anonymous admins and channel posts.
    pub author: Option<Author>,
}

impl EditedMessage {
    pub fn from_message(msg: &Message) -> Self {
        Self {
            chat_id: msg.chat.id,
            message_id: msg.id,
            author: msg.from.as_ref().map(|user| Author {
                id: user.id,
                first_name: user.first_name.clone(),
            }),
        }
    }
}

/// What the guard did with one edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// No message in the notification.
    Ignored,
    /// Deleted and the author was warned.
    Removed,
    /// Deleted, but there was no author to warn.
    RemovedWithoutWarning,
    DeleteFailed(PlatformError),
    WarnFailed(PlatformError),
}

/// Warning posted after an edited message is removed.
pub fn warning_text(author: &Author) -> String {
    format!(
        "⚠️ {}, you edited a message so it was deleted.",
        mention_html(author.id, &author.first_name)
    )
}

/// Delete an edited message, then warn its author.
///
/// The warning is only sent once the delete succeeded.
pub async fn guard_edit(platform: &dyn ChatPlatform, edit: Option<&EditedMessage>) -> EditOutcome {
    let Some(edit) = edit else {
        return EditOutcome::Ignored;
    };

    if let Err(e) = platform.delete_message(edit.chat_id, edit.message_id).await {
        warn!(
            chat_id = edit.chat_id.0,
            message_id = edit.message_id.0,
            kind = e.kind(),
            "Failed to delete edited message: {}",
            e
        );
        return EditOutcome::DeleteFailed(e);
    }

    let Some(author) = &edit.author else {
        debug!(
            "Deleted edited message {} in {} (no author)",
            edit.message_id.0, edit.chat_id
        );
        return EditOutcome::RemovedWithoutWarning;
    };

    let warning = OutgoingMessage::html(warning_text(author));
    match platform.send_message(edit.chat_id, warning).await {
        Ok(()) => {
            info!(
                chat_id = edit.chat_id.0,
                user_id = author.id.0,
                "Deleted edited message {}",
                edit.message_id.0
            );
            EditOutcome::Removed
        }
        Err(e) => {
            warn!(
                chat_id = edit.chat_id.0,
                kind = e.kind(),
                "Deleted edited message but failed to warn: {}",
                e
            );
            EditOutcome::WarnFailed(e)
        }
    }
}
