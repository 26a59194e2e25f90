//! /broadcast command plugin.
//!
//! Sends one text to every user, then every group, in the directory.
//! Destinations are tried one after another; a failed send is logged,
//! counted and skipped.

use futures::StreamExt;
use teloxide::prelude::*;
use teloxide::types::UserId;
use tracing::{info, warn};

use super::NOT_AUTHORIZED;
use crate::bot::AppState;
use crate::database::{ChatKind, Directory};
use crate::platform::{ChatPlatform, OutgoingMessage};
use crate::utils::join_args;

pub const USAGE: &str = "Usage: /broadcast <message>";

/// Delivery counts for one broadcast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub attempted: usize,
    pub sent: usize,
    pub failed: usize,
}

impl BroadcastReport {
    pub fn summary(&self) -> String {
        format!(
            "✅ Broadcast finished.\n\nAttempted: {}\nSent: {}\nFailed: {}",
            self.attempted, self.sent, self.failed
        )
    }
}

/// Result of a /broadcast invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BroadcastOutcome {
    Unauthorized,
    MissingText,
    Delivered(BroadcastReport),
}

/// Handle the /broadcast command.
pub async fn broadcast_command(msg: Message, state: AppState, text: String) -> anyhow::Result<()> {
    let caller = msg.from.as_ref().map(|u| u.id);
    broadcast(&state, msg.chat.id, caller, &text).await?;
    Ok(())
}

/// Authorize the caller, fan the text out and report back to them.
pub async fn broadcast(
    state: &AppState,
    reply_to: ChatId,
    caller: Option<UserId>,
    args: &str,
) -> anyhow::Result<BroadcastOutcome> {
    if !caller.is_some_and(|id| state.is_admin(id.0)) {
        state
            .platform
            .send_message(reply_to, OutgoingMessage::plain(NOT_AUTHORIZED))
            .await?;
        return Ok(BroadcastOutcome::Unauthorized);
    }

    let text = join_args(args);
    if text.is_empty() {
        state
            .platform
            .send_message(reply_to, OutgoingMessage::plain(USAGE))
            .await?;
        return Ok(BroadcastOutcome::MissingText);
    }

    let report = fan_out(state.platform.as_ref(), state.directory.as_ref(), &text).await?;
    info!(
        attempted = report.attempted,
        sent = report.sent,
        failed = report.failed,
        "Broadcast finished"
    );

    state
        .platform
        .send_message(reply_to, OutgoingMessage::plain(report.summary()))
        .await?;

    Ok(BroadcastOutcome::Delivered(report))
}

/// Send `text` to every user, then every group.
///
/// Only a failure to open a collection aborts; per-destination errors are
/// counted in the report.
pub async fn fan_out(
    platform: &dyn ChatPlatform,
    directory: &dyn Directory,
    text: &str,
) -> anyhow::Result<BroadcastReport> {
    let mut report = BroadcastReport::default();

    for kind in [ChatKind::User, ChatKind::Group] {
        let mut entries = directory.scan(kind).await?;

        while let Some(entry) = entries.next().await {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable {} record: {}", kind, e);
                    continue;
                }
            };

            report.attempted += 1;
            match platform
                .send_message(entry.chat_id, OutgoingMessage::plain(text))
                .await
            {
                Ok(()) => report.sent += 1,
                Err(e) => {
                    report.failed += 1;
                    warn!(
                        chat_id = entry.chat_id.0,
                        kind = e.kind(),
                        stale = e.is_stale_destination(),
                        "Failed to send broadcast to {} {}: {}",
                        entry.kind,
                        entry.label,
                        e
                    );
                }
            }
        }
    }

    Ok(report)
}
