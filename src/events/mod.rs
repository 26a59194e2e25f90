//! Event handler system.
//!
//! Non-command updates the bot reacts to.

pub mod edit_guard;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

use crate::bot::AppState;

pub use edit_guard::{Author, EditOutcome, EditedMessage, guard_edit};

/// Build the handler for edited messages.
pub fn edit_handler() -> UpdateHandler<anyhow::Error> {
    Update::filter_edited_message().endpoint(edited_message_handler)
}

async fn edited_message_handler(msg: Message, state: AppState) -> anyhow::Result<()> {
    let edit = EditedMessage::from_message(&msg);
    guard_edit(state.platform.as_ref(), Some(&edit)).await;
    Ok(())
}
