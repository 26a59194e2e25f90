//! Message dispatcher setup.
//!
//! Builds the dispatcher with all command handlers and event handlers.

use std::sync::Arc;

use teloxide::dispatching::{DefaultKey, UpdateHandler};
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use tracing::trace;

use crate::config::Links;
use crate::database::Directory;
use crate::events;
use crate::platform::ChatPlatform;
use crate::plugins;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Outbound platform operations.
    pub platform: Arc<dyn ChatPlatform>,

    /// Known users and groups.
    pub directory: Arc<dyn Directory>,

    /// User IDs allowed to run admin commands.
    pub admin_ids: Arc<[u64]>,

    /// Channel and support links for the welcome menu.
    pub links: Links,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        platform: Arc<dyn ChatPlatform>,
        directory: Arc<dyn Directory>,
        admin_ids: Vec<u64>,
        links: Links,
    ) -> Self {
        Self {
            platform,
            directory,
            admin_ids: admin_ids.into(),
            links,
        }
    }

    /// Check if a user may run admin commands.
    pub fn is_admin(&self, user_id: u64) -> bool {
        self.admin_ids.contains(&user_id)
    }
}

/// Build the dispatcher with all handlers.
pub fn build_dispatcher(bot: Bot, state: AppState) -> Dispatcher<Bot, anyhow::Error, DefaultKey> {
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![state])
        .default_handler(|update| async move {
            trace!("Unhandled update {:?}", update.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("Error in update handler"))
        .enable_ctrlc_handler()
        .build()
}

/// Build the handler schema.
///
/// Each binding is one update type or pattern routed to one handler.
pub fn schema() -> UpdateHandler<anyhow::Error> {
    let message_handler = Update::filter_message().branch(plugins::command_handler());

    dptree::entry()
        .branch(message_handler)
        .branch(plugins::callback_handler())
        .branch(events::edit_handler())
}
