//! Bot runtime - long polling runner.

use teloxide::dispatching::DefaultKey;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;
use tracing::info;

/// Run the dispatcher with long polling until Ctrl+C.
///
/// Updates queued while the bot was offline are dropped, so stale edits
/// and commands are never replayed after a restart.
pub async fn run(bot: Bot, mut dispatcher: Dispatcher<Bot, anyhow::Error, DefaultKey>) {
    let listener = Polling::builder(bot).drop_pending_updates().build();

    info!("Starting bot in polling mode...");

    dispatcher
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("Error from update listener"),
        )
        .await;

    info!("Dispatcher stopped");
}
