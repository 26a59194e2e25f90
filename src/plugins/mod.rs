//! Plugin system for command handlers.
//!
//! Add new plugins by:
//! 1. Creating a new file in this directory
//! 2. Adding `pub mod your_plugin;` below
//! 3. Adding the handler to `command_handler()`

pub mod broadcast;
pub mod help;
pub mod start;
pub mod stats;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

/// Reply for callers outside the admin list.
pub const NOT_AUTHORIZED: &str = "❌ You are not authorized to use this command.";

/// All bot commands.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Start the bot")]
    Start(String),

    #[command(description = "Send a message to every known user and group (admin)")]
    Broadcast(String),

    #[command(description = "Show how many users and groups are known (admin)")]
    Stats,
}

/// Build the combined command handler.
pub fn command_handler() -> UpdateHandler<anyhow::Error> {
    use dptree::case;

    teloxide::filter_command::<Command, _>()
        .branch(case![Command::Start(args)].endpoint(start::start_command))
        .branch(case![Command::Broadcast(text)].endpoint(broadcast::broadcast_command))
        .branch(case![Command::Stats].endpoint(stats::stats_command))
}

/// Build the callback query handler.
pub fn callback_handler() -> UpdateHandler<anyhow::Error> {
    Update::filter_callback_query()
        .filter(|q: CallbackQuery| help::is_help_callback(q.data.as_deref()))
        .endpoint(help::help_callback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_takes_the_rest_of_the_line() {
        let cmd = Command::parse("/broadcast hello world", "guardian_bot").unwrap();
        assert_eq!(cmd, Command::Broadcast("hello world".to_string()));
    }

    #[test]
    fn bare_start_parses_with_empty_args() {
        let cmd = Command::parse("/start", "guardian_bot").unwrap();
        assert_eq!(cmd, Command::Start(String::new()));
    }
}
