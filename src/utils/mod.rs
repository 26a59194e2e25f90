//! Utility functions.
//!
//! Collection of helper functions used across the bot.

use teloxide::types::UserId;
use teloxide::utils::html;

/// HTML link that mentions a user by id, showing `name`.
pub fn mention_html(user_id: UserId, name: &str) -> String {
    format!("<a href=\"tg://user?id={}\">{}</a>", user_id.0, html::escape(name))
}

/// Collapse command arguments into single-space separated text.
pub fn join_args(args: &str) -> String {
    args.split_whitespace().collect::<Vec<_>>().join(" ")
}
