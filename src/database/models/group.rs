//! Group record stored for every `/start` inside a group.

use serde::{Deserialize, Serialize};

/// A group or supergroup the bot has been started in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    /// Telegram chat ID
    #[serde(rename = "_id")]
    pub chat_id: i64,
    /// Group title (cached for reference)
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub updated_at: i64,
}

impl GroupRecord {
    pub fn new(chat_id: i64, title: impl Into<String>) -> Self {
        Self {
            chat_id,
            title: title.into(),
            updated_at: chrono::Utc::now().timestamp(),
        }
    }
}
