//! User record stored for every private `/start`.

use serde::{Deserialize, Serialize};

/// A user who started the bot in private chat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Telegram user ID.
    #[serde(rename = "_id")]
    pub user_id: i64,
    /// Full display name at the time of the last `/start`.
    pub name: String,
    /// Unix timestamp of last update. Absent on older documents.
    #[serde(default)]
    pub updated_at: i64,
}

impl UserRecord {
    pub fn new(user_id: i64, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            updated_at: chrono::Utc::now().timestamp(),
        }
    }
}
