//! Uniform view over directory records for fan-out.

use std::fmt;

use teloxide::types::ChatId;

use super::{GroupRecord, UserRecord};

/// Which collection a record lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChatKind {
    User,
    Group,
}

impl ChatKind {
    /// Collection name in MongoDB.
    pub fn collection(self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Group => "groups",
        }
    }
}

impl fmt::Display for ChatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Group => f.write_str("group"),
        }
    }
}

/// One broadcast destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    pub kind: ChatKind,
    pub chat_id: ChatId,
    /// User name or group title.
    pub label: String,
}

impl From<UserRecord> for ChatEntry {
    fn from(record: UserRecord) -> Self {
        Self {
            kind: ChatKind::User,
            chat_id: ChatId(record.user_id),
            label: record.name,
        }
    }
}

impl From<GroupRecord> for ChatEntry {
    fn from(record: GroupRecord) -> Self {
        Self {
            kind: ChatKind::Group,
            chat_id: ChatId(record.chat_id),
            label: record.title,
        }
    }
}
