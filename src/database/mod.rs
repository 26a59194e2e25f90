//! Database module exports.

mod directory;
mod models;
mod mongo;

pub use directory::{Directory, EntryStream, MongoDirectory};
pub use models::{ChatEntry, ChatKind, GroupRecord, UserRecord};
pub use mongo::Database;
