//! Chat directory: every user and group the bot has seen.
//!
//! Writes are `$set` upserts keyed by `_id`, so each chat id maps to at most
//! one record and the last write wins.

use anyhow::Result;
use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt};
use mongodb::Collection;
use mongodb::bson::{Document, doc};
use mongodb::options::UpdateOptions;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::Database;
use super::models::{ChatEntry, ChatKind, GroupRecord, UserRecord};

/// Records yielded by a full collection scan, in store order.
pub type EntryStream = BoxStream<'static, Result<ChatEntry>>;

/// Storage operations on the chat directory.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Insert or overwrite the name of a user.
    async fn upsert_user(&self, user: &UserRecord) -> Result<()>;

    /// Insert or overwrite the title of a group.
    async fn upsert_group(&self, group: &GroupRecord) -> Result<()>;

    /// Stream every record of one kind. Order is whatever the store yields.
    async fn scan(&self, kind: ChatKind) -> Result<EntryStream>;

    /// Number of records of one kind.
    async fn count(&self, kind: ChatKind) -> Result<u64>;
}

/// MongoDB-backed directory (`users` and `groups` collections).
#[derive(Clone)]
pub struct MongoDirectory {
    users: Collection<UserRecord>,
    groups: Collection<GroupRecord>,
}

impl MongoDirectory {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection(ChatKind::User.collection()),
            groups: db.collection(ChatKind::Group.collection()),
        }
    }
}

/// Filter and `$set` update for a user upsert.
fn user_upsert(user: &UserRecord) -> (Document, Document) {
    (
        doc! { "_id": user.user_id },
        doc! { "$set": { "name": user.name.as_str(), "updated_at": user.updated_at } },
    )
}

/// Filter and `$set` update for a group upsert.
fn group_upsert(group: &GroupRecord) -> (Document, Document) {
    (
        doc! { "_id": group.chat_id },
        doc! { "$set": { "title": group.title.as_str(), "updated_at": group.updated_at } },
    )
}

fn upsert_options() -> UpdateOptions {
    UpdateOptions::builder().upsert(true).build()
}

async fn scan_collection<T>(collection: &Collection<T>) -> Result<EntryStream>
where
    T: DeserializeOwned + Send + Sync + Unpin + 'static,
    ChatEntry: From<T>,
{
    let cursor = collection.find(doc! {}).await?;
    Ok(cursor
        .map(|record| record.map(ChatEntry::from).map_err(anyhow::Error::from))
        .boxed())
}

#[async_trait]
impl Directory for MongoDirectory {
    async fn upsert_user(&self, user: &UserRecord) -> Result<()> {
        let (filter, update) = user_upsert(user);

        self.users
            .update_one(filter, update)
            .with_options(upsert_options())
            .await?;

        debug!("Upserted user {} ({})", user.user_id, user.name);
        Ok(())
    }

    async fn upsert_group(&self, group: &GroupRecord) -> Result<()> {
        let (filter, update) = group_upsert(group);

        self.groups
            .update_one(filter, update)
            .with_options(upsert_options())
            .await?;

        debug!("Upserted group {} ({})", group.chat_id, group.title);
        Ok(())
    }

    async fn scan(&self, kind: ChatKind) -> Result<EntryStream> {
        match kind {
            ChatKind::User => scan_collection(&self.users).await,
            ChatKind::Group => scan_collection(&self.groups).await,
        }
    }

    async fn count(&self, kind: ChatKind) -> Result<u64> {
        let count = match kind {
            ChatKind::User => self.users.count_documents(doc! {}).await?,
            ChatKind::Group => self.groups.count_documents(doc! {}).await?,
        };
        Ok(count)
    }
}
