use std::sync::Mutex;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use edit_guardian::database::{
    ChatEntry, ChatKind, Directory, EntryStream, GroupRecord, UserRecord,
};
use futures::stream::{self, StreamExt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryWrite {
    User(UserRecord),
    Group(GroupRecord),
}

/// In-memory directory keeping insertion order.
#[derive(Default)]
pub struct MockDirectory {
    users: Mutex<Vec<UserRecord>>,
    groups: Mutex<Vec<GroupRecord>>,
    writes: Mutex<Vec<DirectoryWrite>>,
    /// Scan yields one undecodable record after the users.
    corrupt_user: bool,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(self, users: &[(i64, &str)]) -> Self {
        *self.users.lock().unwrap() = users
            .iter()
            .map(|(id, name)| UserRecord::new(*id, *name))
            .collect();
        self
    }

    pub fn with_groups(self, groups: &[(i64, &str)]) -> Self {
        *self.groups.lock().unwrap() = groups
            .iter()
            .map(|(id, title)| GroupRecord::new(*id, *title))
            .collect();
        self
    }

    pub fn with_corrupt_user(mut self) -> Self {
        self.corrupt_user = true;
        self
    }

    pub fn users(&self) -> Vec<UserRecord> {
        self.users.lock().unwrap().clone()
    }

    pub fn groups(&self) -> Vec<GroupRecord> {
        self.groups.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<DirectoryWrite> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl Directory for MockDirectory {
    async fn upsert_user(&self, user: &UserRecord) -> Result<()> {
        self.writes
            .lock()
            .unwrap()
            .push(DirectoryWrite::User(user.clone()));

        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.user_id == user.user_id) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }
        Ok(())
    }

    async fn upsert_group(&self, group: &GroupRecord) -> Result<()> {
        self.writes
            .lock()
            .unwrap()
            .push(DirectoryWrite::Group(group.clone()));

        let mut groups = self.groups.lock().unwrap();
        match groups.iter_mut().find(|g| g.chat_id == group.chat_id) {
            Some(existing) => *existing = group.clone(),
            None => groups.push(group.clone()),
        }
        Ok(())
    }

    async fn scan(&self, kind: ChatKind) -> Result<EntryStream> {
        let mut entries: Vec<Result<ChatEntry>> = match kind {
            ChatKind::User => self.users().into_iter().map(|u| Ok(u.into())).collect(),
            ChatKind::Group => self.groups().into_iter().map(|g| Ok(g.into())).collect(),
        };
        if kind == ChatKind::User && self.corrupt_user {
            entries.push(Err(anyhow!("missing field `name`")));
        }
        Ok(stream::iter(entries).boxed())
    }

    async fn count(&self, kind: ChatKind) -> Result<u64> {
        let count = match kind {
            ChatKind::User => self.users.lock().unwrap().len(),
            ChatKind::Group => self.groups.lock().unwrap().len(),
        };
        Ok(count as u64)
    }
}
