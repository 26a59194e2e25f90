//! Directory document models.

mod entry;
mod group;
mod user;

pub use entry::{ChatEntry, ChatKind};
pub use group::GroupRecord;
pub use user::UserRecord;

#[cfg(test)]
mod tests {
    use mongodb::bson::{doc, from_document};

    use super::*;

    #[test]
    fn documents_without_timestamp_still_decode() {
        let user: UserRecord = from_document(doc! { "_id": 42_i32, "name": "Alice" }).unwrap();
        assert_eq!(user.user_id, 42);
        assert_eq!(user.updated_at, 0);

        let group: GroupRecord =
            from_document(doc! { "_id": -1001234567890_i64, "title": "Rustaceans" }).unwrap();
        assert_eq!(group.chat_id, -1001234567890);
        assert_eq!(ChatEntry::from(group).kind, ChatKind::Group);
    }
}
