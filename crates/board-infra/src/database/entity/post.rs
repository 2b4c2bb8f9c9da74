//! Post entity for SeaORM, plus the raw statements the gateway runs against
//! the `posts` table.

use board_core::StorageError;
use board_core::domain::Post;
use chrono::{DateTime, SecondsFormat, Utc};
use sea_orm::FromQueryResult;
use sea_orm::entity::prelude::*;

pub(crate) const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    author TEXT NOT NULL,
    createdAt TEXT NOT NULL
)";

pub(crate) const COUNT_SQL: &str = "SELECT COUNT(*) AS count FROM posts";

pub(crate) const INSERT_SQL: &str =
    "INSERT INTO posts (title, content, author, createdAt) VALUES (?, ?, ?, ?)";

pub(crate) const LIST_SQL: &str =
    "SELECT id, title, content, author, createdAt FROM posts ORDER BY id LIMIT ? OFFSET ?";

pub(crate) const FIND_BY_ID_SQL: &str =
    "SELECT id, title, content, author, createdAt FROM posts WHERE id = ?";

pub(crate) const UPDATE_SQL: &str =
    "UPDATE posts SET title = ?, content = ?, author = ? WHERE id = ?";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author: String,
    /// ISO-8601 text, millisecond precision, UTC.
    #[sea_orm(column_name = "createdAt")]
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Result shape of [`COUNT_SQL`].
#[derive(Debug, FromQueryResult)]
pub(crate) struct CountRow {
    pub count: i64,
}

/// Render a timestamp the way it is stored in `createdAt`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Conversion from SeaORM Model to Domain Post.
///
/// Rows whose `createdAt` is not a valid timestamp are rejected here.
impl TryFrom<Model> for Post {
    type Error = StorageError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let created_at = DateTime::parse_from_rfc3339(&model.created_at)
            .map_err(|e| {
                StorageError::Decode(format!(
                    "post {} has invalid createdAt {:?}: {}",
                    model.id, model.created_at, e
                ))
            })?
            .with_timezone(&Utc);

        Ok(Self {
            id: model.id,
            title: model.title,
            content: model.content,
            author: model.author,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_format_matches_iso_millis() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(format_timestamp(at), "2024-05-01T12:00:00.000Z");
    }

    #[test]
    fn test_malformed_created_at_is_rejected() {
        let model = Model {
            id: 7,
            title: "t".to_owned(),
            content: "c".to_owned(),
            author: "a".to_owned(),
            created_at: "yesterday".to_owned(),
        };

        let err = Post::try_from(model).unwrap_err();
        assert!(matches!(err, StorageError::Decode(_)));
    }
}
