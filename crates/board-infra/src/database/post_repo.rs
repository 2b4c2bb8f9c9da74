//! SQLite post repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use board_core::StorageError;
use board_core::domain::{Post, PostInput};
use board_core::ports::PostRepository;

use super::entity::post::{self, CountRow, format_timestamp};
use super::gateway::StorageGateway;

/// Post repository backed by the storage gateway.
///
/// Every statement goes through the gateway's parameterized primitives.
#[derive(Clone)]
pub struct SqlitePostRepository {
    gateway: Arc<StorageGateway>,
}

impl SqlitePostRepository {
    pub fn new(gateway: Arc<StorageGateway>) -> Self {
        Self { gateway }
    }
}

/// SQLite binds integers as i64; larger values are clamped.
fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn count_posts(&self) -> Result<u64, StorageError> {
        let row: Option<CountRow> = self.gateway.query_one(post::COUNT_SQL, []).await?;

        Ok(row.map_or(0, |row| row.count.max(0) as u64))
    }

    async fn list_posts(&self, limit: u64, offset: u64) -> Result<Vec<Post>, StorageError> {
        tracing::debug!(limit, offset, "Listing posts");

        let rows: Vec<post::Model> = self
            .gateway
            .query_many(
                post::LIST_SQL,
                [to_sql_int(limit).into(), to_sql_int(offset).into()],
            )
            .await?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn get_post_by_id(&self, id: i64) -> Result<Option<Post>, StorageError> {
        tracing::debug!(post_id = id, "Finding post by id");

        let row: Option<post::Model> = self
            .gateway
            .query_one(post::FIND_BY_ID_SQL, [id.into()])
            .await?;

        row.map(Post::try_from).transpose()
    }

    async fn create_post(&self, input: &PostInput) -> Result<i64, StorageError> {
        let created_at = format_timestamp(Utc::now());

        let id = self
            .gateway
            .insert_returning_id(
                post::INSERT_SQL,
                [
                    input.title.clone().into(),
                    input.content.clone().into(),
                    input.author.clone().into(),
                    created_at.into(),
                ],
            )
            .await?;

        tracing::info!(post_id = id, "Post created");
        Ok(id)
    }

    async fn update_post(&self, id: i64, input: &PostInput) -> Result<bool, StorageError> {
        self.gateway
            .execute(
                post::UPDATE_SQL,
                [
                    input.title.clone().into(),
                    input.content.clone().into(),
                    input.author.clone().into(),
                    id.into(),
                ],
            )
            .await?;

        tracing::info!(post_id = id, "Post updated");
        Ok(true)
    }
}
