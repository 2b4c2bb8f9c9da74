use async_trait::async_trait;

use crate::domain::{Post, PostInput};
use crate::error::StorageError;

/// Post repository.
///
/// Arguments are expected to be validated and clamped by the caller. The
/// repository never deletes rows.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Total number of stored posts.
    async fn count_posts(&self) -> Result<u64, StorageError>;

    /// At most `limit` posts in ascending id order, skipping the first `offset`.
    async fn list_posts(&self, limit: u64, offset: u64) -> Result<Vec<Post>, StorageError>;

    /// Find a post by its id. `None` when nothing matches.
    async fn get_post_by_id(&self, id: i64) -> Result<Option<Post>, StorageError>;

    /// Insert a new post stamped with the current instant and return its id.
    async fn create_post(&self, input: &PostInput) -> Result<i64, StorageError>;

    /// Replace the mutable fields of the post with the given id.
    ///
    /// Reports `true` on any successful statement, including when no row
    /// matched. Callers that need existence guarantees look the post up first.
    async fn update_post(&self, id: i64, input: &PostInput) -> Result<bool, StorageError>;
}
