use async_trait::async_trait;

use crate::domain::{Post, PostDraft};

/// Record store for posts.
///
/// Implementations own id generation and every mutation. Each call is a
/// single atomic step on one id: no caller may observe a half-written post.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All current posts, in no particular order.
    async fn list(&self) -> Vec<Post>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: &str) -> Option<Post>;

    /// Store a new post under a freshly generated id.
    async fn create(&self, draft: PostDraft) -> Post;

    /// Replace the fields of an existing post. Returns `None` if `id` is unknown.
    async fn update(&self, id: &str, draft: PostDraft) -> Option<Post>;

    /// Remove a post. Returns `false` if `id` is unknown.
    async fn delete(&self, id: &str) -> bool;

    /// Number of stored posts.
    async fn count(&self) -> usize {
        self.list().await.len()
    }
}
