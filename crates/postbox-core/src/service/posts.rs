use std::sync::Arc;

use crate::domain::{Post, PostDraft};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// The post operations exposed to transports.
///
/// Takes already validated [`PostDraft`]s, so input errors are reported
/// before the store is ever touched. Absence is turned into
/// [`DomainError::NotFound`].
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// List every stored post. Never fails.
    pub async fn list(&self) -> Vec<Post> {
        self.repo.list().await
    }

    pub async fn create(&self, draft: PostDraft) -> Post {
        let post = self.repo.create(draft).await;
        tracing::debug!(post_id = %post.id, "Post created");
        post
    }

    pub async fn read(&self, id: &str) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Replace author, date and content of an existing post.
    pub async fn update(&self, id: &str, draft: PostDraft) -> Result<Post, DomainError> {
        let post = self
            .repo
            .update(id, draft)
            .await
            .ok_or_else(|| DomainError::post_not_found(id))?;
        tracing::debug!(post_id = %id, "Post updated");
        Ok(post)
    }

    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        if !self.repo.delete(id).await {
            return Err(DomainError::post_not_found(id));
        }
        tracing::debug!(post_id = %id, "Post deleted");
        Ok(())
    }

    pub async fn count(&self) -> usize {
        self.repo.count().await
    }
}
