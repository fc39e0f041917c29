//! In-memory post store - the default and only record store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postbox_core::domain::{Post, PostDraft};
use postbox_core::ports::PostRepository;

/// In-memory post store using a HashMap behind an async RwLock.
///
/// Reads share the lock, mutations hold it exclusively, so every post is
/// seen either entirely before or entirely after a write.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<String, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Vec<Post> {
        let posts = self.posts.read().await;
        posts.values().cloned().collect()
    }

    async fn find_by_id(&self, id: &str) -> Option<Post> {
        let posts = self.posts.read().await;
        posts.get(id).cloned()
    }

    async fn create(&self, draft: PostDraft) -> Post {
        let post = Post::new(draft);
        let mut posts = self.posts.write().await;
        posts.insert(post.id.clone(), post.clone());

        tracing::trace!(post_id = %post.id, total = posts.len(), "Inserted post");
        post
    }

    async fn update(&self, id: &str, draft: PostDraft) -> Option<Post> {
        let mut posts = self.posts.write().await;
        let slot = posts.get_mut(id)?;
        *slot = Post::with_id(id, draft);
        Some(slot.clone())
    }

    async fn delete(&self, id: &str) -> bool {
        let mut posts = self.posts.write().await;
        posts.remove(id).is_some()
    }

    async fn count(&self) -> usize {
        self.posts.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    use proptest::prelude::*;

    fn draft(author: &str, content: &str) -> PostDraft {
        PostDraft::parse(
            author.to_string(),
            "2024-01-01T00:00:00Z",
            content.to_string(),
        )
        .unwrap()
    }

    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(fut)
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = InMemoryPostRepository::new();
        let post = store.create(draft("Alice", "hello")).await;

        assert_eq!(store.find_by_id(&post.id).await, Some(post.clone()));
        assert_eq!(store.list().await, vec![post]);
    }

    #[tokio::test]
    async fn test_find_missing() {
        let store = InMemoryPostRepository::new();
        assert_eq!(store.find_by_id("nope").await, None);
        assert!(store.list().await.is_empty());
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let store = InMemoryPostRepository::new();
        let post = store.create(draft("Alice", "hello")).await;

        let new_fields =
            PostDraft::parse("Bob".into(), "2024-02-02T00:00:00Z", "bye".into()).unwrap();
        let updated = store.update(&post.id, new_fields.clone()).await.unwrap();

        assert_eq!(updated, Post::with_id(post.id.clone(), new_fields));
        assert_eq!(store.find_by_id(&post.id).await, Some(updated));
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_upsert() {
        let store = InMemoryPostRepository::new();
        assert_eq!(store.update("ghost", draft("Bob", "x")).await, None);
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryPostRepository::new();
        let post = store.create(draft("Alice", "hello")).await;

        assert!(store.delete(&post.id).await);
        assert!(!store.delete(&post.id).await);
        assert_eq!(store.find_by_id(&post.id).await, None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_unique_ids() {
        let store = Arc::new(InMemoryPostRepository::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(draft("Alice", &i.to_string())).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().id);
        }

        assert_eq!(ids.len(), 64);
        assert_eq!(store.count().await, 64);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_reads_never_see_half_applied_update() {
        let store = Arc::new(InMemoryPostRepository::new());
        let id = store.create(draft("A", "A")).await.id;

        let handles: Vec<_> = (0..200)
            .map(|i| {
                let store = store.clone();
                let id = id.clone();
                tokio::spawn(async move {
                    if i % 2 == 0 {
                        let tag = if i % 4 == 0 { "A" } else { "B" };
                        store.update(&id, draft(tag, tag)).await;
                    } else {
                        let post = store.find_by_id(&id).await.unwrap();
                        assert_eq!(post.author, post.content);
                        assert_eq!(post.id, id);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        let post = store.find_by_id(&id).await.unwrap();
        assert_eq!(post.author, post.content);
        assert_eq!(store.count().await, 1);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Create(String, String),
        Delete(usize),
        Update(usize, String),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            ("[a-zA-Z]{1,12}", ".{0,40}").prop_map(|(a, c)| Op::Create(a, c)),
            any::<usize>().prop_map(Op::Delete),
            (any::<usize>(), ".{0,40}").prop_map(|(i, c)| Op::Update(i, c)),
        ]
    }

    proptest! {
        #[test]
        fn prop_created_posts_read_back(author in "[a-zA-Z0-9]{1,20}", content in ".{0,200}") {
            block_on(async move {
                let store = InMemoryPostRepository::new();
                let post = store.create(draft(&author, &content)).await;
                prop_assert_eq!(store.find_by_id(&post.id).await, Some(post.clone()));
                prop_assert_eq!(post.author, author);
                prop_assert_eq!(post.content, content);
                Ok(())
            })?;
        }

        #[test]
        fn prop_list_matches_created_minus_deleted(ops in prop::collection::vec(op(), 0..40)) {
            block_on(async move {
                let store = InMemoryPostRepository::new();
                let mut ever_created: Vec<String> = Vec::new();
                let mut live: HashSet<String> = HashSet::new();

                for op in ops {
                    match op {
                        Op::Create(author, content) => {
                            let post = store.create(draft(&author, &content)).await;
                            prop_assert!(!ever_created.contains(&post.id));
                            ever_created.push(post.id.clone());
                            live.insert(post.id);
                        }
                        Op::Delete(i) if !ever_created.is_empty() => {
                            let id = &ever_created[i % ever_created.len()];
                            prop_assert_eq!(store.delete(id).await, live.remove(id));
                        }
                        Op::Update(i, content) if !ever_created.is_empty() => {
                            let id = &ever_created[i % ever_created.len()];
                            let updated = store.update(id, draft("Bob", &content)).await;
                            prop_assert_eq!(updated.is_some(), live.contains(id));
                            if let Some(post) = updated {
                                prop_assert_eq!(&post.id, id);
                                prop_assert_eq!(post.content, content);
                            }
                        }
                        _ => {}
                    }
                }

                let listed: HashSet<String> =
                    store.list().await.into_iter().map(|p| p.id).collect();
                prop_assert_eq!(listed, live);
                Ok(())
            })?;
        }
    }
}
