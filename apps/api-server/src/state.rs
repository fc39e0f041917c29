//! Application state - shared across all handlers.

use std::sync::Arc;

use postbox_core::ports::PostRepository;
use postbox_core::service::PostService;
use postbox_infra::InMemoryPostRepository;

/// Shared application state.
///
/// Built once in `main` and cloned into every worker, so all workers see the
/// same store.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostService::new(repo),
        }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        tracing::info!("Using in-memory post store; data is lost on restart");
        Self::new(Arc::new(InMemoryPostRepository::new()))
    }
}
