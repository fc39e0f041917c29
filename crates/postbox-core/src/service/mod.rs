//! Application services - orchestrate ports and map outcomes to domain errors.

mod posts;

pub use posts::PostService;
