//! # Postbox Infrastructure
//!
//! Concrete implementations of the ports defined in `postbox-core`.
//! Posts live in process memory only; there is no persistence layer.

pub mod store;

pub use store::InMemoryPostRepository;
