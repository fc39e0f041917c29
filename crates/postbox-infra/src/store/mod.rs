//! Post record stores.

mod memory;

pub use memory::InMemoryPostRepository;
