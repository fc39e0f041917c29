//! # Postbox Shared
//!
//! Wire types shared by the server and any Rust client of the API.

pub mod dto;
pub mod response;

pub use dto::PostInput;
pub use response::ErrorResponse;
