//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /posts` and `PUT /posts/{id}`.
///
/// Every field is required. `date` stays a string here; parsing it into a
/// timestamp is part of validation, not deserialization. Any `id` sent by
/// the client is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostInput {
    pub author: String,
    pub date: String,
    pub content: String,
}
