use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Post entity - a single blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub content: String,
}

impl Post {
    /// Create a new post under a freshly generated identifier.
    pub fn new(draft: PostDraft) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), draft)
    }

    /// Build a post from a draft, keeping an existing identifier.
    pub fn with_id(id: impl Into<String>, draft: PostDraft) -> Self {
        Self {
            id: id.into(),
            author: draft.author,
            date: draft.date,
            content: draft.content,
        }
    }
}

/// Validated post fields, everything a post carries except its id.
///
/// The only way to obtain one is [`PostDraft::parse`], so holding a draft
/// means the input already passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    author: String,
    date: DateTime<Utc>,
    content: String,
}

impl PostDraft {
    /// Validate raw input fields.
    ///
    /// `author` must contain a non-whitespace character and `date` must be an
    /// RFC 3339 timestamp with an offset whose UTC form stays within years
    /// 0000 to 9999. `content` is taken as is.
    pub fn parse(author: String, date: &str, content: String) -> Result<Self, DomainError> {
        if author.trim().is_empty() {
            return Err(DomainError::InvalidInput("Author is required".to_string()));
        }

        let date = DateTime::parse_from_rfc3339(date.trim())
            .map_err(|_| {
                DomainError::InvalidInput(
                    "Invalid date format, expected RFC 3339 (e.g. 2024-01-01T00:00:00Z)"
                        .to_string(),
                )
            })?
            .with_timezone(&Utc);

        // Outside this range the stored date would not serialize back to RFC 3339.
        if !(0..=9999).contains(&date.year()) {
            return Err(DomainError::InvalidInput(
                "Date out of range, must fall within years 0000 to 9999 in UTC".to_string(),
            ));
        }

        Ok(Self {
            author,
            date,
            content,
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
