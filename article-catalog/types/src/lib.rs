//! Shared types for the article catalog service and its HTTP clients.

use serde::{Deserialize, Deserializer, Serialize};

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /articles`. Missing and `null` fields are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleDraft {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Expected as `YYYY-MM-DD`, not validated
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =====================================================
// Response Types
// =====================================================

/// Error body returned for every non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// =====================================================
// Domain Types
// =====================================================

/// A stored article. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// 1-based creation position rendered as decimal text
    pub id: String,
    pub title: String,
    pub date: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl Article {
    /// Build the article stored at `position` (0-based) from a draft.
    pub fn from_draft(position: usize, draft: ArticleDraft) -> Self {
        Self {
            id: (position + 1).to_string(),
            title: draft.title,
            date: draft.date,
            body: draft.body,
            tags: draft.tags,
        }
    }
}

/// Aggregate answer to a tag + date query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSearchResult {
    pub tag: String,
    /// Number of matches before truncation
    pub count: usize,
    /// Ids of the most recent matches, oldest first
    pub articles: Vec<String>,
    pub related_tags: Vec<String>,
}

/// Service health status
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub running: bool,
    pub version: String,
    pub uptime_secs: u64,
    pub article_count: usize,
    pub tag_count: usize,
}
