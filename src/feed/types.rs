//! Wire data model for feed responses
//!
//! Field names follow the upstream camelCase wire naming. Everything besides
//! the sequence id is pass-through data: the polling loop never interprets
//! article content, it only advances the cursor and hands articles to the
//! reporting collaborator. Unknown wire fields are ignored so new upstream
//! fields never break decoding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single feed call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    /// The call was accepted and the page (possibly empty) is valid
    Success,

    /// The call was rejected; the page carries a message code instead of articles
    Failure,
}

impl PageStatus {
    /// Maps the wire status string to a status.
    ///
    /// `"SUCCESS"` is the only success marker; anything else (including
    /// unrecognized values) is treated as a failure.
    pub fn from_wire(status: &str) -> Self {
        if status == "SUCCESS" {
            Self::Success
        } else {
            Self::Failure
        }
    }

    /// Returns true if this page may advance the cursor
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "SUCCESS"),
            Self::Failure => write!(f, "FAILURE"),
        }
    }
}

/// One fetch result: a bounded batch of articles plus a status
#[derive(Debug, Clone, PartialEq)]
pub struct FeedPage {
    pub status: PageStatus,
    pub message_code: Option<String>,
    pub user_message: Option<String>,
    pub developer_message: Option<String>,

    /// Articles in response order; empty when no new articles exist
    pub articles: Vec<Article>,
}

/// A single feed item
///
/// `sequence_id` is the monotonic position marker used as the next cursor;
/// the remaining fields are descriptive payload reported downstream as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Monotonic per-feed position; the cursor after consuming this article
    pub sequence_id: i64,

    /// Stable article identifier
    pub id: i64,

    pub title: Option<String>,
    pub url: Option<String>,
    pub content: Option<String>,
    pub content_with_markup: Option<String>,
    pub extract: Option<String>,
    pub language: Option<String>,
    pub language_code: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub word_count: Option<i64>,
    pub published_date: Option<DateTime<Utc>>,
    pub harvest_date: Option<DateTime<Utc>>,
    pub embargo_date: Option<DateTime<Utc>>,
    pub license_end_date: Option<DateTime<Utc>>,
    pub comments_url: Option<String>,
    #[serde(default)]
    pub outbound_urls: Vec<String>,
    pub data_format: Option<String>,
    pub copyright: Option<String>,
    pub login_status: Option<String>,
    pub duplicate_group_id: Option<i64>,
    #[serde(default)]
    pub adult_language: bool,

    /// Licenses attached to this article, if any
    #[serde(default)]
    pub licenses: Vec<License>,
}

impl Article {
    /// Returns true if this article carries at least one license
    pub fn is_licensed(&self) -> bool {
        !self.licenses.is_empty()
    }
}

/// A content license attached to an article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub name: Option<String>,
}
