use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A creator-authored project update post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub id: i64,
    pub project_id: i64,
    pub sequence: i64,
    pub title: String,
    pub body: String,
    pub is_public: bool,
    pub published_at: Option<DateTime<Utc>>,
}

/// An unpublished update being edited, previewed, and finally published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateDraft {
    pub update: Update,
}
