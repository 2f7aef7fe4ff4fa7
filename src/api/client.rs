//! Async contract the controllers fetch through.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::models::{Activity, Backing, Project, Update};

/// Opaque pagination position token.
///
/// Controllers never inspect the contents; they only hand the token back to
/// the service to request the next page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor(pub String);

/// One page of a project's activity feed.
///
/// `next_cursor: None` signals exhaustion explicitly; an empty page with a
/// cursor present is not the end of the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityPage {
    pub activities: Vec<Activity>,
    pub next_cursor: Option<Cursor>,
}

/// The network client as the core sees it.
///
/// All calls are single-shot and asynchronous; results are delivered back
/// onto the calling controller's timeline via its settle loop. The core
/// never retries: retry is a user-initiated re-invocation of the same
/// intent.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Fetch one page of a project's activity feed. `cursor: None` requests
    /// the first page.
    async fn fetch_project_activities(
        &self,
        project: &Project,
        cursor: Option<&Cursor>,
    ) -> Result<ActivityPage, ApiError>;

    /// Fetch a project by id.
    async fn fetch_project(&self, id: i64) -> Result<Project, ApiError>;

    /// Fetch a user's backing of a project.
    async fn fetch_backing(&self, project_id: i64, user_id: i64) -> Result<Backing, ApiError>;

    /// Publish a draft update. Single-shot write; the caller's state machine
    /// guarantees at most one outstanding call.
    async fn publish_update(&self, update_id: i64) -> Result<Update, ApiError>;
}
