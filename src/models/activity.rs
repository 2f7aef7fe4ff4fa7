use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::project::{Backing, Project};
use super::update::Update;
use super::user::User;

/// A single entry in a project's activity feed.
///
/// Which optional sub-entities are populated depends on the category:
/// backing activities carry a backing, comment activities carry a comment
/// (and, for update comments, the update), and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub category: ActivityCategory,
    pub created_at: DateTime<Utc>,
    pub project: Option<Project>,
    pub update: Option<Update>,
    pub comment: Option<Comment>,
    pub backing: Option<Backing>,
    pub user: Option<User>,
}

/// Tag dispatched over when classifying an activity for navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityCategory {
    Backing,
    BackingAmount,
    BackingCanceled,
    BackingDropped,
    BackingReward,
    Cancellation,
    CommentPost,
    CommentProject,
    Failure,
    Follow,
    Launch,
    Success,
    Suspension,
    Update,
    Watch,
    Unknown,
}

/// A comment attached to a project or one of its updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub author: User,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
