use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::project::Project;
use super::user::User;

/// A direct-message conversation between a backer and a creator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageThread {
    pub id: i64,
    pub project: Project,
    pub participant: User,
    pub last_message: Message,
    pub unread_messages_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub sender: User,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}
