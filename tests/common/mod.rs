//! Shared test fixtures: entity templates and the mock API service.

#![allow(dead_code)]

pub mod mock_api;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tokio::sync::mpsc::UnboundedReceiver;

use pledgekit::api::{ActivityPage, Cursor};
use pledgekit::env::{Environment, ServerConfig, SharedEnvironment};
use pledgekit::models::{
    Activity, ActivityCategory, Avatar, Backing, Comment, Message, MessageThread, Project,
    ProjectState, ProjectStats, Update, User,
};

pub fn server_config() -> ServerConfig {
    ServerConfig {
        api_base_url: "https://api.example.com".into(),
        client_id: "deadbeef".into(),
        currency: "USD".into(),
    }
}

pub fn test_env() -> SharedEnvironment {
    Arc::new(Environment::new(server_config()))
}

pub fn avatar() -> Avatar {
    Avatar {
        small: "https://img.example.com/s.jpg".into(),
        medium: "https://img.example.com/m.jpg".into(),
        large: "https://img.example.com/l.jpg".into(),
    }
}

pub fn user(id: i64) -> User {
    User {
        id,
        name: format!("user-{id}"),
        avatar: avatar(),
    }
}

pub fn project(id: i64) -> Project {
    Project {
        id,
        name: format!("project-{id}"),
        state: ProjectState::Live,
        stats: ProjectStats {
            backers_count: 10,
            pledged: 500.0,
            goal: 1_000.0,
        },
    }
}

pub fn update(id: i64, project_id: i64) -> Update {
    Update {
        id,
        project_id,
        sequence: 1,
        title: "Big news".into(),
        body: "We did the thing.".into(),
        is_public: false,
        published_at: None,
    }
}

pub fn backing(project_id: i64) -> Backing {
    Backing {
        id: 77,
        project_id,
        backer_id: 9,
        amount: 25.0,
        sequence: 1,
    }
}

pub fn comment(id: i64) -> Comment {
    Comment {
        id,
        author: user(1),
        body: "Love this project!".into(),
        created_at: Utc.with_ymd_and_hms(2025, 8, 5, 12, 0, 0).unwrap(),
        deleted_at: None,
    }
}

pub fn activity(id: i64, category: ActivityCategory) -> Activity {
    Activity {
        id,
        category,
        created_at: Utc.with_ymd_and_hms(2025, 8, 5, 12, 0, 0).unwrap(),
        project: None,
        update: None,
        comment: None,
        backing: None,
        user: Some(user(9)),
    }
}

pub fn page(ids: &[i64], next: Option<&str>) -> ActivityPage {
    ActivityPage {
        activities: ids
            .iter()
            .map(|&id| activity(id, ActivityCategory::Update))
            .collect(),
        next_cursor: next.map(|c| Cursor(c.into())),
    }
}

pub fn thread(id: i64, unread: u32) -> MessageThread {
    MessageThread {
        id,
        project: project(42),
        participant: user(2),
        last_message: Message {
            id: id * 100,
            sender: user(2),
            body: "Thanks for backing!".into(),
            sent_at: Utc.with_ymd_and_hms(2025, 8, 5, 9, 30, 0).unwrap(),
        },
        unread_messages_count: unread,
    }
}

/// Collect every value currently buffered on a receiver.
pub fn drain<T>(rx: &mut UnboundedReceiver<T>) -> Vec<T> {
    let mut out = Vec::new();
    while let Ok(value) = rx.try_recv() {
        out.push(value);
    }
    out
}
