//! Navigation classification for feed rows.
//!
//! A tapped activity is dispatched over its category tag to a destination
//! variant carrying the entities the target screen needs. Categories with
//! no detail screen produce no navigation at all.

use crate::models::{Activity, ActivityCategory, Backing, Comment, Project, Update};

/// Where a feed interaction navigates to.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedDestination {
    Backing {
        project: Project,
        backing: Backing,
    },
    /// Comments on an update when `update` is present, on the project
    /// otherwise.
    Comments {
        project: Project,
        update: Option<Update>,
    },
    ProjectPage {
        project: Project,
    },
    SendMessage {
        project: Project,
        backing: Backing,
    },
    SendReply {
        project: Project,
        update: Option<Update>,
        comment: Comment,
    },
    UpdatePage {
        project: Project,
        update: Update,
    },
}

/// Classify a tapped activity. Returns `None` when the category has no
/// destination or the activity is missing the sub-entity the destination
/// requires.
pub fn destination(activity: &Activity, project: &Project) -> Option<FeedDestination> {
    match activity.category {
        ActivityCategory::Backing => {
            activity.backing.clone().map(|backing| FeedDestination::Backing {
                project: project.clone(),
                backing,
            })
        }

        ActivityCategory::CommentPost => Some(FeedDestination::Comments {
            project: project.clone(),
            update: activity.update.clone(),
        }),

        ActivityCategory::CommentProject => Some(FeedDestination::Comments {
            project: project.clone(),
            update: None,
        }),

        ActivityCategory::Cancellation
        | ActivityCategory::Failure
        | ActivityCategory::Launch
        | ActivityCategory::Success
        | ActivityCategory::Suspension => Some(FeedDestination::ProjectPage {
            project: project.clone(),
        }),

        ActivityCategory::Update => {
            activity.update.clone().map(|update| FeedDestination::UpdatePage {
                project: project.clone(),
                update,
            })
        }

        // Pledge adjustments, follows and watches have no detail screen.
        ActivityCategory::BackingAmount
        | ActivityCategory::BackingCanceled
        | ActivityCategory::BackingDropped
        | ActivityCategory::BackingReward
        | ActivityCategory::Follow
        | ActivityCategory::Watch
        | ActivityCategory::Unknown => None,
    }
}
