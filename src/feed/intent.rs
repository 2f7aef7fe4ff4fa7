//! Intents for the activity feed.

use crate::api::{ActivityPage, ApiError};
use crate::models::{Activity, Backing, Comment, Project, Update, User};
use crate::mvi::Intent;

/// Which logical fetch slot an operation occupies.
///
/// Initial loads and next-page loads share the load slot (and the
/// `is_loading` flag); refreshes own their own slot so an in-flight
/// load-more is never confused with a pull-to-refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Initial,
    Refresh,
    NextPage,
}

/// Intents dispatched to the feed reducer.
#[derive(Debug)]
pub enum FeedIntent {
    /// Bind the feed to a project. Idempotent for the same project id; a
    /// different id resets all paginated state.
    Configure { project: Project },

    /// View became visible. Triggers the initial fetch exactly once per
    /// configuration.
    ViewDidLoad,

    /// Pull-to-refresh.
    Refresh,

    /// A row is about to be displayed; may trigger the next-page fetch.
    WillDisplayRow { row: usize, total: usize },

    /// A feed row was tapped.
    ActivityTapped { activity: Activity, project: Project },

    /// Backing cell asks to open the backing it already resolved.
    GoToBacking { project: Project, backing: Backing },

    /// Backing cell asks to open the message composer.
    GoToSendMessage { project: Project, backing: Backing },

    /// Comment cell asks to open the reply composer.
    GoToSendReply {
        project: Project,
        update: Option<Update>,
        comment: Comment,
    },

    /// Comment cell asks to open a user's backing; the backing must be
    /// fetched first.
    GoToBackingForUser { project: Project, user: User },

    /// A feed fetch settled. `grouped_dates` carries the accessibility
    /// signal polled at the moment the batch was produced.
    FetchSettled {
        seq: u64,
        kind: FetchKind,
        result: Result<ActivityPage, ApiError>,
        grouped_dates: bool,
    },

    /// The delegate-initiated backing fetch settled.
    BackingFetched {
        project: Project,
        result: Result<Backing, ApiError>,
    },
}

impl Intent for FeedIntent {}
