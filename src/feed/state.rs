//! State for the activity feed.

use crate::api::Cursor;
use crate::models::{Activity, Project};
use crate::mvi::UiState;

/// Reconciled feed state.
///
/// Fetch slots hold the sequence number of the one outstanding operation of
/// their class; a completion whose sequence no longer matches its slot is
/// stale and must be discarded. The cursor advances only on a successful
/// load, and `is_loading`/`is_refreshing` are never both true.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedState {
    pub project: Option<Project>,
    pub activities: Vec<Activity>,
    /// Token for the next page; `None` after exhaustion or before the first
    /// settle.
    pub next_cursor: Option<Cursor>,
    /// The collaborator reported no further pages.
    pub exhausted: bool,
    pub is_loading: bool,
    pub is_refreshing: bool,
    /// At least one fetch reached a terminal outcome for this configuration.
    pub settled_once: bool,
    /// Whether the last committed batch should be grouped by date; polled
    /// from the accessibility signal per batch, not persisted across
    /// configurations.
    pub grouped_dates: bool,
    /// The view is visible.
    pub activated: bool,
    /// The initial fetch has been issued for this configuration.
    pub initial_requested: bool,
    /// Monotonic sequence source for fetch slots.
    pub next_seq: u64,
    pub in_flight_load: Option<u64>,
    pub in_flight_refresh: Option<u64>,
}

impl UiState for FeedState {}

impl FeedState {
    /// True while any fetch of either class is outstanding.
    pub fn is_fetch_outstanding(&self) -> bool {
        self.in_flight_load.is_some() || self.in_flight_refresh.is_some()
    }

    /// Whether a next-page request may be issued right now.
    pub fn can_load_next_page(&self) -> bool {
        self.settled_once
            && !self.exhausted
            && self.next_cursor.is_some()
            && !self.is_fetch_outstanding()
    }
}

/// The value batch a list view renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectActivityData {
    pub project: Project,
    pub activities: Vec<Activity>,
    pub grouped_dates: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_nothing_outstanding() {
        let state = FeedState::default();
        assert!(!state.is_fetch_outstanding());
        assert!(!state.can_load_next_page());
    }

    #[test]
    fn outstanding_load_blocks_next_page() {
        let state = FeedState {
            settled_once: true,
            next_cursor: Some(Cursor("p2".into())),
            in_flight_load: Some(3),
            ..FeedState::default()
        };
        assert!(state.is_fetch_outstanding());
        assert!(!state.can_load_next_page());
    }

    #[test]
    fn settled_feed_with_cursor_can_paginate() {
        let state = FeedState {
            settled_once: true,
            next_cursor: Some(Cursor("p2".into())),
            ..FeedState::default()
        };
        assert!(state.can_load_next_page());
    }

    #[test]
    fn exhausted_feed_cannot_paginate() {
        let state = FeedState {
            settled_once: true,
            exhausted: true,
            ..FeedState::default()
        };
        assert!(!state.can_load_next_page());
    }
}
