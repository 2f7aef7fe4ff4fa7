//! Reducer for the activity feed.

use crate::api::{ApiError, Cursor};
use crate::models::{Project, User};
use crate::mvi::{Reducer, Step};

use super::intent::{FeedIntent, FetchKind};
use super::nav::{self, FeedDestination};
use super::state::FeedState;

/// Rows from the end of the list within which a next-page fetch fires.
pub const LOAD_MORE_WINDOW: usize = 2;

/// Effects the controller performs around a feed transition.
#[derive(Debug)]
pub enum FeedEffect {
    /// Issue a feed fetch for the given slot sequence.
    Fetch {
        seq: u64,
        kind: FetchKind,
        project: Project,
        cursor: Option<Cursor>,
    },
    /// Resolve a user's backing before navigating to it.
    FetchBacking { project: Project, user: User },
    /// One-shot navigation event.
    Navigate(FeedDestination),
    /// Surface a fetch failure to the error stream.
    EmitError(ApiError),
}

/// Reducer for feed state transitions.
///
/// Pure apart from trace logging; all fetch I/O and stream pushes are
/// handled by the controller around the dispatch call.
pub struct FeedReducer;

impl Reducer for FeedReducer {
    type State = FeedState;
    type Intent = FeedIntent;
    type Effect = FeedEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Step<Self::State, Self::Effect> {
        match intent {
            FeedIntent::Configure { project } => {
                let same_project = state
                    .project
                    .as_ref()
                    .is_some_and(|current| current.id == project.id);

                if same_project {
                    let mut state = state;
                    state.project = Some(project);
                    return Step::state(state);
                }

                // A different project invalidates everything accumulated so
                // far; outstanding fetch slots are abandoned, so their
                // results no longer match and get dropped on arrival.
                let fresh = FeedState {
                    project: Some(project),
                    activated: state.activated,
                    ..FeedState::default()
                };
                if fresh.activated {
                    issue_initial(fresh)
                } else {
                    Step::state(fresh)
                }
            }

            FeedIntent::ViewDidLoad => {
                let mut state = state;
                state.activated = true;
                if state.project.is_some() && !state.initial_requested {
                    issue_initial(state)
                } else {
                    Step::state(state)
                }
            }

            FeedIntent::Refresh => {
                let Some(project) = state.project.clone() else {
                    return Step::state(state);
                };

                // A newer refresh supersedes an older in-flight one; the old
                // sequence no longer matches its slot and is dropped on
                // arrival. An in-flight load-more keeps its slot for now;
                // the refresh result clears it if it lands first.
                let mut state = state;
                state.next_seq += 1;
                let seq = state.next_seq;
                state.in_flight_refresh = Some(seq);
                state.is_refreshing = true;
                state.is_loading = false;
                Step::with(
                    state,
                    FeedEffect::Fetch {
                        seq,
                        kind: FetchKind::Refresh,
                        project,
                        cursor: None,
                    },
                )
            }

            FeedIntent::WillDisplayRow { row, total } => {
                let near_bottom = total > 0 && row + LOAD_MORE_WINDOW >= total;
                if !near_bottom || !state.can_load_next_page() {
                    return Step::state(state);
                }
                let (Some(project), Some(cursor)) =
                    (state.project.clone(), state.next_cursor.clone())
                else {
                    return Step::state(state);
                };

                let mut state = state;
                state.next_seq += 1;
                let seq = state.next_seq;
                state.in_flight_load = Some(seq);
                state.is_loading = true;
                Step::with(
                    state,
                    FeedEffect::Fetch {
                        seq,
                        kind: FetchKind::NextPage,
                        project,
                        cursor: Some(cursor),
                    },
                )
            }

            FeedIntent::ActivityTapped { activity, project } => {
                match nav::destination(&activity, &project) {
                    Some(dest) => Step::with(state, FeedEffect::Navigate(dest)),
                    None => Step::state(state),
                }
            }

            FeedIntent::GoToBacking { project, backing } => Step::with(
                state,
                FeedEffect::Navigate(FeedDestination::Backing { project, backing }),
            ),

            FeedIntent::GoToSendMessage { project, backing } => Step::with(
                state,
                FeedEffect::Navigate(FeedDestination::SendMessage { project, backing }),
            ),

            FeedIntent::GoToSendReply {
                project,
                update,
                comment,
            } => Step::with(
                state,
                FeedEffect::Navigate(FeedDestination::SendReply {
                    project,
                    update,
                    comment,
                }),
            ),

            FeedIntent::GoToBackingForUser { project, user } => {
                Step::with(state, FeedEffect::FetchBacking { project, user })
            }

            FeedIntent::FetchSettled {
                seq,
                kind,
                result,
                grouped_dates,
            } => reduce_fetch_settled(state, seq, kind, result, grouped_dates),

            FeedIntent::BackingFetched { project, result } => match result {
                Ok(backing) => Step::with(
                    state,
                    FeedEffect::Navigate(FeedDestination::Backing { project, backing }),
                ),
                Err(error) => {
                    // Delegate navigation is best-effort; nothing to show.
                    tracing::debug!(kind = error.kind(), "backing lookup failed, not navigating");
                    Step::state(state)
                }
            },
        }
    }
}

/// Begin the one initial fetch this configuration gets.
fn issue_initial(mut state: FeedState) -> Step<FeedState, FeedEffect> {
    let Some(project) = state.project.clone() else {
        return Step::state(state);
    };
    state.initial_requested = true;
    state.next_seq += 1;
    let seq = state.next_seq;
    state.in_flight_load = Some(seq);
    state.is_loading = true;
    Step::with(
        state,
        FeedEffect::Fetch {
            seq,
            kind: FetchKind::Initial,
            project,
            cursor: None,
        },
    )
}

fn reduce_fetch_settled(
    state: FeedState,
    seq: u64,
    kind: FetchKind,
    result: Result<crate::api::ActivityPage, ApiError>,
    grouped_dates: bool,
) -> Step<FeedState, FeedEffect> {
    let slot = match kind {
        FetchKind::Refresh => state.in_flight_refresh,
        FetchKind::Initial | FetchKind::NextPage => state.in_flight_load,
    };
    if slot != Some(seq) {
        tracing::debug!(seq, ?kind, "dropping stale fetch result");
        return Step::state(state);
    }

    let mut state = state;
    match kind {
        FetchKind::Refresh => {
            state.in_flight_refresh = None;
            state.is_refreshing = false;
        }
        FetchKind::Initial | FetchKind::NextPage => {
            state.in_flight_load = None;
            state.is_loading = false;
        }
    }
    state.settled_once = true;

    match result {
        Ok(page) => {
            match kind {
                FetchKind::Initial | FetchKind::Refresh => {
                    state.activities = page.activities;
                    if kind == FetchKind::Refresh {
                        // The refresh result landed first: abandon any
                        // in-flight load-more so its result is dropped.
                        state.in_flight_load = None;
                        state.is_loading = false;
                    }
                }
                FetchKind::NextPage => state.activities.extend(page.activities),
            }
            state.next_cursor = page.next_cursor;
            state.exhausted = state.next_cursor.is_none();
            state.grouped_dates = grouped_dates;
            Step::state(state)
        }
        Err(error) => {
            // Items stay at the pre-fetch snapshot; the user retries by
            // re-invoking the same intent.
            Step::with(state, FeedEffect::EmitError(error))
        }
    }
}
