//! Controller driving the activity feed.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::api::{ApiError, ApiService};
use crate::env::SharedEnvironment;
use crate::models::{Activity, Backing, Comment, Project, Update, User};
use crate::mvi::Reducer;
use crate::stream::{EventStream, ValueStream};

use super::intent::FeedIntent;
use super::nav::FeedDestination;
use super::reducer::{FeedEffect, FeedReducer};
use super::state::{FeedState, ProjectActivityData};

type PendingFetch = Pin<Box<dyn Future<Output = FeedIntent> + Send>>;

/// Output streams the list view subscribes to.
#[derive(Default)]
pub struct FeedOutputs {
    /// The batch to render: project, activities, and the per-batch grouping
    /// flag. Emitted only after a fetch settles.
    pub project_activity_data: ValueStream<ProjectActivityData>,
    pub is_refreshing: ValueStream<bool>,
    /// True iff the feed has settled at least once and holds no activities.
    pub show_empty_state: ValueStream<bool>,
    /// One-shot navigation events.
    pub go_to: EventStream<FeedDestination>,
    /// One event per failed fetch; the rendered list is left intact.
    pub errors: EventStream<ApiError>,
}

/// Reactive controller for a project's activity feed.
///
/// Intents are accepted immediately on the caller's timeline; fetches are
/// queued as futures and applied, in dispatch order, by [`settle`].
/// Overlapping operations are reconciled by the reducer's sequence slots,
/// so a superseded fetch result is dropped rather than cancelled.
///
/// [`settle`]: FeedController::settle
pub struct FeedController {
    state: FeedState,
    api: Arc<dyn ApiService>,
    env: SharedEnvironment,
    pending: VecDeque<PendingFetch>,
    outputs: FeedOutputs,
}

impl FeedController {
    pub fn new(api: Arc<dyn ApiService>, env: SharedEnvironment) -> Self {
        Self {
            state: FeedState::default(),
            api,
            env,
            pending: VecDeque::new(),
            outputs: FeedOutputs::default(),
        }
    }

    /// The output surface. Subscribe before dispatching intents.
    pub fn outputs(&mut self) -> &mut FeedOutputs {
        &mut self.outputs
    }

    /// Current reconciled state, for embedders that need to inspect it.
    pub fn state(&self) -> &FeedState {
        &self.state
    }

    // Intent surface.

    /// Bind the feed to a project.
    pub fn configure_with(&mut self, project: Project) {
        self.dispatch(FeedIntent::Configure { project });
    }

    /// The view became visible.
    pub fn view_did_load(&mut self) {
        self.dispatch(FeedIntent::ViewDidLoad);
    }

    /// Pull-to-refresh.
    pub fn refresh(&mut self) {
        self.dispatch(FeedIntent::Refresh);
    }

    /// A row is about to be displayed; near the bottom this requests the
    /// next page.
    pub fn will_display_row(&mut self, row: usize, total: usize) {
        self.dispatch(FeedIntent::WillDisplayRow { row, total });
    }

    /// A feed row was tapped.
    pub fn activity_tapped(&mut self, activity: Activity, project: Project) {
        self.dispatch(FeedIntent::ActivityTapped { activity, project });
    }

    /// Backing cell callback: open a backing it already resolved.
    pub fn backing_cell_go_to_backing(&mut self, project: Project, backing: Backing) {
        self.dispatch(FeedIntent::GoToBacking { project, backing });
    }

    /// Backing cell callback: open the message composer.
    pub fn backing_cell_go_to_send_message(&mut self, project: Project, backing: Backing) {
        self.dispatch(FeedIntent::GoToSendMessage { project, backing });
    }

    /// Comment cell callback: open the reply composer.
    pub fn comment_cell_go_to_send_reply(
        &mut self,
        project: Project,
        update: Option<Update>,
        comment: Comment,
    ) {
        self.dispatch(FeedIntent::GoToSendReply {
            project,
            update,
            comment,
        });
    }

    /// Comment cell callback: open a user's backing, resolving it first.
    pub fn comment_cell_go_to_backing(&mut self, project: Project, user: User) {
        self.dispatch(FeedIntent::GoToBackingForUser { project, user });
    }

    /// Drive every queued fetch to completion and apply the results in
    /// dispatch order. This is the boundary where collaborator completions
    /// re-enter the controller's timeline.
    pub async fn settle(&mut self) {
        while let Some(fetch) = self.pending.pop_front() {
            let intent = fetch.await;
            self.dispatch(intent);
        }
    }

    fn dispatch(&mut self, intent: FeedIntent) {
        let step = FeedReducer::reduce(self.state.clone(), intent);
        self.state = step.state;
        for effect in step.effects {
            self.perform(effect);
        }
        self.emit();
    }

    fn perform(&mut self, effect: FeedEffect) {
        match effect {
            FeedEffect::Fetch {
                seq,
                kind,
                project,
                cursor,
            } => {
                tracing::debug!(seq, ?kind, project = project.id, "issuing feed fetch");
                let api = Arc::clone(&self.api);
                let env = Arc::clone(&self.env);
                self.pending.push_back(Box::pin(async move {
                    let result = api
                        .fetch_project_activities(&project, cursor.as_ref())
                        .await;
                    // The batch is produced here, so the grouping signal is
                    // polled here, not at subscribe or configure time.
                    let grouped_dates = !env.is_assistive_navigation_active();
                    FeedIntent::FetchSettled {
                        seq,
                        kind,
                        result,
                        grouped_dates,
                    }
                }));
            }

            FeedEffect::FetchBacking { project, user } => {
                let api = Arc::clone(&self.api);
                self.pending.push_back(Box::pin(async move {
                    let result = api.fetch_backing(project.id, user.id).await;
                    FeedIntent::BackingFetched { project, result }
                }));
            }

            FeedEffect::Navigate(destination) => self.outputs.go_to.push(destination),

            FeedEffect::EmitError(error) => {
                if let ApiError::Decode { reason } = &error {
                    tracing::warn!(%reason, "feed fetch returned an undecodable payload");
                }
                self.outputs.errors.push(error);
            }
        }
    }

    /// Project the reconciled state onto the value streams. Streams dedup,
    /// so re-projecting an unchanged state emits nothing.
    fn emit(&mut self) {
        self.outputs.is_refreshing.push(self.state.is_refreshing);

        if !self.state.settled_once {
            return;
        }
        if let Some(project) = &self.state.project {
            self.outputs
                .project_activity_data
                .push(ProjectActivityData {
                    project: project.clone(),
                    activities: self.state.activities.clone(),
                    grouped_dates: self.state.grouped_dates,
                });
        }
        self.outputs
            .show_empty_state
            .push(self.state.activities.is_empty());
    }
}
