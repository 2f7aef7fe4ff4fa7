//! Controller driving the publish flow and its preview surface.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::api::{ApiError, ApiService};
use crate::env::SharedEnvironment;
use crate::models::{Project, Update, UpdateDraft};
use crate::mvi::Reducer;
use crate::stream::EventStream;

use super::intent::PublishIntent;
use super::preview::{self, NavigationPolicy};
use super::reducer::{PublishEffect, PublishReducer};
use super::state::PublishState;

/// Completions delivered back onto the controller's timeline.
enum PublishEvent {
    ProjectFetched(Result<Project, ApiError>),
    PublishSettled(Result<Update, ApiError>),
}

type PendingTask = Pin<Box<dyn Future<Output = PublishEvent> + Send>>;

/// Output streams the preview screen subscribes to.
///
/// All four are one-shot event streams: a second identical confirmation
/// prompt or load request is meaningful and must be delivered.
#[derive(Default)]
pub struct PublishOutputs {
    /// Next URL the preview web view should load.
    pub web_view_load_request: EventStream<String>,
    pub show_publish_confirmation: EventStream<String>,
    /// Exactly one event per failed publish attempt.
    pub show_publish_failure: EventStream<ApiError>,
    /// Exactly one event per successful publish, carrying the entities the
    /// update screen needs.
    pub go_to_update: EventStream<(Project, Update)>,
}

/// Reactive controller for previewing and publishing a drafted update.
pub struct PublishController {
    machine: PublishState,
    draft: Option<UpdateDraft>,
    project: Option<Project>,
    viewed: bool,
    api: Arc<dyn ApiService>,
    env: SharedEnvironment,
    pending: VecDeque<PendingTask>,
    outputs: PublishOutputs,
}

impl PublishController {
    pub fn new(api: Arc<dyn ApiService>, env: SharedEnvironment) -> Self {
        Self {
            machine: PublishState::default(),
            draft: None,
            project: None,
            viewed: false,
            api,
            env,
            pending: VecDeque::new(),
            outputs: PublishOutputs::default(),
        }
    }

    /// The output surface. Subscribe before dispatching intents.
    pub fn outputs(&mut self) -> &mut PublishOutputs {
        &mut self.outputs
    }

    /// Current machine state, for embedders that need to inspect it.
    pub fn state(&self) -> PublishState {
        self.machine
    }

    // Intent surface.

    /// Bind the flow to a draft. Re-binding resets the machine.
    pub fn configure_with(&mut self, draft: UpdateDraft) {
        self.draft = Some(draft);
        self.project = None;
        self.viewed = false;
        self.machine = PublishState::default();
    }

    /// The view became visible: load the preview and prefetch the project
    /// whose backer count feeds the confirmation copy.
    pub fn view_did_load(&mut self) {
        if self.viewed {
            return;
        }
        let Some(draft) = self.draft.clone() else {
            return;
        };
        self.viewed = true;

        let url = preview::initial_url(
            self.env.server(),
            draft.update.project_id,
            draft.update.id,
        );
        self.outputs.web_view_load_request.push(url);

        let api = Arc::clone(&self.api);
        self.pending.push_back(Box::pin(async move {
            PublishEvent::ProjectFetched(api.fetch_project(draft.update.project_id).await)
        }));
    }

    /// Publish button tapped. Ignored until the project prefetch has
    /// landed, since the confirmation copy needs the backer count.
    pub fn publish_button_tapped(&mut self) {
        let Some(project) = &self.project else {
            tracing::debug!("publish tapped before project prefetch settled");
            return;
        };
        self.dispatch(PublishIntent::PublishButtonTapped {
            backers_count: project.stats.backers_count,
        });
    }

    /// User confirmed the prompt.
    pub fn confirmation_confirmed(&mut self) {
        let Some(draft) = &self.draft else {
            return;
        };
        self.dispatch(PublishIntent::ConfirmationConfirmed {
            update_id: draft.update.id,
        });
    }

    /// User dismissed the prompt.
    pub fn confirmation_canceled(&mut self) {
        self.dispatch(PublishIntent::ConfirmationCanceled);
    }

    /// Navigation-decision callback from the web view. Never blocks: a
    /// host-bearing target that lost the auth query is re-emitted with it
    /// re-appended; anything else proceeds as-is.
    pub fn decide_policy(&mut self, url: &str) -> NavigationPolicy {
        let prepared = preview::prepared_url(url, self.env.server());
        if prepared != url {
            self.outputs.web_view_load_request.push(prepared);
        }
        NavigationPolicy::Allow
    }

    /// Drive every queued collaborator call to completion and apply the
    /// results in dispatch order.
    pub async fn settle(&mut self) {
        while let Some(task) = self.pending.pop_front() {
            match task.await {
                PublishEvent::ProjectFetched(Ok(project)) => self.project = Some(project),
                PublishEvent::ProjectFetched(Err(error)) => {
                    // Without the project the confirmation copy cannot be
                    // computed; taps stay ignored until a re-configure.
                    tracing::warn!(kind = error.kind(), "project prefetch failed");
                }
                PublishEvent::PublishSettled(result) => {
                    self.dispatch(PublishIntent::PublishSettled { result });
                }
            }
        }
    }

    fn dispatch(&mut self, intent: PublishIntent) {
        let step = PublishReducer::reduce(self.machine, intent);
        self.machine = step.state;
        for effect in step.effects {
            self.perform(effect);
        }
    }

    fn perform(&mut self, effect: PublishEffect) {
        match effect {
            PublishEffect::ShowConfirmation(copy) => {
                self.outputs.show_publish_confirmation.push(copy);
            }

            PublishEffect::Publish { update_id } => {
                tracing::info!(update_id, "publishing update");
                let api = Arc::clone(&self.api);
                self.pending.push_back(Box::pin(async move {
                    PublishEvent::PublishSettled(api.publish_update(update_id).await)
                }));
            }

            PublishEffect::NavigateToUpdate { update } => {
                let Some(project) = self.project.clone() else {
                    tracing::debug!("publish succeeded without a prefetched project");
                    return;
                };
                self.outputs.go_to_update.push((project, update));
            }

            PublishEffect::ShowFailure(error) => {
                tracing::warn!(kind = error.kind(), "publish failed");
                self.outputs.show_publish_failure.push(error);
            }
        }
    }
}
