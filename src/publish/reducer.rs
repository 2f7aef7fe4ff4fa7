//! Reducer for the publish flow.

use crate::api::ApiError;
use crate::format;
use crate::models::Update;
use crate::mvi::{Reducer, Step};

use super::intent::PublishIntent;
use super::state::PublishState;

/// Effects the controller performs around a publish transition.
#[derive(Debug)]
pub enum PublishEffect {
    /// Show the confirmation prompt with this copy.
    ShowConfirmation(String),
    /// Issue the one publish call.
    Publish { update_id: i64 },
    /// Navigate to the published update.
    NavigateToUpdate { update: Update },
    /// Surface the failed attempt.
    ShowFailure(ApiError),
}

/// Reducer for publish state transitions.
///
/// Transitions are defined only from valid source states; everything else
/// is an explicit no-op rather than an incidental boolean guard.
pub struct PublishReducer;

impl Reducer for PublishReducer {
    type State = PublishState;
    type Intent = PublishIntent;
    type Effect = PublishEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Step<Self::State, Self::Effect> {
        match intent {
            PublishIntent::PublishButtonTapped { backers_count } => {
                if !state.can_request_confirmation() {
                    return Step::state(state);
                }
                Step::with(
                    PublishState::PendingConfirmation,
                    PublishEffect::ShowConfirmation(confirmation_copy(backers_count)),
                )
            }

            PublishIntent::ConfirmationConfirmed { update_id } => match state {
                PublishState::PendingConfirmation => Step::with(
                    PublishState::Publishing,
                    PublishEffect::Publish { update_id },
                ),
                // Re-entrant confirms (double taps while publishing) must
                // not issue a second call.
                other => Step::state(other),
            },

            PublishIntent::ConfirmationCanceled => match state {
                PublishState::PendingConfirmation => Step::state(PublishState::Configured),
                other => Step::state(other),
            },

            PublishIntent::PublishSettled { result } => match state {
                PublishState::Publishing => match result {
                    Ok(update) => Step::with(
                        PublishState::Published,
                        PublishEffect::NavigateToUpdate { update },
                    ),
                    Err(error) => {
                        Step::with(PublishState::Failed, PublishEffect::ShowFailure(error))
                    }
                },
                other => {
                    tracing::debug!("dropping publish result outside Publishing");
                    Step::state(other)
                }
            },
        }
    }
}

/// Confirmation copy, computed once from the backer count known at tap
/// time.
fn confirmation_copy(backers_count: i64) -> String {
    format!(
        "This will notify {} backers that a new update is available. Are you sure you want to post?",
        format::whole_number(backers_count)
    )
}
