//! Intents for the publish flow.

use crate::api::ApiError;
use crate::models::Update;
use crate::mvi::Intent;

/// Intents dispatched to the publish reducer.
#[derive(Debug)]
pub enum PublishIntent {
    /// Publish button tapped. Carries the backer count known at this
    /// moment; the confirmation copy is computed from it once and never
    /// re-derived.
    PublishButtonTapped { backers_count: i64 },

    /// User confirmed the prompt for the given draft update.
    ConfirmationConfirmed { update_id: i64 },

    /// User dismissed the prompt.
    ConfirmationCanceled,

    /// The publish call settled.
    PublishSettled { result: Result<Update, ApiError> },
}

impl Intent for PublishIntent {}
