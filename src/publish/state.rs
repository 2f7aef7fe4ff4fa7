//! State machine for the publish flow.

use crate::mvi::UiState;

/// Publish flow states.
///
/// Holds at most one in-flight publish: the only path into `Publishing` is
/// a confirmation from `PendingConfirmation`, and re-entrant intents while
/// publishing are explicit no-ops in the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishState {
    /// Draft bound, nothing asked of the user yet.
    #[default]
    Configured,

    /// Confirmation prompt is showing; no network call issued.
    PendingConfirmation,

    /// The one publish call is in flight.
    Publishing,

    /// Publish succeeded; the flow is finished.
    Published,

    /// Publish failed; tapping publish again retries from scratch.
    Failed,
}

impl UiState for PublishState {}

impl PublishState {
    /// Whether a publish-button tap may open the confirmation prompt.
    pub fn can_request_confirmation(&self) -> bool {
        matches!(self, Self::Configured | Self::Failed)
    }

    /// Check if the publish call is outstanding.
    pub fn is_publishing(&self) -> bool {
        matches!(self, Self::Publishing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_is_default() {
        assert_eq!(PublishState::default(), PublishState::Configured);
    }

    #[test]
    fn confirmation_allowed_from_configured_and_failed() {
        assert!(PublishState::Configured.can_request_confirmation());
        assert!(PublishState::Failed.can_request_confirmation());
        assert!(!PublishState::PendingConfirmation.can_request_confirmation());
        assert!(!PublishState::Publishing.can_request_confirmation());
        assert!(!PublishState::Published.can_request_confirmation());
    }

    #[test]
    fn is_publishing_check() {
        assert!(PublishState::Publishing.is_publishing());
        assert!(!PublishState::Configured.is_publishing());
    }
}
