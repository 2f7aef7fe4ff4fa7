//! State for a message-thread row.

use std::collections::HashSet;

use crate::models::MessageThread;
use crate::mvi::UiState;

/// A thread row's bound entity plus the ids whose unread indicator has been
/// suppressed by selection.
///
/// Suppression is sticky: deselecting never restores the indicator, and a
/// previously selected id stays suppressed even when re-bound later. Only
/// binding a different id shows the indicator again.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThreadRowState {
    pub thread: Option<MessageThread>,
    pub suppressed_ids: HashSet<i64>,
}

impl UiState for ThreadRowState {}

impl ThreadRowState {
    /// Whether the unread indicator is hidden for the bound thread.
    pub fn unread_indicator_hidden(&self) -> Option<bool> {
        self.thread
            .as_ref()
            .map(|t| t.unread_messages_count == 0 || self.suppressed_ids.contains(&t.id))
    }

    /// Record a selection of the bound thread.
    pub fn suppress_current(&mut self) {
        if let Some(thread) = &self.thread {
            self.suppressed_ids.insert(thread.id);
        }
    }
}
