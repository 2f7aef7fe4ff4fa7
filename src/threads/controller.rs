//! Controller for a message-thread row.

use crate::env::SharedEnvironment;
use crate::models::MessageThread;
use crate::stream::ValueStream;

use super::state::ThreadRowState;

/// Output streams a thread row renders from.
#[derive(Default)]
pub struct ThreadRowOutputs {
    pub date: ValueStream<String>,
    pub date_accessibility_label: ValueStream<String>,
    pub message_body: ValueStream<String>,
    pub participant_avatar_url: ValueStream<String>,
    pub participant_name: ValueStream<String>,
    pub project_name: ValueStream<String>,
    /// Hidden unless the current actor sent the last message.
    pub reply_indicator_hidden: ValueStream<bool>,
    /// Hidden iff the thread has no unread messages or its id was ever
    /// selected in this row.
    pub unread_indicator_hidden: ValueStream<bool>,
}

/// Reactive controller for one row in the message-threads list.
///
/// Binding a different thread id fully replaces the displayed state; the
/// suppression set survives re-binds so a selected thread stays marked
/// read for the life of the row.
pub struct ThreadRowController {
    state: ThreadRowState,
    env: SharedEnvironment,
    outputs: ThreadRowOutputs,
}

impl ThreadRowController {
    pub fn new(env: SharedEnvironment) -> Self {
        Self {
            state: ThreadRowState::default(),
            env,
            outputs: ThreadRowOutputs::default(),
        }
    }

    /// The output surface. Subscribe before dispatching intents.
    pub fn outputs(&mut self) -> &mut ThreadRowOutputs {
        &mut self.outputs
    }

    /// Bind the row to a thread.
    pub fn configure_with(&mut self, thread: MessageThread) {
        self.state.thread = Some(thread);
        self.emit();
    }

    /// Selection change from the list. Selecting suppresses the unread
    /// indicator without clearing the underlying count; deselecting never
    /// restores it.
    pub fn set_selected(&mut self, selected: bool) {
        if !selected {
            return;
        }
        self.state.suppress_current();
        self.emit();
    }

    /// Project the bound thread onto the value streams. The current actor
    /// is read here, at projection time, so the reply indicator reflects
    /// whoever is signed in when the row renders.
    fn emit(&mut self) {
        let Some(thread) = self.state.thread.clone() else {
            return;
        };

        self.outputs
            .date
            .push(thread.last_message.sent_at.format("%b %-d, %Y").to_string());
        self.outputs.date_accessibility_label.push(
            thread
                .last_message
                .sent_at
                .format("%A, %B %-d, %Y")
                .to_string(),
        );
        self.outputs.message_body.push(thread.last_message.body.clone());
        self.outputs
            .participant_avatar_url
            .push(thread.participant.avatar.medium.clone());
        self.outputs
            .participant_name
            .push(thread.participant.name.clone());
        self.outputs.project_name.push(thread.project.name.clone());

        let actor_sent_last = self
            .env
            .current_actor()
            .is_some_and(|actor| actor.id == thread.last_message.sender.id);
        self.outputs.reply_indicator_hidden.push(!actor_sent_last);

        if let Some(hidden) = self.state.unread_indicator_hidden() {
            self.outputs.unread_indicator_hidden.push(hidden);
        }
    }
}
