mod common;

use std::sync::Arc;

use pledgekit::threads::ThreadRowController;

#[test]
fn configure_projects_every_display_value() {
    let mut row = ThreadRowController::new(common::test_env());
    let outputs = row.outputs();
    let mut date = outputs.date.subscribe();
    let mut date_a11y = outputs.date_accessibility_label.subscribe();
    let mut body = outputs.message_body.subscribe();
    let mut avatar = outputs.participant_avatar_url.subscribe();
    let mut name = outputs.participant_name.subscribe();
    let mut project_name = outputs.project_name.subscribe();
    let mut unread = outputs.unread_indicator_hidden.subscribe();

    row.configure_with(common::thread(1, 1));

    assert_eq!(common::drain(&mut date), vec!["Aug 5, 2025"]);
    assert_eq!(common::drain(&mut date_a11y), vec!["Tuesday, August 5, 2025"]);
    assert_eq!(common::drain(&mut body), vec!["Thanks for backing!"]);
    assert_eq!(
        common::drain(&mut avatar),
        vec!["https://img.example.com/m.jpg"]
    );
    assert_eq!(common::drain(&mut name), vec!["user-2"]);
    assert_eq!(common::drain(&mut project_name), vec!["project-42"]);
    assert_eq!(common::drain(&mut unread), vec![false]);
}

#[test]
fn zero_unread_hides_the_indicator() {
    let mut row = ThreadRowController::new(common::test_env());
    let mut unread = row.outputs().unread_indicator_hidden.subscribe();

    row.configure_with(common::thread(1, 0));
    assert_eq!(common::drain(&mut unread), vec![true]);
}

#[test]
fn selection_suppression_is_sticky_per_thread_id() {
    let mut row = ThreadRowController::new(common::test_env());
    let mut unread = row.outputs().unread_indicator_hidden.subscribe();

    let first = common::thread(1, 1);
    row.configure_with(first.clone());
    assert_eq!(common::drain(&mut unread), vec![false]);

    row.set_selected(true);
    assert_eq!(common::drain(&mut unread), vec![true]);

    // Deselecting never restores the indicator.
    row.set_selected(false);
    assert!(common::drain(&mut unread).is_empty());

    // A different thread with unread messages shows it again, regardless of
    // prior selection state.
    row.configure_with(common::thread(2, 3));
    assert_eq!(common::drain(&mut unread), vec![false]);

    // Re-binding the previously selected id stays suppressed.
    row.configure_with(first);
    assert_eq!(common::drain(&mut unread), vec![true]);
}

#[test]
fn reply_indicator_reflects_the_actor_at_render_time() {
    let env = common::test_env();
    let mut row = ThreadRowController::new(Arc::clone(&env));
    let mut reply = row.outputs().reply_indicator_hidden.subscribe();

    // Logged out: the last message cannot be ours.
    let thread = common::thread(1, 1);
    row.configure_with(thread.clone());
    assert_eq!(common::drain(&mut reply), vec![true]);

    // The sender logs in; re-rendering the same thread flips the indicator.
    env.login(common::user(2));
    row.configure_with(thread);
    assert_eq!(common::drain(&mut reply), vec![false]);
}

#[test]
fn selecting_an_unbound_row_emits_nothing() {
    let mut row = ThreadRowController::new(common::test_env());
    let mut unread = row.outputs().unread_indicator_hidden.subscribe();

    row.set_selected(true);
    assert!(common::drain(&mut unread).is_empty());
}
