//! Reactive view-controller core for a crowdfunding client.
//!
//! Screen controllers convert discrete, unordered user intents (configure,
//! view-did-load, refresh, scroll near bottom, taps, dialog confirmations)
//! into reconciled asynchronous fetches against an abstract API
//! collaborator, and project the settled state onto ordered, deduplicated
//! output streams that a stateless view layer renders without further
//! decisions.
//!
//! Three controllers specialize the shared [`mvi`] primitives:
//!
//! - [`feed::FeedController`]: paginated project-activity feed
//! - [`publish::PublishController`]: publish-confirmation flow with a
//!   redirect-following preview surface
//! - [`threads::ThreadRowController`]: message-thread selection and
//!   read-state tracking

pub mod api;
pub mod env;
pub mod feed;
pub mod format;
pub mod models;
pub mod mvi;
pub mod publish;
pub mod stream;
pub mod threads;
