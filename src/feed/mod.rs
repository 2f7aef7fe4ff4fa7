//! Paginated project-activity feed.
//!
//! `FeedController` turns screen intents (configure, view-did-load,
//! pull-to-refresh, scroll near bottom, row taps, child-cell callbacks)
//! into at most one outstanding fetch per operation class, reconciles the
//! results against later intents, and projects the settled state onto the
//! output streams a stateless list view renders from.

mod controller;
mod intent;
mod nav;
mod reducer;
mod state;

pub use controller::{FeedController, FeedOutputs};
pub use intent::{FeedIntent, FetchKind};
pub use nav::{destination, FeedDestination};
pub use reducer::{FeedEffect, FeedReducer};
pub use state::{FeedState, ProjectActivityData};
