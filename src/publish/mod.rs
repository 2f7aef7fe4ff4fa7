//! Publish-confirmation flow for a drafted project update.
//!
//! `PublishController` drives a small state machine (configured, awaiting
//! confirmation, publishing, published or failed) around exactly one
//! publish call, and owns the preview web surface whose redirects must keep
//! carrying the auth query parameters.

mod controller;
mod intent;
pub mod preview;
mod reducer;
mod state;

pub use controller::{PublishController, PublishOutputs};
pub use intent::PublishIntent;
pub use preview::NavigationPolicy;
pub use reducer::{PublishEffect, PublishReducer};
pub use state::PublishState;
