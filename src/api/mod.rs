//! Collaborator contract for the network client.
//!
//! The core never speaks a wire protocol itself: it issues single-shot
//! asynchronous operations against [`ApiService`] and reconciles their
//! typed results. Transport, retries at the HTTP layer, and response
//! decoding all live behind this boundary.

mod client;
mod error;

pub use client::{ActivityPage, ApiService, Cursor};
pub use error::ApiError;
