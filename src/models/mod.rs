//! Decoded domain entities.
//!
//! Controllers receive these from the API collaborator and thread them
//! through unchanged; display values are derived, entities are never
//! mutated.

mod activity;
mod message;
mod project;
mod update;
mod user;

pub use activity::{Activity, ActivityCategory, Comment};
pub use message::{Message, MessageThread};
pub use project::{Backing, Project, ProjectState, ProjectStats};
pub use update::{Update, UpdateDraft};
pub use user::{Avatar, User};
