//! Shared environment collaborators: session, accessibility signal, and
//! server identifiers.
//!
//! The environment is the only resource shared across controller instances,
//! and it is read-only from a controller's perspective. Session and
//! accessibility values are read at the moment an output is computed, never
//! cached at configure time, so outputs reflect the actor and signal active
//! when rendered.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::models::User;

/// Identifiers the preview surface needs to build and augment URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the API host, without a trailing slash.
    pub api_base_url: String,
    /// OAuth client id appended to prepared requests.
    pub client_id: String,
    /// Preferred display currency appended to prepared requests.
    pub currency: String,
}

type AssistiveProbe = dyn Fn() -> bool + Send + Sync;

/// Process-wide collaborators shared by every controller.
pub struct Environment {
    server: ServerConfig,
    current_actor: RwLock<Option<User>>,
    assistive_probe: Box<AssistiveProbe>,
}

impl Environment {
    /// Environment with no authenticated actor and assistive navigation
    /// reported inactive.
    pub fn new(server: ServerConfig) -> Self {
        Self {
            server,
            current_actor: RwLock::new(None),
            assistive_probe: Box::new(|| false),
        }
    }

    /// Replace the assistive-navigation probe (the platform hook that
    /// reports whether e.g. a screen reader is driving the UI).
    pub fn with_assistive_probe<F>(mut self, probe: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.assistive_probe = Box::new(probe);
        self
    }

    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// The authenticated user, if any, at this instant.
    pub fn current_actor(&self) -> Option<User> {
        self.current_actor.read().clone()
    }

    pub fn login(&self, user: User) {
        *self.current_actor.write() = Some(user);
    }

    pub fn logout(&self) {
        *self.current_actor.write() = None;
    }

    /// Polled at batch-production time; never subscribed to.
    pub fn is_assistive_navigation_active(&self) -> bool {
        (self.assistive_probe)()
    }
}

/// Shared handle controllers hold.
pub type SharedEnvironment = Arc<Environment>;
