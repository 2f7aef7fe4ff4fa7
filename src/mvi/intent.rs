//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User gestures (taps, pull-to-refresh, scroll thresholds)
/// - Lifecycle callbacks (configure, view became visible)
/// - Fetch completions delivered back onto the controller's timeline
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
