//! Base trait for controller state in MVI architecture.

/// Marker trait for controller state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything the projector needs to derive outputs)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
