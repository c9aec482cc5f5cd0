//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// A state carries everything the view needs to draw and nothing else.
/// It is replaced wholesale by the reducer, never mutated in place by the
/// view, and compared to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
