//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// An intent names something that happened (a keypress, a commit, a reset
/// request) and carries just enough data for the reducer to act.
pub trait Intent: Send + 'static {}
