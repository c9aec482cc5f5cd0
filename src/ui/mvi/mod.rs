//! Model-View-Intent (MVI) architecture primitives.
//!
//! Data flows one way: user input becomes an intent, the reducer folds it
//! into a new state, and the view is drawn from that state alone.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
