//! Model-View-Intent (MVI) architecture primitives.
//!
//! Every screen controller in this crate follows the same unidirectional
//! data flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Effects) ──→ Output Streams ──→ View
//!    ↑                         │
//!    └── fetch completions ────┘
//! ```
//!
//! - **Intent**: user gestures, lifecycle callbacks, and fetch completions
//! - **Reducer**: pure transition function producing the next state plus an
//!   ordered batch of effects
//! - **Effects**: fetch commands and one-shot outputs, performed by the
//!   controller around the dispatch call

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{Reducer, Step};
pub use state::UiState;
