//! Model-View-Intent (MVI) primitives.
//!
//! Views in this crate hold a single state value and change it only by
//! running intents through a reducer.
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
