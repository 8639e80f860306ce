//! Model-View-Intent primitives shared by every page.
//!
//! ```text
//! key / tick ──→ Intent ──→ Reducer ──→ State ──→ view::render
//!      ↑                                              │
//!      └──────────────────────────────────────────────┘
//! ```
//!
//! - **State**: everything a page needs to draw itself
//! - **Intent**: a key press or timer tick, already translated for the page
//! - **Reducer**: pure `(State, Intent) -> State`; clocks and randomness
//!   arrive inside the intent

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
