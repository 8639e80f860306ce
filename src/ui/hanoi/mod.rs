mod intent;
mod reducer;
mod state;
mod view;

pub use intent::HanoiIntent;
pub use reducer::HanoiReducer;
pub use state::HanoiState;
pub use view::render_hanoi;
