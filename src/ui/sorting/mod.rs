mod intent;
mod reducer;
mod state;
mod view;

pub use intent::SortingIntent;
pub use reducer::SortingReducer;
pub use state::{Playback, SortingState};
pub use view::render_sorting;
