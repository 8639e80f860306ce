mod intent;
mod reducer;
mod state;
mod view;

pub use intent::GarageIntent;
pub use reducer::GarageReducer;
pub use state::GarageState;
pub use view::render_garage;
