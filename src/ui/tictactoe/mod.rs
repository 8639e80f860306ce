mod intent;
mod reducer;
mod state;
mod view;

pub use intent::TicTacToeIntent;
pub use reducer::TicTacToeReducer;
pub use state::TicTacToeState;
pub use view::render_tictactoe;
