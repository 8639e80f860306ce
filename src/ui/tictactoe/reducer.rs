use crate::tictactoe::CELLS;
use crate::ui::mvi::Reducer;
use crate::ui::tictactoe::intent::TicTacToeIntent;
use crate::ui::tictactoe::state::TicTacToeState;

pub struct TicTacToeReducer;

impl Reducer for TicTacToeReducer {
    type State = TicTacToeState;
    type Intent = TicTacToeIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TicTacToeIntent::Play { index } => {
                state.cursor = index.min(CELLS - 1);
                play(&mut state, index);
            }
            TicTacToeIntent::PlayCursor => {
                let index = state.cursor;
                play(&mut state, index);
            }
            TicTacToeIntent::MoveCursor { dx, dy } => {
                let row = (state.cursor / 3) as i8;
                let col = (state.cursor % 3) as i8;
                let row = (row + dy).rem_euclid(3) as usize;
                let col = (col + dx).rem_euclid(3) as usize;
                state.cursor = row * 3 + col;
            }
            TicTacToeIntent::Reset => {
                state.game.reset();
                tracing::debug!("tic-tac-toe reset");
            }
        }
        state
    }
}

fn play(state: &mut TicTacToeState, index: usize) {
    match state.game.play(index) {
        Ok(Some(outcome)) => tracing::info!(?outcome, "tic-tac-toe round over"),
        Ok(None) => {}
        Err(err) => tracing::debug!(%err, "move rejected"),
    }
}
