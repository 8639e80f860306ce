use crate::tictactoe::Game;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TicTacToeState {
    pub game: Game,
    /// Cell index under the keyboard cursor.
    pub cursor: usize,
}

impl UiState for TicTacToeState {}

impl TicTacToeState {
    /// Header text: winner, draw, or whose turn it is.
    pub fn status(&self) -> String {
        if let Some(mark) = self.game.winner() {
            format!("Winner: {mark}")
        } else if self.game.is_draw() {
            "It's a Draw!".to_string()
        } else {
            format!("Next move: {}", self.game.next())
        }
    }

    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.game
            .winning_line()
            .is_some_and(|line| line.contains(&index))
    }
}
