use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum TicTacToeIntent {
    /// Play the cell with this index (0..9, row-major).
    Play { index: usize },
    /// Play the cell under the cursor.
    PlayCursor,
    MoveCursor { dx: i8, dy: i8 },
    /// "Another Round?"
    Reset,
}

impl Intent for TicTacToeIntent {}
