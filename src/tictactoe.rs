//! Tic-Tac-Toe board and turn rules.

use std::fmt;
use thiserror::Error;

pub const CELLS: usize = 9;

/// Rows, columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win { mark: Mark, line: [usize; 3] },
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("No cell {0}")]
    OutOfRange(usize),
    #[error("Cell {0} is already taken")]
    Occupied(usize),
    #[error("The round is over")]
    GameOver,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Mark>; CELLS],
}

impl Board {
    pub fn from_cells(cells: [Option<Mark>; CELLS]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn cells(&self) -> &[Option<Mark>; CELLS] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// First completed line wins; a full board with no line is a draw.
    pub fn outcome(&self) -> Option<Outcome> {
        for line in LINES {
            let [a, b, c] = line;
            if let Some(mark) = self.cells[a] {
                if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) {
                    return Some(Outcome::Win { mark, line });
                }
            }
        }
        self.is_full().then_some(Outcome::Draw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    board: Board,
    next: Mark,
    outcome: Option<Outcome>,
    moves: u8,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            board: Board::default(),
            next: Mark::X,
            outcome: None,
            moves: 0,
        }
    }
}

impl Game {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next(&self) -> Mark {
        self.next
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn moves(&self) -> u8 {
        self.moves
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.outcome {
            Some(Outcome::Win { mark, .. }) => Some(mark),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.outcome {
            Some(Outcome::Win { line, .. }) => Some(line),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == Some(Outcome::Draw)
    }

    /// Place the next mark on `index` and hand the turn over.
    pub fn play(&mut self, index: usize) -> Result<Option<Outcome>, MoveError> {
        if index >= CELLS {
            return Err(MoveError::OutOfRange(index));
        }
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        if self.board.cells[index].is_some() {
            return Err(MoveError::Occupied(index));
        }

        self.board.cells[index] = Some(self.next);
        self.next = self.next.other();
        self.moves += 1;
        self.outcome = self.board.outcome();
        Ok(self.outcome)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(game: &mut Game, cells: &[usize]) {
        for &cell in cells {
            game.play(cell).unwrap();
        }
    }

    #[test]
    fn every_line_produces_a_winner() {
        for line in LINES {
            let mut cells = [None; CELLS];
            for index in line {
                cells[index] = Some(Mark::O);
            }
            let board = Board::from_cells(cells);
            assert_eq!(
                board.outcome(),
                Some(Outcome::Win {
                    mark: Mark::O,
                    line
                })
            );
        }
    }

    #[test]
    #[rustfmt::skip]
    fn full_board_without_line_is_draw() {
        use Mark::{O, X};
        let board = Board::from_cells([
            Some(X), Some(O), Some(X),
            Some(X), Some(O), Some(O),
            Some(O), Some(X), Some(X),
        ]);
        assert_eq!(board.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn turns_alternate_starting_with_x() {
        let mut game = Game::default();
        assert_eq!(game.next(), Mark::X);
        game.play(4).unwrap();
        assert_eq!(game.board().get(4), Some(Mark::X));
        assert_eq!(game.next(), Mark::O);
    }

    #[test]
    fn occupied_cell_is_rejected() {
        let mut game = Game::default();
        game.play(0).unwrap();
        assert_eq!(game.play(0), Err(MoveError::Occupied(0)));
        assert_eq!(game.next(), Mark::O);
        assert_eq!(game.play(9), Err(MoveError::OutOfRange(9)));
    }

    #[test]
    fn no_moves_after_win() {
        let mut game = Game::default();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.winner(), Some(Mark::X));
        assert_eq!(game.winning_line(), Some([0, 1, 2]));
        assert_eq!(game.play(8), Err(MoveError::GameOver));
    }

    #[test]
    fn draw_detected_after_last_move() {
        let mut game = Game::default();
        play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(game.is_draw());
        assert_eq!(game.winner(), None);
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn reset_clears_everything() {
        let mut game = Game::default();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        game.reset();
        assert_eq!(game, Game::default());
        assert_eq!(game.next(), Mark::X);
        assert!(game.outcome().is_none());
    }
}
