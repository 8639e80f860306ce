//! Towers of Hanoi rules.

use thiserror::Error;

pub const PEGS: usize = 3;
pub const MIN_DISKS: u8 = 3;
pub const MAX_DISKS: u8 = 5;
pub const DEFAULT_DISKS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HanoiError {
    #[error("Disk count must be between 3 and 5, got {0}")]
    DiskCount(u8),
    #[error("No peg {0}")]
    InvalidPeg(usize),
    #[error("No disk on that peg")]
    EmptyPeg,
    #[error("Invalid move! Disk is larger")]
    DiskTooLarge { disk: u8, onto: u8 },
    #[error("Puzzle is already solved")]
    AlreadySolved,
}

/// Three pegs of disks. Disk sizes are `1..=disks`; each peg is stored
/// bottom-first so the top disk is the last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Towers {
    pegs: [Vec<u8>; PEGS],
    disks: u8,
    moves: u32,
}

impl Default for Towers {
    fn default() -> Self {
        Self::stacked(DEFAULT_DISKS)
    }
}

impl Towers {
    pub fn new(disks: u8) -> Result<Self, HanoiError> {
        if !(MIN_DISKS..=MAX_DISKS).contains(&disks) {
            return Err(HanoiError::DiskCount(disks));
        }
        Ok(Self::stacked(disks))
    }

    fn stacked(disks: u8) -> Self {
        Self {
            pegs: [(1..=disks).rev().collect(), Vec::new(), Vec::new()],
            disks,
            moves: 0,
        }
    }

    pub fn disks(&self) -> u8 {
        self.disks
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn peg(&self, index: usize) -> Option<&[u8]> {
        self.pegs.get(index).map(Vec::as_slice)
    }

    pub fn top(&self, peg: usize) -> Option<u8> {
        self.pegs.get(peg).and_then(|stack| stack.last().copied())
    }

    /// A disk may rest on an empty peg or on a strictly larger disk.
    pub fn can_place(&self, disk: u8, peg: usize) -> bool {
        match self.pegs.get(peg) {
            Some(stack) => stack.last().map_or(true, |&top| top > disk),
            None => false,
        }
    }

    /// Move the top disk of `from` onto `to`, returning the moved disk.
    pub fn move_disk(&mut self, from: usize, to: usize) -> Result<u8, HanoiError> {
        if self.is_solved() {
            return Err(HanoiError::AlreadySolved);
        }
        for peg in [from, to] {
            if peg >= PEGS {
                return Err(HanoiError::InvalidPeg(peg));
            }
        }
        let disk = self.top(from).ok_or(HanoiError::EmptyPeg)?;
        if !self.can_place(disk, to) {
            return Err(HanoiError::DiskTooLarge {
                disk,
                onto: self.top(to).unwrap_or_default(),
            });
        }

        self.pegs[from].pop();
        self.pegs[to].push(disk);
        self.moves += 1;
        Ok(disk)
    }

    /// Solved once the last peg holds every disk, largest at the bottom.
    pub fn is_solved(&self) -> bool {
        let last = &self.pegs[PEGS - 1];
        last.len() == usize::from(self.disks)
            && last.iter().copied().eq((1..=self.disks).rev())
    }

    pub fn minimum_moves(&self) -> u32 {
        minimum_moves(self.disks)
    }

    pub fn exceeded(&self) -> bool {
        self.moves > self.minimum_moves()
    }
}

/// Fewest moves that solve a tower of `disks` disks.
pub fn minimum_moves(disks: u8) -> u32 {
    (1u32 << disks) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(towers: &mut Towers, n: u8, from: usize, to: usize, via: usize) {
        if n == 0 {
            return;
        }
        solve(towers, n - 1, from, via, to);
        towers.move_disk(from, to).unwrap();
        solve(towers, n - 1, via, to, from);
    }

    #[test]
    fn new_rejects_out_of_range_counts() {
        assert_eq!(Towers::new(2), Err(HanoiError::DiskCount(2)));
        assert_eq!(Towers::new(6), Err(HanoiError::DiskCount(6)));
        assert!(Towers::new(5).is_ok());
    }

    #[test]
    fn starts_stacked_on_first_peg() {
        let towers = Towers::new(4).unwrap();
        assert_eq!(towers.peg(0), Some(&[4, 3, 2, 1][..]));
        assert_eq!(towers.peg(1), Some(&[][..]));
        assert!(!towers.is_solved());
    }

    #[test]
    fn larger_disk_cannot_go_on_smaller() {
        let mut towers = Towers::default();
        towers.move_disk(0, 1).unwrap();
        let err = towers.move_disk(0, 1).unwrap_err();
        assert_eq!(err, HanoiError::DiskTooLarge { disk: 2, onto: 1 });
        assert_eq!(err.to_string(), "Invalid move! Disk is larger");
        assert_eq!(towers.moves(), 1);
    }

    #[test]
    fn same_peg_drop_is_rejected() {
        let mut towers = Towers::default();
        assert!(matches!(
            towers.move_disk(0, 0),
            Err(HanoiError::DiskTooLarge { disk: 1, onto: 1 })
        ));
    }

    #[test]
    fn empty_source_is_rejected() {
        let mut towers = Towers::default();
        assert_eq!(towers.move_disk(1, 2), Err(HanoiError::EmptyPeg));
        assert_eq!(towers.move_disk(0, 3), Err(HanoiError::InvalidPeg(3)));
    }

    #[test]
    fn optimal_solution_is_solved_without_exceeding() {
        for disks in MIN_DISKS..=MAX_DISKS {
            let mut towers = Towers::new(disks).unwrap();
            solve(&mut towers, disks, 0, 2, 1);
            assert!(towers.is_solved());
            assert_eq!(towers.moves(), towers.minimum_moves());
            assert!(!towers.exceeded());
            assert_eq!(towers.move_disk(2, 0), Err(HanoiError::AlreadySolved));
        }
    }

    #[test]
    fn extra_moves_flag_exceeded() {
        let mut towers = Towers::new(3).unwrap();
        towers.move_disk(0, 1).unwrap();
        towers.move_disk(1, 0).unwrap();
        solve(&mut towers, 3, 0, 2, 1);
        assert!(towers.is_solved());
        assert_eq!(towers.moves(), 9);
        assert!(towers.exceeded());
    }

    #[test]
    fn minimum_moves_formula() {
        assert_eq!(minimum_moves(3), 7);
        assert_eq!(minimum_moves(4), 15);
        assert_eq!(minimum_moves(5), 31);
    }
}
