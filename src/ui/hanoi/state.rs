use std::time::Instant;

use crate::hanoi::Towers;
use crate::ui::mvi::UiState;
use crate::ui::toast::{Toast, ToastTimings};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HanoiState {
    pub towers: Towers,
    /// Peg whose top disk is lifted, if any.
    pub held: Option<usize>,
    pub cursor: usize,
    /// Set by the first pick-up; cleared by reset.
    pub started_at: Option<Instant>,
    pub elapsed_secs: u64,
    pub error: Option<Toast>,
    pub timings: ToastTimings,
}

impl UiState for HanoiState {}

impl HanoiState {
    pub fn new(towers: Towers, timings: ToastTimings) -> Self {
        Self {
            towers,
            timings,
            ..Self::default()
        }
    }

    /// The timer runs between the first pick-up and the solving move.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && !self.towers.is_solved()
    }

    pub fn held_disk(&self) -> Option<u8> {
        self.held.and_then(|peg| self.towers.top(peg))
    }

    pub fn solved_message(&self) -> Option<&'static str> {
        if !self.towers.is_solved() {
            None
        } else if self.towers.exceeded() {
            Some("At least you did it, but with more moves than necessary!")
        } else {
            Some("Congratulations! You solved it!")
        }
    }

    /// Elapsed time as `mm:ss`.
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}", self.elapsed_secs / 60, self.elapsed_secs % 60)
    }
}
