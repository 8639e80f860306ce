use std::time::Instant;

use crate::hanoi::{Towers, PEGS};
use crate::ui::hanoi::intent::HanoiIntent;
use crate::ui::hanoi::state::HanoiState;
use crate::ui::mvi::Reducer;
use crate::ui::toast::{expire, Toast};

pub struct HanoiReducer;

impl Reducer for HanoiReducer {
    type State = HanoiState;
    type Intent = HanoiIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HanoiIntent::MoveCursor { delta } => {
                let pegs = PEGS as i8;
                state.cursor = (state.cursor as i8 + delta).rem_euclid(pegs) as usize;
            }
            HanoiIntent::Activate { now } => {
                let peg = state.cursor;
                state = select(state, peg, now);
            }
            HanoiIntent::Select { peg, now } => {
                if peg < PEGS {
                    state.cursor = peg;
                    state = select(state, peg, now);
                }
            }
            HanoiIntent::CancelHold => state.held = None,
            HanoiIntent::SetDisks { disks } => match Towers::new(disks) {
                Ok(towers) => state = restart(state, towers),
                Err(err) => tracing::debug!(%err, "disk count rejected"),
            },
            HanoiIntent::Reset => {
                let disks = state.towers.disks();
                let towers = Towers::new(disks).unwrap_or_default();
                state = restart(state, towers);
            }
            HanoiIntent::Tick { now } => {
                state.error = expire(state.error, now);
                if state.is_running() {
                    state.elapsed_secs = elapsed(&state, now);
                }
            }
        }
        state
    }
}

fn select(mut state: HanoiState, peg: usize, now: Instant) -> HanoiState {
    if state.towers.is_solved() {
        return state;
    }

    match state.held.take() {
        None => {
            if state.towers.top(peg).is_some() {
                state.held = Some(peg);
                if state.started_at.is_none() {
                    state.started_at = Some(now);
                    tracing::debug!("hanoi timer started");
                }
            }
        }
        Some(from) => match state.towers.move_disk(from, peg) {
            Ok(disk) => {
                tracing::debug!(disk, from, to = peg, moves = state.towers.moves(), "disk moved");
                if state.towers.is_solved() {
                    state.elapsed_secs = elapsed(&state, now);
                    tracing::info!(
                        moves = state.towers.moves(),
                        minimum = state.towers.minimum_moves(),
                        secs = state.elapsed_secs,
                        "hanoi solved"
                    );
                }
            }
            Err(err) => {
                tracing::debug!(%err, "move rejected");
                state.error = Some(Toast::error(err.to_string(), now, state.timings.error));
            }
        },
    }
    state
}

fn elapsed(state: &HanoiState, now: Instant) -> u64 {
    state
        .started_at
        .map_or(0, |started| now.saturating_duration_since(started).as_secs())
}

/// Fresh towers; moves, timer and messages cleared.
fn restart(state: HanoiState, towers: Towers) -> HanoiState {
    HanoiState {
        towers,
        cursor: state.cursor,
        timings: state.timings,
        ..HanoiState::default()
    }
}
