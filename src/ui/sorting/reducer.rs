use std::time::{Duration, Instant};

use crate::sorting::{clamp_delay_ms, Algorithm, MAX_LENGTH, MIN_LENGTH};
use crate::ui::mvi::Reducer;
use crate::ui::sorting::intent::SortingIntent;
use crate::ui::sorting::state::{Playback, SortingState};
use crate::ui::toast::{expire, Toast};

/// Reducer for the sorting page.
///
/// Starting a run records the whole trace up front; ticks then reveal one
/// frame per delay. Once started a run always plays to the end, and every
/// control intent is ignored until it does.
pub struct SortingReducer;

impl Reducer for SortingReducer {
    type State = SortingState;
    type Intent = SortingIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        if let SortingIntent::Tick { now } = intent {
            state.toast = expire(state.toast, now);
            return advance(state, now);
        }
        if state.is_sorting() {
            return state;
        }

        match intent {
            SortingIntent::Regenerate { values } => {
                if (MIN_LENGTH..=MAX_LENGTH).contains(&values.len()) {
                    state.values = values;
                    state.comparing.clear();
                    state.current_min = None;
                    state.merging.clear();
                }
            }
            SortingIntent::AdjustDelay { delta_ms } => {
                let delay = state.delay_ms.saturating_add_signed(delta_ms);
                state.delay_ms = clamp_delay_ms(delay);
            }
            SortingIntent::SelectPrevious => {
                let len = Algorithm::ALL.len();
                state.selected = (state.selected + len - 1) % len;
            }
            SortingIntent::SelectNext => {
                state.selected = (state.selected + 1) % Algorithm::ALL.len();
            }
            SortingIntent::StartSelected { now } => {
                let algorithm = state.selected_algorithm();
                state = start(state, algorithm, now);
            }
            SortingIntent::Start { algorithm, now } => {
                if let Some(index) = Algorithm::ALL.iter().position(|a| *a == algorithm) {
                    state.selected = index;
                }
                state = start(state, algorithm, now);
            }
            SortingIntent::Tick { .. } => {}
        }
        state
    }
}

fn start(mut state: SortingState, algorithm: Algorithm, now: Instant) -> SortingState {
    let trace = algorithm.trace(&state.values);
    tracing::debug!(
        algorithm = %algorithm,
        frames = trace.frames.len(),
        comparisons = trace.comparisons,
        "sort started"
    );

    state.algorithm = Some(algorithm);
    state.toast = None;

    let delay = Duration::from_millis(state.delay_ms);
    let mut frames = trace.frames;
    if frames.len() <= 1 {
        if let Some(last) = frames.pop() {
            state.show(last);
        }
        return finished(state, algorithm, trace.comparisons, now);
    }
    let first = frames.remove(0);
    state.show(first);
    state.playback = Some(Playback {
        algorithm,
        frames,
        cursor: 0,
        comparisons: trace.comparisons,
        delay,
        next_at: now + delay,
    });
    state
}

fn finished(
    mut state: SortingState,
    algorithm: Algorithm,
    comparisons: usize,
    now: Instant,
) -> SortingState {
    tracing::debug!(algorithm = %algorithm, comparisons, "sort finished");
    state.toast = Some(Toast::notice(
        format!("{algorithm} finished in {comparisons} comparisons"),
        now,
        state.timings.notice,
    ));
    state
}

/// Reveal every frame whose time has come. Ends the run after the last one.
fn advance(mut state: SortingState, now: Instant) -> SortingState {
    let Some(mut playback) = state.playback.take() else {
        return state;
    };

    while playback.cursor < playback.frames.len() && now >= playback.next_at {
        state.show(playback.frames[playback.cursor].clone());
        playback.cursor += 1;
        playback.next_at += playback.delay;
    }

    if playback.cursor < playback.frames.len() {
        state.playback = Some(playback);
        state
    } else {
        finished(state, playback.algorithm, playback.comparisons, now)
    }
}
