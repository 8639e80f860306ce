use dsa_arcade::sorting::{Algorithm, ArraySampler};
use dsa_arcade::ui::mvi::Reducer;
use dsa_arcade::ui::sorting::{SortingIntent, SortingReducer, SortingState};
use dsa_arcade::ui::toast::ToastTimings;
use std::time::{Duration, Instant};

const DELAY_MS: u64 = 200;

fn state(values: Vec<u32>) -> SortingState {
    SortingState::new(values, DELAY_MS, ToastTimings::default())
}

fn start(state: SortingState, algorithm: Algorithm, now: Instant) -> SortingState {
    SortingReducer::reduce(state, SortingIntent::Start { algorithm, now })
}

fn tick(state: SortingState, now: Instant) -> SortingState {
    SortingReducer::reduce(state, SortingIntent::Tick { now })
}

#[test]
fn every_algorithm_plays_back_to_sorted() {
    let input = ArraySampler::seeded(8).sample(10);
    let mut expected = input.clone();
    expected.sort_unstable();

    for algorithm in Algorithm::ALL {
        let t0 = Instant::now();
        let mut state = start(state(input.clone()), algorithm, t0);
        assert_eq!(state.algorithm, Some(algorithm));

        let mut now = t0;
        let mut steps = 0;
        while state.is_sorting() {
            now += Duration::from_millis(DELAY_MS);
            state = tick(state, now);
            steps += 1;
            assert!(steps < 10_000, "{algorithm} never finished");
        }
        assert_eq!(state.values, expected, "{algorithm}");
        assert!(state.comparing.is_empty());
        assert_eq!(state.current_min, None);
    }
}

#[test]
fn shows_exactly_one_frame_per_delay() {
    let input = vec![9, 8, 7, 6, 5];
    let trace = Algorithm::Bubble.trace(&input);
    let t0 = Instant::now();
    let state = start(state(input), Algorithm::Bubble, t0);

    assert_eq!(state.values, trace.frames[0].values);
    assert_eq!(state.comparing, trace.frames[0].comparing);

    let state = tick(state, t0 + Duration::from_millis(DELAY_MS - 1));
    assert_eq!(state.comparing, trace.frames[0].comparing);

    let state = tick(state, t0 + Duration::from_millis(DELAY_MS));
    assert_eq!(state.values, trace.frames[1].values);
    assert_eq!(state.comparing, trace.frames[1].comparing);
}

#[test]
fn late_tick_catches_up() {
    let input = vec![5, 4, 3, 2, 1];
    let trace = Algorithm::Insertion.trace(&input);
    let t0 = Instant::now();
    let state = start(state(input), Algorithm::Insertion, t0);

    let state = tick(state, t0 + Duration::from_millis(DELAY_MS * 3));
    assert_eq!(state.values, trace.frames[3].values);
}

#[test]
fn run_cannot_be_restarted_or_changed() {
    let t0 = Instant::now();
    let state = start(state(vec![3, 1, 2, 5, 4]), Algorithm::Heap, t0);
    let snapshot = state.clone();

    let state = start(state, Algorithm::Bubble, t0);
    let state = SortingReducer::reduce(state, SortingIntent::StartSelected { now: t0 });
    let state = SortingReducer::reduce(state, SortingIntent::SelectPrevious);
    let state = SortingReducer::reduce(state, SortingIntent::AdjustDelay { delta_ms: -50 });
    let state = SortingReducer::reduce(
        state,
        SortingIntent::Regenerate {
            values: vec![1, 1, 1, 1, 1],
        },
    );
    assert_eq!(state, snapshot);
}

#[test]
fn delay_changes_apply_to_the_next_run() {
    let state = SortingReducer::reduce(state(vec![1, 2, 3, 4, 5]), SortingIntent::AdjustDelay {
        delta_ms: 100,
    });
    assert_eq!(state.delay_ms, DELAY_MS + 100);
    let state = start(state, Algorithm::Bubble, Instant::now());
    let playback = state.playback.as_ref().expect("playing");
    assert_eq!(playback.delay, Duration::from_millis(DELAY_MS + 100));
}

#[test]
fn finished_run_reports_comparisons() {
    let input = vec![2, 1, 3, 5, 4];
    let comparisons = Algorithm::Selection.comparisons(&input);
    let t0 = Instant::now();
    let mut state = start(state(input), Algorithm::Selection, t0);
    let mut now = t0;
    while state.is_sorting() {
        now += Duration::from_millis(DELAY_MS);
        state = tick(state, now);
    }
    let toast = state.toast.as_ref().expect("finish notice");
    assert!(toast.text.contains(&comparisons.to_string()));
}
