use std::time::{Duration, Instant};

use crate::audio::{Cue, Speaker};
use crate::config::{Config, ConfigStore};
use crate::garage::Garage;
use crate::hanoi::Towers;
use crate::sorting::{clamp_length, ArraySampler, DELAY_STEP_MS};
use crate::ui::garage::{GarageIntent, GarageReducer, GarageState};
use crate::ui::hanoi::{HanoiIntent, HanoiReducer, HanoiState};
use crate::ui::home::{HomeIntent, HomeReducer, HomeState};
use crate::ui::mvi::Reducer;
use crate::ui::sorting::{SortingIntent, SortingReducer, SortingState};
use crate::ui::tictactoe::{TicTacToeIntent, TicTacToeReducer, TicTacToeState};
use crate::ui::toast::{expire, Toast, ToastTimings};

/// Ticks between marquee steps in the header.
const MARQUEE_EVERY: u32 = 6;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum Page {
    #[default]
    Home,
    Garage,
    Sorting,
    #[value(name = "tictactoe")]
    TicTacToe,
    Hanoi,
}

impl Page {
    /// Pages listed on the home menu, in order.
    pub const MENU: [Page; 4] = [Page::Garage, Page::Sorting, Page::TicTacToe, Page::Hanoi];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Garage => "Parking Garage",
            Page::Sorting => "Sorting Visualizer",
            Page::TicTacToe => "Tic-Tac-Toe",
            Page::Hanoi => "Towers of Hanoi",
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    page: Page,
    config: ConfigStore,
    sampler: ArraySampler,
    speaker: Box<dyn Speaker>,
    /// App-level message, e.g. the result of a config reload.
    status: Option<Toast>,
    ticks: u32,
    marquee: usize,
    home: HomeState,
    garage: GarageState,
    sorting: SortingState,
    tictactoe: TicTacToeState,
    hanoi: HanoiState,
}

impl App {
    pub fn new(config: ConfigStore, sampler: ArraySampler, speaker: Box<dyn Speaker>) -> Self {
        Self {
            should_quit: false,
            page: Page::Home,
            config,
            sampler,
            speaker,
            status: None,
            ticks: 0,
            marquee: 0,
            home: HomeState::default(),
            garage: GarageState::default(),
            sorting: SortingState::default(),
            tictactoe: TicTacToeState::default(),
            hanoi: HanoiState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.config.get().ui.tick_rate_ms)
    }

    pub fn status(&self) -> Option<&Toast> {
        self.status.as_ref()
    }

    pub fn marquee(&self) -> usize {
        self.marquee
    }

    pub fn home(&self) -> &HomeState {
        &self.home
    }

    pub fn garage(&self) -> &GarageState {
        &self.garage
    }

    pub fn sorting(&self) -> &SortingState {
        &self.sorting
    }

    pub fn tictactoe(&self) -> &TicTacToeState {
        &self.tictactoe
    }

    pub fn hanoi(&self) -> &HanoiState {
        &self.hanoi
    }

    /// Enter `page` with freshly mounted state; whatever the previous page
    /// held is dropped.
    pub fn navigate(&mut self, page: Page) {
        let config = self.config.get();
        let timings = timings(&config);
        match page {
            Page::Home => self.home = HomeState::default(),
            Page::Garage => self.garage = GarageState::new(config.garage.capacity, timings),
            Page::Sorting => {
                let values = self.sampler.sample(clamp_length(config.sorting.array_length));
                self.sorting = SortingState::new(values, config.sorting.delay_ms, timings);
            }
            Page::TicTacToe => self.tictactoe = TicTacToeState::default(),
            Page::Hanoi => {
                let towers = Towers::new(config.hanoi.disks).unwrap_or_default();
                self.hanoi = HanoiState::new(towers, timings);
            }
        }
        self.unmount(self.page, page);
        tracing::info!(from = ?self.page, to = ?page, "navigate");
        self.page = page;
    }

    fn unmount(&mut self, from: Page, to: Page) {
        if from == to {
            return;
        }
        match from {
            Page::Home => self.home = HomeState::default(),
            Page::Garage => self.garage = GarageState::default(),
            Page::Sorting => self.sorting = SortingState::default(),
            Page::TicTacToe => self.tictactoe = TicTacToeState::default(),
            Page::Hanoi => self.hanoi = HanoiState::default(),
        }
    }

    /// Esc: back to the menu, or quit from the menu.
    pub fn go_back(&mut self) {
        if self.page == Page::Home {
            self.request_quit();
        } else {
            self.navigate(Page::Home);
        }
    }

    pub fn reload_config(&mut self, now: Instant) {
        let ttl = timings(&self.config.get());
        match self.config.reload() {
            Ok(()) => {
                tracing::info!(path = %self.config.path().display(), "config reloaded");
                self.status = Some(Toast::notice("Config reloaded", now, ttl.notice));
            }
            Err(err) => {
                tracing::warn!(error = %err, "config reload failed");
                self.status = Some(Toast::error(err.to_string(), now, ttl.error));
            }
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.status = expire(self.status.take(), now);
        self.ticks = self.ticks.wrapping_add(1);
        if self.ticks % MARQUEE_EVERY == 0 {
            self.marquee = self.marquee.wrapping_add(1);
        }
        match self.page {
            Page::Home | Page::TicTacToe => {}
            Page::Garage => self.dispatch_garage(GarageIntent::Tick { now }),
            Page::Sorting => self.dispatch_sorting(SortingIntent::Tick { now }),
            Page::Hanoi => self.dispatch_hanoi(HanoiIntent::Tick { now }),
        }
    }

    pub fn dispatch_home(&mut self, intent: HomeIntent) {
        dispatch_mvi!(self, home, HomeReducer, intent);
    }

    /// Open the page highlighted on the home menu.
    pub fn open_selected(&mut self) {
        let page = self.home.selected_page();
        self.navigate(page);
    }

    pub fn dispatch_garage(&mut self, intent: GarageIntent) {
        let before = counters(&self.garage.garage);
        let had_error = self.garage.error.clone();
        dispatch_mvi!(self, garage, GarageReducer, intent);
        if counters(&self.garage.garage) != before {
            self.play(Cue::Click);
        } else if self.garage.error.is_some() && self.garage.error != had_error {
            self.play(Cue::Alert);
        }
    }

    pub fn dispatch_sorting(&mut self, intent: SortingIntent) {
        let was_sorting = self.sorting.is_sorting();
        dispatch_mvi!(self, sorting, SortingReducer, intent);
        match (was_sorting, self.sorting.is_sorting()) {
            (false, true) => self.play(Cue::Click),
            (true, false) => self.play(Cue::Fanfare),
            _ => {}
        }
    }

    /// Draw a new random array of the current length.
    pub fn regenerate_array(&mut self) {
        if self.sorting.is_sorting() {
            return;
        }
        let values = self.sampler.sample(self.sorting.length());
        self.dispatch_sorting(SortingIntent::Regenerate { values });
    }

    /// Grow or shrink the array by `delta`, regenerating it.
    pub fn change_array_length(&mut self, delta: isize) {
        if self.sorting.is_sorting() {
            return;
        }
        let length = clamp_length(self.sorting.length().saturating_add_signed(delta));
        if length == self.sorting.length() {
            return;
        }
        let values = self.sampler.sample(length);
        self.dispatch_sorting(SortingIntent::Regenerate { values });
    }

    pub fn change_delay(&mut self, steps: i64) {
        let delta_ms = steps * DELAY_STEP_MS as i64;
        self.dispatch_sorting(SortingIntent::AdjustDelay { delta_ms });
    }

    pub fn dispatch_tictactoe(&mut self, intent: TicTacToeIntent) {
        let before = self.tictactoe.game.moves();
        let was_over = self.tictactoe.game.outcome().is_some();
        dispatch_mvi!(self, tictactoe, TicTacToeReducer, intent);
        if self.tictactoe.game.moves() > before {
            self.play(Cue::Click);
        }
        if !was_over && self.tictactoe.game.winner().is_some() {
            self.play(Cue::Fanfare);
        }
    }

    pub fn dispatch_hanoi(&mut self, intent: HanoiIntent) {
        let before = self.hanoi.towers.moves();
        let had_error = self.hanoi.error.clone();
        let was_solved = self.hanoi.towers.is_solved();
        dispatch_mvi!(self, hanoi, HanoiReducer, intent);
        if self.hanoi.towers.moves() > before {
            self.play(Cue::Click);
        }
        if self.hanoi.error.is_some() && self.hanoi.error != had_error {
            self.play(Cue::Alert);
        }
        if !was_solved && self.hanoi.towers.is_solved() {
            self.play(Cue::Fanfare);
        }
    }

    fn play(&mut self, cue: Cue) {
        if self.config.get().sound.enabled {
            self.speaker.play(cue);
        }
    }
}

fn timings(config: &Config) -> ToastTimings {
    ToastTimings {
        error: Duration::from_millis(config.messages.error_ms),
        notice: Duration::from_millis(config.messages.notice_ms),
    }
}

fn counters(garage: &Garage) -> (u32, u32) {
    (garage.arrivals(), garage.departures())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Recorded;
    use std::path::PathBuf;

    fn make_app() -> (App, Recorded) {
        let recorded = Recorded::default();
        let store = ConfigStore::new(Config::default(), PathBuf::from("/nonexistent/config.toml"));
        let app = App::new(store, ArraySampler::seeded(7), Box::new(recorded.clone()));
        (app, recorded)
    }

    #[test]
    fn starts_on_home() {
        let (app, _) = make_app();
        assert_eq!(app.page(), Page::Home);
        assert!(!app.should_quit());
    }

    #[test]
    fn esc_from_home_quits() {
        let (mut app, _) = make_app();
        app.navigate(Page::Hanoi);
        app.go_back();
        assert_eq!(app.page(), Page::Home);
        assert!(!app.should_quit());
        app.go_back();
        assert!(app.should_quit());
    }

    #[test]
    fn sorting_page_mounts_configured_length() {
        let (mut app, _) = make_app();
        app.navigate(Page::Sorting);
        assert_eq!(app.sorting().length(), 8);
        assert_eq!(app.sorting().delay_ms, 300);
    }

    #[test]
    fn reload_of_missing_file_keeps_defaults() {
        let (mut app, _) = make_app();
        app.reload_config(Instant::now());
        assert!(app.status().is_some());
        assert_eq!(app.tick_rate(), Duration::from_millis(25));
    }

    #[test]
    fn marquee_advances_every_few_ticks() {
        let (mut app, _) = make_app();
        let now = Instant::now();
        for _ in 0..MARQUEE_EVERY {
            app.on_tick(now);
        }
        assert_eq!(app.marquee(), 1);
    }
}
