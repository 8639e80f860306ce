mod common;

use common::{ctrl, make_app, make_app_with, press, typed};
use crossterm::event::KeyCode;
use dsa_arcade::audio::{Cue, Recorded};
use dsa_arcade::config::{Config, ConfigStore};
use dsa_arcade::sorting::ArraySampler;
use dsa_arcade::ui::input::handle_key;
use dsa_arcade::ui::{App, Page};
use std::fs;
use std::time::{Duration, Instant};

fn keys(app: &mut App, events: impl IntoIterator<Item = crossterm::event::KeyEvent>, now: Instant) {
    for key in events {
        handle_key(app, key, now);
    }
}

#[test]
fn digits_open_pages_from_home() {
    let (mut app, _) = make_app();
    let now = Instant::now();
    for (digit, page) in ['1', '2', '3', '4'].into_iter().zip(Page::MENU) {
        handle_key(&mut app, press(KeyCode::Char(digit)), now);
        assert_eq!(app.page(), page);
        handle_key(&mut app, press(KeyCode::Esc), now);
        assert_eq!(app.page(), Page::Home);
    }
}

#[test]
fn enter_opens_the_highlighted_page() {
    let (mut app, _) = make_app();
    let now = Instant::now();
    keys(&mut app, [press(KeyCode::Down), press(KeyCode::Down), press(KeyCode::Enter)], now);
    assert_eq!(app.page(), Page::TicTacToe);
}

#[test]
fn leaving_a_page_discards_its_state() {
    let (mut app, _) = make_app();
    let now = Instant::now();
    app.navigate(Page::Garage);
    keys(&mut app, typed("ABC"), now);
    handle_key(&mut app, press(KeyCode::Enter), now);
    assert_eq!(app.garage().garage.len(), 1);

    handle_key(&mut app, press(KeyCode::Esc), now);
    handle_key(&mut app, press(KeyCode::Char('1')), now);
    assert_eq!(app.page(), Page::Garage);
    assert!(app.garage().garage.is_empty());
    assert_eq!(app.garage().garage.arrivals(), 0);
}

#[test]
fn quit_keys() {
    for key in [ctrl('c'), ctrl('q')] {
        let (mut app, _) = make_app();
        app.navigate(Page::Sorting);
        handle_key(&mut app, key, Instant::now());
        assert!(app.should_quit());
    }

    let (mut app, _) = make_app();
    handle_key(&mut app, press(KeyCode::Esc), Instant::now());
    assert!(app.should_quit());
}

#[test]
fn garage_page_uses_configured_capacity() {
    let mut config = Config::default();
    config.garage.capacity = 1;
    let (mut app, recorded) = make_app_with(config);
    let now = Instant::now();
    app.navigate(Page::Garage);

    keys(&mut app, typed("A"), now);
    handle_key(&mut app, press(KeyCode::Enter), now);
    keys(&mut app, typed("B"), now);
    handle_key(&mut app, press(KeyCode::Enter), now);

    assert_eq!(app.garage().garage.len(), 1);
    assert_eq!(
        app.garage().error.as_ref().map(|toast| toast.text.as_str()),
        Some("Garage is full!")
    );
    assert_eq!(recorded.cues(), vec![Cue::Click, Cue::Alert]);
}

#[test]
fn garage_departure_keys() {
    let (mut app, _) = make_app();
    let now = Instant::now();
    app.navigate(Page::Garage);
    for plate in ["ONE", "TWO"] {
        keys(&mut app, typed(plate), now);
        handle_key(&mut app, press(KeyCode::Enter), now);
    }
    handle_key(&mut app, ctrl('f'), now);
    assert_eq!(app.garage().garage.front(), Some("TWO"));

    keys(&mut app, typed("TWO"), now);
    handle_key(&mut app, ctrl('d'), now);
    assert!(app.garage().garage.is_empty());
    assert_eq!(app.garage().garage.departures(), 2);
}

#[test]
fn sorting_keys_drive_a_full_run() {
    let (mut app, recorded) = make_app();
    let start = Instant::now();
    app.navigate(Page::Sorting);

    handle_key(&mut app, press(KeyCode::Char('+')), start);
    assert_eq!(app.sorting().length(), 9);
    handle_key(&mut app, press(KeyCode::Char('[')), start);
    assert_eq!(app.sorting().delay_ms, 250);

    handle_key(&mut app, press(KeyCode::Char('4')), start);
    assert!(app.sorting().is_sorting());
    assert_eq!(app.sorting().algorithm.map(|a| a.name()), Some("Merge Sort"));

    // Ignored while playing
    handle_key(&mut app, press(KeyCode::Char('-')), start);
    assert_eq!(app.sorting().length(), 9);

    let mut now = start;
    while app.sorting().is_sorting() {
        now += Duration::from_millis(250);
        app.on_tick(now);
    }
    let values = &app.sorting().values;
    assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(recorded.cues(), vec![Cue::Click, Cue::Fanfare]);
}

#[test]
fn tictactoe_win_plays_fanfare() {
    let (mut app, recorded) = make_app();
    let now = Instant::now();
    app.navigate(Page::TicTacToe);
    for cell in ['1', '4', '2', '5', '3'] {
        handle_key(&mut app, press(KeyCode::Char(cell)), now);
    }
    assert_eq!(app.tictactoe().status(), "Winner: X");
    let cues = recorded.cues();
    assert_eq!(cues.len(), 6);
    assert_eq!(cues.last(), Some(&Cue::Fanfare));

    handle_key(&mut app, press(KeyCode::Char('r')), now);
    assert_eq!(app.tictactoe().game.moves(), 0);
}

#[test]
fn hanoi_uses_configured_disks_and_keys() {
    let mut config = Config::default();
    config.hanoi.disks = 4;
    let (mut app, _) = make_app_with(config);
    let now = Instant::now();
    app.navigate(Page::Hanoi);
    assert_eq!(app.hanoi().towers.disks(), 4);

    handle_key(&mut app, press(KeyCode::Char('-')), now);
    assert_eq!(app.hanoi().towers.disks(), 3);
    handle_key(&mut app, press(KeyCode::Char('-')), now);
    assert_eq!(app.hanoi().towers.disks(), 3);

    keys(&mut app, [press(KeyCode::Char('1')), press(KeyCode::Char('3'))], now);
    assert_eq!(app.hanoi().towers.moves(), 1);
    assert_eq!(app.hanoi().towers.top(2), Some(1));
}

#[test]
fn muted_config_silences_cues() {
    let mut config = Config::default();
    config.sound.enabled = false;
    let (mut app, recorded) = make_app_with(config);
    app.navigate(Page::TicTacToe);
    handle_key(&mut app, press(KeyCode::Char('5')), Instant::now());
    assert_eq!(app.tictactoe().game.moves(), 1);
    assert!(recorded.cues().is_empty());
}

#[test]
fn reload_can_turn_sound_back_on() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[sound]\nenabled = false\n").unwrap();
    let config = Config::load_from(&path).unwrap();
    let recorded = Recorded::default();
    let store = ConfigStore::new(config, path.clone());
    let mut app = App::new(store, ArraySampler::seeded(42), Box::new(recorded.clone()));
    let now = Instant::now();

    app.navigate(Page::TicTacToe);
    handle_key(&mut app, press(KeyCode::Char('1')), now);
    assert!(recorded.cues().is_empty());

    fs::write(&path, "[sound]\nenabled = true\n").unwrap();
    handle_key(&mut app, ctrl('r'), now);
    handle_key(&mut app, press(KeyCode::Char('5')), now);
    assert_eq!(app.tictactoe().game.moves(), 2);
    assert_eq!(recorded.cues(), vec![Cue::Click]);
}

#[test]
fn reload_shortcut_sets_status() {
    let (mut app, _) = make_app();
    let now = Instant::now();
    handle_key(&mut app, ctrl('r'), now);
    assert_eq!(app.status().map(|toast| toast.text.as_str()), Some("Config reloaded"));
    app.on_tick(now + Duration::from_secs(6));
    assert!(app.status().is_none());
}
