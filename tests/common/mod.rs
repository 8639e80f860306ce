//! Shared test helpers.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dsa_arcade::audio::Recorded;
use dsa_arcade::config::{Config, ConfigStore};
use dsa_arcade::sorting::ArraySampler;
use dsa_arcade::ui::App;
use std::path::PathBuf;

pub fn make_app() -> (App, Recorded) {
    make_app_with(Config::default())
}

pub fn make_app_with(config: Config) -> (App, Recorded) {
    let recorded = Recorded::default();
    let store = ConfigStore::new(config, PathBuf::from("/nonexistent/dsa-arcade.toml"));
    let app = App::new(store, ArraySampler::seeded(42), Box::new(recorded.clone()));
    (app, recorded)
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn typed(text: &str) -> Vec<KeyEvent> {
    text.chars().map(|ch| press(KeyCode::Char(ch))).collect()
}
