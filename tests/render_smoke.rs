mod common;

use common::{make_app, press};
use crossterm::event::KeyCode;
use dsa_arcade::ui::input::handle_key;
use dsa_arcade::ui::render::draw;
use dsa_arcade::ui::{App, Page};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Instant;

fn screen(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    buffer
        .content()
        .chunks(usize::from(width))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn home_shows_title_and_menu() {
    let (app, _) = make_app();
    let text = screen(&app, 100, 30);
    assert!(text.contains("DSA Case Study"));
    for page in Page::MENU {
        assert!(text.contains(page.title()), "missing {}", page.title());
    }
}

#[test]
fn every_page_renders_at_common_sizes() {
    for page in Page::MENU {
        let (mut app, _) = make_app();
        app.navigate(page);
        for (width, height) in [(120, 40), (80, 24), (20, 6), (1, 1)] {
            screen(&app, width, height);
        }
    }
}

#[test]
fn garage_shows_parked_car() {
    let (mut app, _) = make_app();
    let now = Instant::now();
    app.navigate(Page::Garage);
    for ch in "CAR1".chars() {
        handle_key(&mut app, press(KeyCode::Char(ch)), now);
    }
    handle_key(&mut app, press(KeyCode::Enter), now);

    let text = screen(&app, 120, 30);
    assert!(text.contains("CAR1"));
    assert!(text.contains("Car CAR1 arrived!"));
    assert!(text.contains("Total Arrivals: 1"));
}

#[test]
fn tictactoe_shows_turn() {
    let (mut app, _) = make_app();
    app.navigate(Page::TicTacToe);
    handle_key(&mut app, press(KeyCode::Char('5')), Instant::now());
    let text = screen(&app, 80, 24);
    assert!(text.contains("Next move: O"));
}

#[test]
fn sorting_shows_algorithm_label_once_started() {
    let (mut app, _) = make_app();
    app.navigate(Page::Sorting);
    handle_key(&mut app, press(KeyCode::Char('1')), Instant::now());
    let text = screen(&app, 120, 30);
    assert!(text.contains("Algorithm: Bubble Sort"));
}
