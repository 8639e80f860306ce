use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

use crate::sorting::Algorithm;
use crate::ui::app::{App, Page};
use crate::ui::garage::GarageIntent;
use crate::ui::hanoi::HanoiIntent;
use crate::ui::home::HomeIntent;
use crate::ui::sorting::SortingIntent;
use crate::ui::tictactoe::TicTacToeIntent;

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.reload_config(now);
        return;
    }
    if key.code == KeyCode::Esc {
        app.go_back();
        return;
    }

    match app.page() {
        Page::Home => home_key(app, key),
        Page::Garage => garage_key(app, key, now),
        Page::Sorting => sorting_key(app, key, now),
        Page::TicTacToe => tictactoe_key(app, key),
        Page::Hanoi => hanoi_key(app, key, now),
    }
}

fn home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.dispatch_home(HomeIntent::MoveSelection { delta: -1 })
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.dispatch_home(HomeIntent::MoveSelection { delta: 1 })
        }
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char(ch) => {
            if let Some(page) = digit(ch).and_then(|n| Page::MENU.get(n)) {
                app.navigate(*page);
            }
        }
        _ => {}
    }
}

fn garage_key(app: &mut App, key: KeyEvent, now: Instant) {
    // Control chords first: plain characters go into the plate field.
    if is_ctrl_char(key, 'd') {
        app.dispatch_garage(GarageIntent::Depart { now });
        return;
    }
    if is_ctrl_char(key, 'f') {
        app.dispatch_garage(GarageIntent::DepartFront { now });
        return;
    }
    if is_ctrl_char(key, 'u') {
        app.dispatch_garage(GarageIntent::ClearInput);
        return;
    }
    match key.code {
        KeyCode::Enter => app.dispatch_garage(GarageIntent::Arrive { now }),
        KeyCode::Backspace => app.dispatch_garage(GarageIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_garage(GarageIntent::Type(ch))
        }
        _ => {}
    }
}

fn sorting_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.dispatch_sorting(SortingIntent::SelectPrevious),
        KeyCode::Right | KeyCode::Char('l') => app.dispatch_sorting(SortingIntent::SelectNext),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.dispatch_sorting(SortingIntent::StartSelected { now })
        }
        KeyCode::Char('g') => app.regenerate_array(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.change_array_length(1),
        KeyCode::Char('-') => app.change_array_length(-1),
        KeyCode::Char(']') => app.change_delay(1),
        KeyCode::Char('[') => app.change_delay(-1),
        KeyCode::Char(ch) => {
            if let Some(algorithm) = digit(ch).and_then(|n| Algorithm::ALL.get(n)) {
                app.dispatch_sorting(SortingIntent::Start {
                    algorithm: *algorithm,
                    now,
                });
            }
        }
        _ => {}
    }
}

fn tictactoe_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Left | KeyCode::Char('h') => TicTacToeIntent::MoveCursor { dx: -1, dy: 0 },
        KeyCode::Right | KeyCode::Char('l') => TicTacToeIntent::MoveCursor { dx: 1, dy: 0 },
        KeyCode::Up | KeyCode::Char('k') => TicTacToeIntent::MoveCursor { dx: 0, dy: -1 },
        KeyCode::Down | KeyCode::Char('j') => TicTacToeIntent::MoveCursor { dx: 0, dy: 1 },
        KeyCode::Enter | KeyCode::Char(' ') => TicTacToeIntent::PlayCursor,
        KeyCode::Char('r') => TicTacToeIntent::Reset,
        KeyCode::Char(ch) => match digit(ch) {
            Some(index) => TicTacToeIntent::Play { index },
            None => return,
        },
        _ => return,
    };
    app.dispatch_tictactoe(intent);
}

fn hanoi_key(app: &mut App, key: KeyEvent, now: Instant) {
    let disks = app.hanoi().towers.disks();
    let intent = match key.code {
        KeyCode::Left | KeyCode::Char('h') => HanoiIntent::MoveCursor { delta: -1 },
        KeyCode::Right | KeyCode::Char('l') => HanoiIntent::MoveCursor { delta: 1 },
        KeyCode::Enter | KeyCode::Char(' ') => HanoiIntent::Activate { now },
        KeyCode::Char('c') => HanoiIntent::CancelHold,
        KeyCode::Char('r') => HanoiIntent::Reset,
        KeyCode::Char('+') | KeyCode::Char('=') => HanoiIntent::SetDisks {
            disks: disks.saturating_add(1),
        },
        KeyCode::Char('-') => HanoiIntent::SetDisks {
            disks: disks.saturating_sub(1),
        },
        KeyCode::Char(ch) => match digit(ch) {
            Some(peg) => HanoiIntent::Select { peg, now },
            None => return,
        },
        _ => return,
    };
    app.dispatch_hanoi(intent);
}

/// '1'..='9' as a zero-based index.
fn digit(ch: char) -> Option<usize> {
    ch.to_digit(10)
        .filter(|&n| n > 0)
        .map(|n| n as usize - 1)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_chars_match_case_insensitively() {
        let key = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::CONTROL);
        assert!(is_ctrl_char(key, 'q'));
        assert!(!is_ctrl_char(press(KeyCode::Char('q')), 'q'));
    }

    #[test]
    fn digits_are_one_based() {
        assert_eq!(digit('1'), Some(0));
        assert_eq!(digit('9'), Some(8));
        assert_eq!(digit('0'), None);
        assert_eq!(digit('x'), None);
    }
}
