use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::hanoi::{MAX_DISKS, PEGS};
use crate::ui::hanoi::state::HanoiState;
use crate::ui::theme::{
    BAR_COMPARING, BAR_MERGING, BAR_MIN, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PRIMARY,
    SLOT_REAR, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};
use crate::ui::widgets::{centered_line, page_block, toast_stack};

const PEG_LABELS: [&str; PEGS] = ["A", "B", "C"];

pub fn render_hanoi(frame: &mut Frame<'_>, area: Rect, state: &HanoiState) {
    let block = page_block("Towers of Hanoi");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [stats, hand, pegs, labels, message] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(u16::from(MAX_DISKS) + 1),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(inner);

    frame.render_widget(stats_line(state), stats);

    let columns = Layout::horizontal([Constraint::Ratio(1, PEGS as u32); PEGS]).split(pegs);
    let label_columns =
        Layout::horizontal([Constraint::Ratio(1, PEGS as u32); PEGS]).split(labels);
    let hand_columns = Layout::horizontal([Constraint::Ratio(1, PEGS as u32); PEGS]).split(hand);

    for peg in 0..PEGS {
        frame.render_widget(peg_widget(state, peg, columns[peg].height), columns[peg]);

        let style = if peg == state.cursor {
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_SEPARATOR)
        };
        let label = if peg == state.cursor {
            format!("▲ {} ▲", PEG_LABELS[peg])
        } else {
            PEG_LABELS[peg].to_string()
        };
        frame.render_widget(centered_line(label, style), label_columns[peg]);

        if state.held == Some(peg) {
            if let Some(disk) = state.held_disk() {
                frame.render_widget(
                    centered_line(disk_text(disk), Style::default().fg(PRIMARY)),
                    hand_columns[peg],
                );
            }
        }
    }

    match state.solved_message() {
        Some(text) => {
            let color = if state.towers.exceeded() {
                STATUS_ERROR
            } else {
                STATUS_OK
            };
            frame.render_widget(
                centered_line(text, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                message,
            );
        }
        None => frame.render_widget(toast_stack([&state.error]), message),
    }
}

fn stats_line(state: &HanoiState) -> Paragraph<'static> {
    let moves_color = if state.towers.exceeded() {
        STATUS_ERROR
    } else {
        HEADER_TEXT
    };
    Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Disks: {}    ", state.towers.disks()),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled(
            format!("Moves: {}", state.towers.moves()),
            Style::default().fg(moves_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "    Minimum: {}    Time: {}",
                state.towers.minimum_moves(),
                state.clock()
            ),
            Style::default().fg(HEADER_TEXT),
        ),
    ]))
    .alignment(Alignment::Center)
}

fn disk_text(disk: u8) -> String {
    "█".repeat(usize::from(disk) * 2 + 1)
}

/// One peg drawn bottom-up: a rod, the stacked disks, and a base.
fn peg_widget(state: &HanoiState, peg: usize, height: u16) -> Paragraph<'static> {
    let stack = state.towers.peg(peg).unwrap_or_default();
    let rows = usize::from(height);
    let lifted = state.held == Some(peg);

    let mut lines = Vec::with_capacity(rows);
    for row in (0..rows.saturating_sub(1)).rev() {
        let line = match stack.get(row) {
            Some(&disk) if !(lifted && row + 1 == stack.len()) => Line::from(Span::styled(
                disk_text(disk),
                Style::default().fg(disk_color(disk)),
            )),
            _ => Line::from(Span::styled("│", Style::default().fg(GLOBAL_BORDER))),
        };
        lines.push(line);
    }
    lines.push(Line::from(Span::styled(
        "▀".repeat(usize::from(MAX_DISKS) * 2 + 3),
        Style::default().fg(GLOBAL_BORDER),
    )));
    Paragraph::new(lines).alignment(Alignment::Center)
}

fn disk_color(disk: u8) -> Color {
    match disk {
        1 => BAR_COMPARING,
        2 => STATUS_WARN,
        3 => BAR_MIN,
        4 => SLOT_REAR,
        _ => BAR_MERGING,
    }
}
