use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tictactoe::{Mark, CELLS};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, PRIMARY, STATUS_OK, STATUS_WARN,
};
use crate::ui::tictactoe::state::TicTacToeState;
use crate::ui::widgets::{centered_line, page_block};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

pub fn render_tictactoe(frame: &mut Frame<'_>, area: Rect, state: &TicTacToeState) {
    let block = page_block("Tic-Tac-Toe");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [status, _, grid, _, again] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(CELL_HEIGHT * 3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let status_color = if state.game.outcome().is_some() {
        STATUS_OK
    } else {
        HEADER_TEXT
    };
    frame.render_widget(
        centered_line(
            state.status(),
            Style::default().fg(status_color).add_modifier(Modifier::BOLD),
        ),
        status,
    );

    render_grid(frame, grid, state);

    if state.game.outcome().is_some() {
        frame.render_widget(
            centered_line(
                "Another Round? (r)",
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            ),
            again,
        );
    }
}

fn render_grid(frame: &mut Frame<'_>, area: Rect, state: &TicTacToeState) {
    let width = (CELL_WIDTH * 3).min(area.width);
    let area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };
    let rows = Layout::vertical([Constraint::Length(CELL_HEIGHT); 3]).split(area);

    for index in 0..CELLS {
        let columns = Layout::horizontal([Constraint::Length(CELL_WIDTH); 3]).split(rows[index / 3]);
        let cell = columns[index % 3];

        let (text, mark_color) = match state.game.board().get(index) {
            Some(Mark::X) => ("X", PRIMARY),
            Some(Mark::O) => ("O", STATUS_WARN),
            None => ("", HEADER_TEXT),
        };
        let mut mark_style = Style::default().fg(mark_color).add_modifier(Modifier::BOLD);
        let mut border = Style::default().fg(GLOBAL_BORDER);
        if state.is_winning_cell(index) {
            mark_style = mark_style.fg(STATUS_OK);
            border = border.fg(STATUS_OK);
        }
        if index == state.cursor {
            mark_style = mark_style.bg(ACTIVE_HIGHLIGHT);
            border = border.fg(PRIMARY);
        }

        let widget = Paragraph::new(Line::from(Span::styled(text, mark_style)))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(widget, cell);
    }
}
