use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::app::Page;
use crate::ui::home::state::HomeState;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_SEPARATOR, HEADER_TEXT, PRIMARY};
use crate::ui::widgets::{centered_line, panel};

pub fn render_home(frame: &mut Frame<'_>, area: Rect, state: &HomeState) {
    let area = centered_rect(60, 80, area);
    let [title, subtitle, _, menu] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(Page::MENU.len() as u16 + 2),
    ])
    .areas(area);

    frame.render_widget(
        centered_line(
            "DSA Case Study",
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        ),
        title,
    );
    frame.render_widget(
        centered_line(
            "Data structures and algorithms, one page at a time",
            Style::default().fg(HEADER_SEPARATOR),
        ),
        subtitle,
    );

    let lines: Vec<Line> = Page::MENU
        .iter()
        .enumerate()
        .map(|(index, page)| {
            let text = format!(" {}  {} ", index + 1, page.title());
            let style = if index == state.selected {
                Style::default()
                    .fg(PRIMARY)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(panel("Menu")),
        menu,
    );
}
