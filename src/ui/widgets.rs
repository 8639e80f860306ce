//! Small building blocks shared by the page views.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, PRIMARY, STATUS_ERROR, STATUS_OK};
use crate::ui::toast::{Toast, ToastKind};

pub fn page_block(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

pub fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(HEADER_TEXT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

pub fn toast_line(toast: &Toast) -> Line<'static> {
    let color = match toast.kind {
        ToastKind::Error => STATUS_ERROR,
        ToastKind::Notice => STATUS_OK,
    };
    Line::from(Span::styled(
        toast.text.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

/// Centered stack of optional toasts; empty slots render nothing.
pub fn toast_stack<'a>(toasts: impl IntoIterator<Item = &'a Option<Toast>>) -> Paragraph<'static> {
    let lines: Vec<Line> = toasts
        .into_iter()
        .flatten()
        .map(toast_line)
        .collect();
    Paragraph::new(lines).alignment(Alignment::Center)
}

pub fn centered_line(text: impl Into<String>, style: Style) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(text.into(), style))).alignment(Alignment::Center)
}
