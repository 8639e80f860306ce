use crate::ui::app::Page;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    page: Page,
}

impl Footer {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    pub fn hints(&self) -> &'static str {
        match self.page {
            Page::Home => " ↑/↓: Select │ Enter/1-4: Open │ Esc: Quit",
            Page::Garage => {
                " Enter: Arrive │ Ctrl+D: Depart │ Ctrl+F: Depart front │ Ctrl+U: Clear │ Esc: Home"
            }
            Page::Sorting => {
                " ←/→: Algorithm │ Enter/1-7: Sort │ g: New array │ +/-: Length │ [/]: Delay │ Esc: Home"
            }
            Page::TicTacToe => " Arrows: Move │ Enter/1-9: Play │ r: Another round │ Esc: Home",
            Page::Hanoi => {
                " ←/→: Peg │ Enter/1-3: Pick/Drop │ c: Cancel │ +/-: Disks │ r: Reset │ Esc: Home"
            }
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("Ctrl+R: Reload │ Ctrl+Q: Quit │ v{} ", VERSION);

        // Char count, not byte count, for the box-drawing separators
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
