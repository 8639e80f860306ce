use crate::ui::app::Page;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PRIMARY};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const MUSHROOM: &str = "🍄";
/// Columns between two mushrooms in the marquee.
const SPACING: usize = 6;

pub struct Header {
    page: Page,
    marquee: usize,
}

impl Header {
    pub fn new(page: Page, marquee: usize) -> Self {
        Self { page, marquee }
    }

    pub fn widget(&self, width: u16) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title = format!("  DSA Case Study  │  {}  ", self.page.title());
        let used = title.chars().count();
        let lane = usize::from(width).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled("  DSA Case Study", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{}  ", self.page.title()), Style::default().fg(PRIMARY)),
            Span::styled(marquee(lane, self.marquee), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

/// A lane of `width` columns with mushrooms walking right by `offset`.
/// Each mushroom is two columns wide.
fn marquee(width: usize, offset: usize) -> String {
    let mut lane = String::with_capacity(width * 2);
    let mut column = 0;
    while column < width {
        if (column + SPACING - offset % SPACING) % SPACING == 0 && column + 2 <= width {
            lane.push_str(MUSHROOM);
            column += 2;
        } else {
            lane.push(' ');
            column += 1;
        }
    }
    lane
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marquee_moves_with_offset() {
        let still = marquee(12, 0);
        let moved = marquee(12, 1);
        assert!(still.starts_with(MUSHROOM));
        assert!(moved.starts_with(' '));
        assert_ne!(still, moved);
    }

    #[test]
    fn empty_lane() {
        assert_eq!(marquee(0, 3), "");
    }
}
