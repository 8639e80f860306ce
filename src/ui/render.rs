use ratatui::layout::Rect;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::{App, Page};
use crate::ui::footer::Footer;
use crate::ui::garage::render_garage;
use crate::ui::hanoi::render_hanoi;
use crate::ui::header::Header;
use crate::ui::home::render_home;
use crate::ui::layout::layout_regions;
use crate::ui::sorting::render_sorting;
use crate::ui::tictactoe::render_tictactoe;
use crate::ui::widgets::toast_line;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.page(), app.marquee()).widget(header.width), header);
    frame.render_widget(Clear, body);
    if body.height > 0 {
        draw_page(frame, body, app);
    }
    frame.render_widget(Footer::new(app.page()).widget(footer), footer);

    if let Some(status) = app.status() {
        // One line just above the footer, over the page
        let line = Rect {
            y: footer.y.saturating_sub(1),
            height: 1,
            x: area.x + 1,
            width: area.width.saturating_sub(2),
        };
        if line.y >= body.y && body.height > 0 {
            frame.render_widget(Clear, line);
            frame.render_widget(Paragraph::new(toast_line(status)), line);
        }
    }
}

fn draw_page(frame: &mut Frame<'_>, area: Rect, app: &App) {
    match app.page() {
        Page::Home => render_home(frame, area, app.home()),
        Page::Garage => render_garage(frame, area, app.garage()),
        Page::Sorting => render_sorting(frame, area, app.sorting()),
        Page::TicTacToe => render_tictactoe(frame, area, app.tictactoe()),
        Page::Hanoi => render_hanoi(frame, area, app.hanoi()),
    }
}
