use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::garage::SlotRole;
use crate::ui::garage::state::GarageState;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_TEXT, PRIMARY, SLOT_FRONT, SLOT_MATCH, SLOT_ONLY, SLOT_REAR,
};
use crate::ui::widgets::{centered_line, page_block, panel, toast_stack};

const SLOT_WIDTH: u16 = 12;
const SLOT_HEIGHT: u16 = 5;

pub fn render_garage(frame: &mut Frame<'_>, area: Rect, state: &GarageState) {
    let block = page_block("PUP-CEA Parking Garage");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form, counters, toasts, lot] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(SLOT_HEIGHT),
    ])
    .areas(inner);

    let input = Paragraph::new(Line::from(vec![
        Span::styled(state.input.clone(), Style::default().fg(PRIMARY)),
        Span::styled("▏", Style::default().fg(HEADER_TEXT)),
    ]))
    .block(panel("Plate Number"));
    frame.render_widget(input, centered_column(form, 40));

    frame.render_widget(
        centered_line(
            format!(
                "Total Arrivals: {}    Total Departures: {}    Parked: {}/{}",
                state.garage.arrivals(),
                state.garage.departures(),
                state.garage.len(),
                state.garage.capacity()
            ),
            Style::default().fg(HEADER_TEXT),
        ),
        counters,
    );

    frame.render_widget(toast_stack([&state.notice, &state.error]), toasts);

    render_lot(frame, lot, state);
}

fn render_lot(frame: &mut Frame<'_>, area: Rect, state: &GarageState) {
    let garage = &state.garage;
    if garage.is_empty() {
        frame.render_widget(
            centered_line(
                "Garage is Empty...",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            area,
        );
        return;
    }

    let highlighted = state.highlighted();
    let width = SLOT_WIDTH.min(area.width / garage.len() as u16).max(3);
    let row = Rect {
        height: area.height.min(SLOT_HEIGHT),
        ..area
    };
    let slots = Layout::horizontal(vec![Constraint::Length(width); garage.len()]).split(row);

    for (index, (plate, slot)) in garage.cars().zip(slots.iter()).enumerate() {
        let role = garage.slot_role(index);
        let label = match role {
            Some(SlotRole::Only | SlotRole::Front) => "Front",
            Some(SlotRole::Rear) => "Rear",
            _ => "",
        };
        let color = match role {
            Some(SlotRole::Only) => SLOT_ONLY,
            _ if highlighted == Some(index) => SLOT_MATCH,
            Some(SlotRole::Front) => SLOT_FRONT,
            Some(SlotRole::Rear) => SLOT_REAR,
            _ => GLOBAL_BORDER,
        };

        let car = Paragraph::new(vec![
            Line::from(Span::styled(label, Style::default().fg(color))),
            Line::from(Span::styled(
                plate.to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from("[=o=o=]"),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(car, *slot);
    }
}

fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
