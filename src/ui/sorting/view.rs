use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph};
use ratatui::Frame;

use crate::sorting::{Algorithm, MAX_VALUE};
use crate::ui::sorting::state::SortingState;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BAR_COMPARING, BAR_IDLE, BAR_MERGING, BAR_MIN, HEADER_SEPARATOR,
    HEADER_TEXT, PRIMARY,
};
use crate::ui::widgets::{centered_line, page_block, toast_stack};

pub fn render_sorting(frame: &mut Frame<'_>, area: Rect, state: &SortingState) {
    let block = page_block("Sorting Visualizer");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title, menu, settings, chart, toast, legend] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(4),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let heading = match state.algorithm {
        Some(algorithm) => format!("Algorithm: {algorithm}"),
        None => "Algorithm: none".to_string(),
    };
    frame.render_widget(
        centered_line(
            heading,
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        ),
        title,
    );

    frame.render_widget(algorithm_menu(state), menu);

    let status = if state.is_sorting() {
        "Sorting..."
    } else {
        "Ready"
    };
    frame.render_widget(
        centered_line(
            format!(
                "Length: {}    Delay: {} ms    {status}",
                state.length(),
                state.delay_ms
            ),
            Style::default().fg(HEADER_TEXT),
        ),
        settings,
    );

    render_bars(frame, chart, state);

    frame.render_widget(toast_stack([&state.toast]), toast);
    frame.render_widget(legend_line(), legend);
}

fn algorithm_menu(state: &SortingState) -> Paragraph<'static> {
    let mut spans = Vec::with_capacity(Algorithm::ALL.len() * 2);
    for (index, algorithm) in Algorithm::ALL.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(HEADER_SEPARATOR)));
        }
        let style = if state.is_sorting() {
            Style::default().fg(HEADER_SEPARATOR)
        } else if index == state.selected {
            Style::default()
                .fg(PRIMARY)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        spans.push(Span::styled(algorithm.name().to_string(), style));
    }
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

fn bar_color(state: &SortingState, index: usize) -> ratatui::style::Color {
    if state.is_comparing(index) {
        BAR_COMPARING
    } else if state.current_min == Some(index) {
        BAR_MIN
    } else if state.is_merging(index) {
        BAR_MERGING
    } else {
        BAR_IDLE
    }
}

fn render_bars(frame: &mut Frame<'_>, area: Rect, state: &SortingState) {
    let count = state.values.len().max(1) as u16;
    let gap = 1;
    let bar_width = (area.width.saturating_sub(count * gap) / count).clamp(1, 6);
    let used = count * (bar_width + gap);
    let area = Rect {
        x: area.x + area.width.saturating_sub(used) / 2,
        width: used.min(area.width),
        ..area
    };

    let bars: Vec<Bar> = state
        .values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let color = bar_color(state, index);
            Bar::default()
                .value(u64::from(*value))
                .text_value(value.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(ACTIVE_HIGHLIGHT).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap)
        .max(u64::from(MAX_VALUE));
    frame.render_widget(chart, area);
}

fn legend_line() -> Paragraph<'static> {
    let swatch = |color, text: &'static str| {
        [
            Span::styled("■ ", Style::default().fg(color)),
            Span::styled(text, Style::default().fg(HEADER_TEXT)),
        ]
    };
    let mut spans = Vec::new();
    spans.extend(swatch(BAR_COMPARING, "comparing   "));
    spans.extend(swatch(BAR_MIN, "current min   "));
    spans.extend(swatch(BAR_MERGING, "merging"));
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}
