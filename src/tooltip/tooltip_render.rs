use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::TooltipState;
use crate::widgets::popup::{anchored_popup, clear_area};

const BORDER_COLOR: Color = Color::DarkGray;
const TEXT_COLOR: Color = Color::Gray;

/// Render the bubble for one anchor, if it should display this frame.
///
/// Opens above the trigger when there is room, below otherwise. Returns
/// the drawn rect so the caller can record it for hit testing, or `None`
/// when nothing was drawn.
pub fn render_tooltip(tooltip: &TooltipState, frame: &mut Frame, anchor: Rect) -> Option<Rect> {
    if !tooltip.should_display() {
        return None;
    }

    let lines: Vec<&str> = tooltip.content.lines().collect();
    let content_width = lines
        .iter()
        .map(|line| UnicodeWidthStr::width(*line) as u16)
        .max()
        .unwrap_or(0);

    let width = content_width + 2;
    let height = lines.len() as u16 + 2;

    let area = anchored_popup(frame.area(), anchor, width, height);
    if area.width < 3 || area.height < 3 {
        return None; // no room for a border plus any content
    }

    clear_area(frame, area);

    let text = Text::from(lines.into_iter().map(Line::from).collect::<Vec<_>>());
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(TEXT_COLOR))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER_COLOR)),
        );

    frame.render_widget(paragraph, area);

    Some(area)
}

#[cfg(test)]
#[path = "tooltip_render_tests.rs"]
mod tooltip_render_tests;
