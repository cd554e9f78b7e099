use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::app_state::App;
use crate::tooltip::render_tooltip;

const CHIP_HEIGHT: u16 = 3;
const CHIP_SPACING: u16 = 2;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Split the terminal into the demo body and a one-line status bar
        let layout =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());
        let body_area = layout[0];
        let status_area = layout[1];

        let body = Block::default()
            .borders(Borders::ALL)
            .title(" hovertip ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = body.inner(body_area);
        frame.render_widget(body, body_area);

        self.render_chips(frame, inner);
        self.render_tooltips(frame);
        self.render_status_bar(frame, status_area);
    }

    /// Render the trigger chips near the bottom of the body, leaving room
    /// for tooltips to open above them
    fn render_chips(&mut self, frame: &mut Frame, area: Rect) {
        let chip_height = CHIP_HEIGHT.min(area.height);
        let chip_y = area
            .bottom()
            .saturating_sub(chip_height + 1)
            .max(area.y);
        let mut chip_x = area.x.saturating_add(1);

        for (i, label) in self.labels.iter().enumerate() {
            let width = UnicodeWidthStr::width(*label) as u16 + 4;
            if chip_x.saturating_add(width) > area.right() {
                // Out of horizontal space; an empty rect never matches
                self.layout_regions.triggers[i] = Rect::default();
                continue;
            }

            let chip = Rect {
                x: chip_x,
                y: chip_y,
                width,
                height: chip_height,
            };

            let border_color = if self.tooltips[i].should_display() {
                Color::Cyan
            } else {
                Color::DarkGray
            };
            let paragraph = Paragraph::new(Line::from(*label))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border_color)),
                );
            frame.render_widget(paragraph, chip);

            self.layout_regions.triggers[i] = chip;
            chip_x = chip_x.saturating_add(width + CHIP_SPACING);
        }
    }

    /// Render every displayed tooltip and record where the bubbles landed
    fn render_tooltips(&mut self, frame: &mut Frame) {
        for i in 0..self.tooltips.len() {
            let anchor = self.layout_regions.triggers[i];
            let drawn = if anchor.width > 0 {
                render_tooltip(&self.tooltips[i], frame, anchor)
            } else {
                None
            };
            self.layout_regions.tooltips[i] = drawn;
        }
    }

    fn render_status_bar(&mut self, frame: &mut Frame, area: Rect) {
        let always_on = self.tooltips.iter().any(|t| t.hover.always_display());
        let hint = if always_on {
            " q quit   always-display on"
        } else {
            " q quit   hover a chip for details"
        };

        let paragraph = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);

        self.layout_regions.status_bar = Some(area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
