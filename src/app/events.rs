use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use super::app_state::App;
use super::mouse_hover;
use crate::layout::region_at;

impl App {
    /// Handle one terminal event and update application state
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => {
                self.handle_mouse_event(mouse_event, now);
            }
            _ => {}
        }
    }

    /// Handle key press events
    fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    /// Handle mouse events; only pointer position matters here
    fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let region = region_at(&self.layout_regions, mouse.column, mouse.row);
                mouse_hover::handle_hover(self, region, now);
            }
            _ => {}
        }
    }
}
