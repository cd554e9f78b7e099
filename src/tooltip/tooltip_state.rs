use std::time::{Duration, Instant};

use crate::hover::{GRACE_TIMEOUT_INTERVAL, HoverIntent};

/// Hover-driven display state for a single tooltip anchor.
pub struct TooltipState {
    /// Tooltip body text; an empty body never renders
    pub content: String,
    /// Debounced visibility decision
    pub hover: HoverIntent,
    /// Whether the pointer was inside the anchor on the last sample
    inside: bool,
}

impl TooltipState {
    pub fn new(content: impl Into<String>, always_display: bool) -> Self {
        Self::with_grace(content, always_display, GRACE_TIMEOUT_INTERVAL)
    }

    pub fn with_grace(content: impl Into<String>, always_display: bool, grace: Duration) -> Self {
        Self {
            content: content.into(),
            hover: HoverIntent::with_grace(always_display, grace),
            inside: false,
        }
    }

    /// Feed one pointer-position sample.
    ///
    /// Position samples arrive on every mouse move; only the enter/leave
    /// edges are forwarded to the hover controller. `hovered` covers both
    /// the trigger and the displayed tooltip body, so moving between them
    /// counts as staying inside.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if hovered == self.inside {
            return;
        }
        self.inside = hovered;
        log::debug!("pointer {}", if hovered { "entered" } else { "left" });
        if hovered {
            self.hover.hover_start();
        } else {
            self.hover.hover_end(now);
        }
    }

    /// Apply a due hide deadline. Returns whether visibility changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.hover.poll(now)
    }

    /// When the hover controller next needs a poll
    pub fn next_deadline(&self) -> Option<Instant> {
        self.hover.next_deadline()
    }

    /// Whether the bubble should be drawn this frame
    pub fn should_display(&self) -> bool {
        self.hover.should_display() && self.has_content()
    }

    /// A tooltip with no body text never displays
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}

#[cfg(test)]
#[path = "tooltip_state_tests.rs"]
mod tooltip_state_tests;
