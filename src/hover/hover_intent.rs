use std::time::{Duration, Instant};

/// Grace interval between a hover-end signal and the hide taking effect.
///
/// Crossing the gap between a trigger and its tooltip body takes a few
/// pointer samples; deferring the hide by this much keeps the tooltip
/// stable across the crossing.
pub const GRACE_TIMEOUT_INTERVAL: Duration = Duration::from_millis(150);

/// Debounced visibility decision for a single tooltip.
///
/// Consumes hover-start/hover-end signals and answers `should_display()`.
/// A hover-end never hides synchronously; it schedules a hide deadline one
/// grace interval out, and a hover-start before the deadline cancels it.
/// The deadline is plain owned data: it can only take effect through
/// `poll()`, so dropping the controller cancels it structurally and
/// nothing can fire after teardown.
///
/// All methods take `now` from the caller instead of reading the clock,
/// which keeps the machine deterministic under test.
#[derive(Debug)]
pub struct HoverIntent {
    /// Forces the tooltip to stay visible regardless of hover signals.
    /// Fixed for the lifetime of the controller.
    always_display: bool,
    /// Current visibility decision
    display: bool,
    /// Deadline of the scheduled hide, if one is outstanding
    pending_hide: Option<Instant>,
    /// Delay between a hover-end and the hide taking effect
    grace: Duration,
}

impl HoverIntent {
    pub fn new(always_display: bool) -> Self {
        Self::with_grace(always_display, GRACE_TIMEOUT_INTERVAL)
    }

    pub fn with_grace(always_display: bool, grace: Duration) -> Self {
        Self {
            always_display,
            display: always_display,
            pending_hide: None,
            grace,
        }
    }

    /// Pointer entered the trigger or the tooltip body.
    ///
    /// Cancels any scheduled hide and shows the tooltip. A hover-start
    /// always wins over a scheduled hide, however close to its deadline.
    pub fn hover_start(&mut self) {
        if self.pending_hide.take().is_some() {
            log::debug!("hover_start: cancelled pending hide");
        }
        self.display = true;
    }

    /// Pointer left the trigger and the tooltip body.
    ///
    /// Schedules the hide one grace interval out instead of hiding now.
    /// If a hide is already scheduled its deadline is replaced, so only
    /// the latest deadline can ever take effect.
    pub fn hover_end(&mut self, now: Instant) {
        if !self.display {
            return; // nothing shown, nothing to hide
        }
        self.pending_hide = Some(now + self.grace);
        log::debug!("hover_end: hide scheduled in {:?}", self.grace);
    }

    /// Apply the scheduled hide if its deadline has been reached.
    ///
    /// Returns whether the visible state changed, so callers know to
    /// redraw. Polling with no due deadline is a no-op, as is polling
    /// again after the deadline was applied.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending_hide {
            Some(deadline) if now >= deadline => {
                self.pending_hide = None;
                let was_displayed = self.display;
                self.display = self.always_display;
                log::debug!("poll: hide deadline fired, display={}", self.display);
                was_displayed != self.display
            }
            _ => false,
        }
    }

    /// Instant at which `poll()` next needs to run, or `None` when idle.
    /// Drives the event loop wake-up timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_hide
    }

    /// Current visibility decision
    pub fn should_display(&self) -> bool {
        self.display
    }

    /// Whether a hide is currently scheduled
    pub fn is_pending(&self) -> bool {
        self.pending_hide.is_some()
    }

    pub fn always_display(&self) -> bool {
        self.always_display
    }
}

impl Default for HoverIntent {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
#[path = "hover_intent_tests.rs"]
mod hover_intent_tests;
