use std::time::Instant;

use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::tooltip::TooltipState;

/// Demo anchors: chip label and tooltip body
const DEMO_ANCHORS: &[(&str, &str)] = &[
    (
        "Deploy",
        "Push the current build to staging.\nNeeds a green CI run first.",
    ),
    ("Rollback", "Revert staging to the previous release."),
    ("Logs", "Tail the service logs for this environment."),
    ("Metrics", "Open the request-rate and latency charts."),
];

/// Application state for the demo
pub struct App {
    /// One tooltip per demo anchor, in render order
    pub tooltips: Vec<TooltipState>,
    /// Chip labels, parallel to `tooltips`
    pub labels: Vec<&'static str>,
    /// Where components were rendered on the last frame
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
}

impl App {
    /// Create the demo app from loaded configuration
    pub fn new(config: &Config) -> Self {
        let labels = DEMO_ANCHORS.iter().map(|(label, _)| *label).collect();
        let tooltips = DEMO_ANCHORS
            .iter()
            .map(|(_, content)| {
                TooltipState::with_grace(*content, config.tooltip.always_display, config.grace())
            })
            .collect();

        Self {
            tooltips,
            labels,
            layout_regions: LayoutRegions::new(DEMO_ANCHORS.len()),
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply any due hide deadlines. Returns whether a redraw is needed.
    pub fn poll_timers(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for tooltip in &mut self.tooltips {
            changed |= tooltip.poll(now);
        }
        changed
    }

    /// Earliest instant any tooltip needs a poll, or `None` when idle
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tooltips
            .iter()
            .filter_map(TooltipState::next_deadline)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn after(t: Instant, ms: u64) -> Instant {
        t + Duration::from_millis(ms)
    }

    #[test]
    fn test_app_initialization() {
        let app = App::new(&Config::default());

        assert_eq!(app.tooltips.len(), app.labels.len());
        assert_eq!(app.layout_regions.triggers.len(), app.tooltips.len());
        assert!(!app.should_quit());
        assert!(app.tooltips.iter().all(|t| !t.should_display()));
        assert_eq!(app.next_deadline(), None);
    }

    #[test]
    fn test_always_display_config_starts_visible() {
        let mut config = Config::default();
        config.tooltip.always_display = true;

        let app = App::new(&config);

        assert!(app.tooltips.iter().all(|t| t.should_display()));
    }

    #[test]
    fn test_config_grace_reaches_tooltips() {
        let t = Instant::now();
        let mut config = Config::default();
        config.tooltip.grace_ms = 40;

        let mut app = App::new(&config);
        app.tooltips[0].set_hovered(true, t);
        app.tooltips[0].set_hovered(false, t);

        assert_eq!(app.next_deadline(), Some(after(t, 40)));
    }

    #[test]
    fn test_poll_timers_reports_changes() {
        let t = Instant::now();
        let mut app = App::new(&Config::default());

        app.tooltips[1].set_hovered(true, t);
        app.tooltips[1].set_hovered(false, t);

        assert!(!app.poll_timers(after(t, 100)));
        assert!(app.poll_timers(after(t, 200)));
        assert!(!app.tooltips[1].should_display());
    }

    #[test]
    fn test_next_deadline_is_earliest_across_tooltips() {
        let t = Instant::now();
        let mut app = App::new(&Config::default());

        app.tooltips[0].set_hovered(true, t);
        app.tooltips[0].set_hovered(false, after(t, 50));
        app.tooltips[2].set_hovered(true, t);
        app.tooltips[2].set_hovered(false, after(t, 10));

        assert_eq!(app.next_deadline(), Some(after(t, 160)));
    }
}
