use ratatui::layout::Rect;

/// UI regions that respond to mouse position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// A tooltip trigger chip, by anchor index
    Trigger(usize),
    /// A displayed tooltip bubble, by anchor index
    TooltipBody(usize),
    /// The status bar at the bottom of the frame
    StatusBar,
}

/// Where components were rendered on the last frame.
///
/// Updated during rendering; mouse handlers hit-test the stored rects on
/// the next event. Rects default to empty, which never match.
#[derive(Debug, Default)]
pub struct LayoutRegions {
    /// Trigger chip rects, one per anchor
    pub triggers: Vec<Rect>,
    /// Tooltip bubble rects, one per anchor; `None` while not displayed
    pub tooltips: Vec<Option<Rect>>,
    pub status_bar: Option<Rect>,
}

impl LayoutRegions {
    pub fn new(anchor_count: usize) -> Self {
        Self {
            triggers: vec![Rect::default(); anchor_count],
            tooltips: vec![None; anchor_count],
            status_bar: None,
        }
    }
}
