use ratatui::layout::Rect;

use super::layout_regions::{LayoutRegions, Region};

/// Determine which region is at the given screen position, if any.
///
/// Tooltip bodies are checked before triggers because a displayed bubble
/// overlays everything beneath it.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    for (i, rect) in regions.tooltips.iter().enumerate() {
        if let Some(rect) = rect
            && contains(*rect, column, row)
        {
            return Some(Region::TooltipBody(i));
        }
    }

    for (i, rect) in regions.triggers.iter().enumerate() {
        if contains(*rect, column, row) {
            return Some(Region::Trigger(i));
        }
    }

    if let Some(rect) = regions.status_bar
        && contains(rect, column, row)
    {
        return Some(Region::StatusBar);
    }

    None
}

/// Point-in-rect test; empty rects contain nothing
fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
