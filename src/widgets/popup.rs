use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup of the requested size against an anchor.
///
/// The popup opens directly above the anchor when there is room, below it
/// otherwise, left-aligned with the anchor and clamped to the frame on
/// every side.
pub fn anchored_popup(frame_area: Rect, anchor: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);

    let space_above = anchor.y.saturating_sub(frame_area.y);
    let y = if space_above >= height {
        anchor.y - height
    } else {
        // Open below, pulled back up if it would run off the bottom
        (anchor.y.saturating_add(anchor.height)).min(frame_area.bottom().saturating_sub(height))
    };

    // Left-aligned with the anchor, pulled back if it would run off the right
    let x = anchor.x.min(frame_area.right().saturating_sub(width));

    Rect {
        x,
        y,
        width,
        height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
