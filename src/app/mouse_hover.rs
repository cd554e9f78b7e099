//! Mouse hover handling
//!
//! Routes the pointer position into each anchor's tooltip state. A trigger
//! chip and its displayed tooltip body both count as "inside" for that
//! anchor, so moving from the chip onto the bubble keeps it open.

use std::time::Instant;

use super::app_state::App;
use crate::layout::Region;

/// Update every tooltip's hover state for the pointer's current region
pub fn handle_hover(app: &mut App, region: Option<Region>, now: Instant) {
    let hovered_anchor = match region {
        Some(Region::Trigger(i)) | Some(Region::TooltipBody(i)) => Some(i),
        _ => None,
    };

    for (i, tooltip) in app.tooltips.iter_mut().enumerate() {
        tooltip.set_hovered(hovered_anchor == Some(i), now);
    }
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
