//! Tooltip module
//!
//! Per-anchor tooltip state and rendering. Each anchor owns a
//! `TooltipState` that debounces pointer presence through a `HoverIntent`
//! and renders as a bubble anchored to its trigger.

mod tooltip_render;
mod tooltip_state;

pub use tooltip_render::render_tooltip;
pub use tooltip_state::TooltipState;
