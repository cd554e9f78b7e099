//! Region tracking for mouse hit testing
//!
//! Hover routing needs to know what is under the pointer. `LayoutRegions`
//! records where the trigger chips, tooltip bubbles, and status bar were
//! drawn on the last frame, and `region_at()` answers which of them a
//! pointer position falls in, displayed bubbles first since they overlay
//! the rest.

mod layout_hit_test;
mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
