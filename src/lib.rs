//! Flicker-free hover tooltips for ratatui
//!
//! The core is `hover::HoverIntent`, a small state machine that turns
//! raw pointer enter/leave signals into a debounced visibility decision:
//! leaving an anchor hides its tooltip only after a grace interval, and
//! coming back within the interval cancels the hide. The `tooltip` module
//! builds a renderable per-anchor state on top, and `app` wires everything
//! into a demo application driven by terminal mouse events.

pub mod app;
pub mod config;
pub mod error;
pub mod hover;
pub mod layout;
pub mod tooltip;
pub mod widgets;


pub use error::HovertipError;
pub use hover::{GRACE_TIMEOUT_INTERVAL, HoverIntent};
pub use tooltip::TooltipState;
