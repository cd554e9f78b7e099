//! Hover-intent debounce state machine
//!
//! Translates raw pointer enter/leave signals into a stable "should the
//! tooltip display" decision. Leaving an anchor does not hide its tooltip
//! immediately; the hide is deferred by a grace interval and cancelled if
//! the pointer comes back, so crossing the gap between a trigger and its
//! tooltip body never causes flicker.

mod hover_intent;

pub use hover_intent::{GRACE_TIMEOUT_INTERVAL, HoverIntent};
