// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::hover::GRACE_TIMEOUT_INTERVAL;

/// Tooltip behavior section
#[derive(Debug, Clone, Deserialize)]
pub struct TooltipConfig {
    /// Milliseconds between the pointer leaving an anchor and the tooltip
    /// hiding
    #[serde(default = "default_grace_ms")]
    pub grace_ms: u64,
    /// Keep tooltips visible regardless of hover
    #[serde(default)]
    pub always_display: bool,
}

fn default_grace_ms() -> u64 {
    GRACE_TIMEOUT_INTERVAL.as_millis() as u64
}

impl Default for TooltipConfig {
    fn default() -> Self {
        TooltipConfig {
            grace_ms: default_grace_ms(),
            always_display: false,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tooltip: TooltipConfig,
}

impl Config {
    /// Grace interval as a Duration
    pub fn grace(&self) -> Duration {
        Duration::from_millis(self.tooltip.grace_ms)
    }
}
