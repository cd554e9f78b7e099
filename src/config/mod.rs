//! Configuration loading
//!
//! Optional TOML config at `~/.config/hovertip/config.toml`. CLI flags
//! override file values, which override defaults.

mod loader;
mod types;

pub use loader::{config_path, load_config};
pub use types::{Config, TooltipConfig};
