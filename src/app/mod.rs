mod app_state;
mod events;
mod mouse_hover;
mod render;

// Re-export public types
pub use app_state::App;
