//! Immediate-mode UI helpers for the scenes
//!
//! Design principles:
//! - Immediate mode (scenes redraw everything each frame)
//! - Simple rectangle-based hit-testing in game coordinates
//! - Macroquad integration for rendering

mod rect;
mod input;
mod theme;
mod widgets;

pub use rect::*;
pub use input::*;
pub use theme::*;
pub use widgets::*;
