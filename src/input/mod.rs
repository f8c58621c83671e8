//! Input handling with gamepad support
//!
//! Provides an action-based input system that works with keyboard, mouse,
//! touch and gamepad. Each frame the live devices are frozen into a
//! [`FrameInput`] snapshot in game coordinates; scenes only ever see the
//! snapshot.
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Uses Web Gamepad API bindings registered by web/index.html

mod actions;
mod gamepad;
mod state;

pub use actions::*;
pub use gamepad::{Gamepad, button};
pub use state::*;
