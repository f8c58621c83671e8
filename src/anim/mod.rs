//! Animation primitives
//!
//! Everything that moves on screen without being "gameplay":
//! - Ease: acceleration curves
//! - Tween: one f32 animated between two values (delay, yoyo, repeat)
//! - Timer: delayed calls and looping events
//! - CameraFlash: full-screen white flash used on scene exits
//!
//! All of it is driven by `update(dt)` from the owning scene; nothing here
//! touches macroquad state except `CameraFlash::draw`.

mod ease;
mod tween;
mod timer;
mod flash;

pub use ease::Ease;
pub use tween::{Repeat, Tween};
pub use timer::Timer;
pub use flash::CameraFlash;
