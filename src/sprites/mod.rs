//! Procedural sprites
//!
//! Nothing is loaded from disk: every bitmap is painted into a [`Canvas`]
//! from a recipe and uploaded as a GPU texture during the preloader.

mod canvas;
mod recipes;
mod library;

pub use canvas::*;
pub use recipes::{paint, SpriteKind};
pub use library::SpriteLibrary;
