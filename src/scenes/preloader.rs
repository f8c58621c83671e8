//! Preloader: paints every procedural texture, one per frame, behind a
//! progress bar

use std::collections::VecDeque;
use macroquad::logging::info;
use macroquad::prelude::*;
use crate::sprites::{SpriteKind, SpriteLibrary};
use crate::ui::{draw_label, hex, rgba, TextStyle, BUTTON_GREEN, FONT_LARGE, LOADING_BOX, ORIGIN_CENTER};
use crate::viewport::{GAME_HEIGHT, GAME_WIDTH};
use super::{SceneRequest, SceneUpdate};

pub struct PreloaderScene {
    queue: VecDeque<SpriteKind>,
    total: usize,
}

impl PreloaderScene {
    pub fn new() -> Self {
        Self::with_queue(SpriteKind::ALL.to_vec())
    }

    fn with_queue(kinds: Vec<SpriteKind>) -> Self {
        Self { total: kinds.len(), queue: kinds.into() }
    }

    /// Fraction of textures generated so far
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            return 1.0;
        }
        (self.total - self.queue.len()) as f32 / self.total as f32
    }

    /// Next texture to generate, if any
    fn advance(&mut self) -> Option<SpriteKind> {
        self.queue.pop_front()
    }

    pub fn update(&mut self, sprites: &mut SpriteLibrary) -> SceneUpdate {
        self.step(|kind| sprites.generate(kind))
    }

    /// Hand the next queued sprite to `generate`, or ask for the title
    /// once the queue is drained
    fn step(&mut self, mut generate: impl FnMut(SpriteKind)) -> SceneUpdate {
        match self.advance() {
            Some(kind) => {
                generate(kind);
                SceneUpdate::default()
            }
            None => {
                info!("Generated {} textures", self.total);
                SceneUpdate::go(SceneRequest::Title)
            }
        }
    }

    pub fn draw(&self) {
        let cx = GAME_WIDTH * 0.5;
        let cy = GAME_HEIGHT * 0.5;

        draw_rectangle(cx - 160.0, cy - 25.0, 320.0, 50.0, rgba(LOADING_BOX, 0.8));
        draw_rectangle(cx - 150.0, cy - 15.0, 300.0 * self.progress(), 30.0, hex(BUTTON_GREEN));
        draw_label(
            "Loading North Haven...",
            cx,
            cy - 50.0,
            ORIGIN_CENTER,
            &TextStyle::new(FONT_LARGE, WHITE),
        );
    }
}

impl Default for PreloaderScene {
    fn default() -> Self {
        Self::new()
    }
}
