//! GPU texture cache for generated sprites

use std::collections::HashMap;
use macroquad::prelude::*;
use super::{paint, Canvas, SpriteKind};

/// Uploaded textures, keyed by sprite kind
#[derive(Default)]
pub struct SpriteLibrary {
    textures: HashMap<SpriteKind, Texture2D>,
}

impl SpriteLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint and upload one sprite (replaces an existing texture)
    pub fn generate(&mut self, kind: SpriteKind) {
        let canvas = paint(kind);
        self.upload(kind, &canvas);
    }

    pub fn upload(&mut self, kind: SpriteKind, canvas: &Canvas) {
        let texture = Texture2D::from_rgba8(canvas.width as u16, canvas.height as u16, &canvas.pixels);
        texture.set_filter(if kind.smooth() { FilterMode::Linear } else { FilterMode::Nearest });
        self.textures.insert(kind, texture);
    }

    pub fn get(&self, kind: SpriteKind) -> Option<&Texture2D> {
        self.textures.get(&kind)
    }
}
