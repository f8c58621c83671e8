//! Paint recipes for every generated texture

use crate::characters::Character;
use crate::ui::{SKY, SKY_LOW};
use crate::viewport::GAME_HEIGHT;
use super::canvas::{opaque, Canvas};

const SKIN: u32 = 0xFFDBB4;
const BLACK: u32 = 0x000000;
const BROWN: u32 = 0x8B4513;
const DARK_BROWN: u32 = 0x654321;
const GLASS: u32 = 0x87CEEB;

/// Texture key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    /// 32x32 kid: coloured body, face, eyes
    Character(Character),
    House,
    School,
    Park,
    Store,
    /// Title background gradient, one pixel wide
    Sky,
}

impl SpriteKind {
    /// Everything the preloader generates, in order
    pub const ALL: [SpriteKind; 9] = [
        SpriteKind::Character(Character::Jaxon),
        SpriteKind::Character(Character::Parker),
        SpriteKind::Character(Character::Vinny),
        SpriteKind::Character(Character::Rocco),
        SpriteKind::House,
        SpriteKind::School,
        SpriteKind::Park,
        SpriteKind::Store,
        SpriteKind::Sky,
    ];

    /// Texture size in pixels
    pub fn size(&self) -> (usize, usize) {
        match self {
            SpriteKind::Character(_) => (32, 32),
            SpriteKind::House => (60, 60),
            SpriteKind::School => (80, 60),
            SpriteKind::Park => (100, 80),
            SpriteKind::Store => (70, 50),
            SpriteKind::Sky => (1, GAME_HEIGHT as usize),
        }
    }

    /// Smooth sampling for gradients, crisp pixels for everything else
    pub fn smooth(&self) -> bool {
        matches!(self, SpriteKind::Sky)
    }
}

/// Rasterize the texture for `kind`
pub fn paint(kind: SpriteKind) -> Canvas {
    let (w, h) = kind.size();
    let mut c = Canvas::new(w, h);

    match kind {
        SpriteKind::Character(who) => {
            // Body
            c.fill_circle(16.0, 12.0, 12.0, opaque(who.rgb()));
            // Head
            c.fill_circle(16.0, 8.0, 8.0, opaque(SKIN));
            // Eyes
            c.fill_circle(13.0, 8.0, 2.0, opaque(BLACK));
            c.fill_circle(19.0, 8.0, 2.0, opaque(BLACK));
        }
        SpriteKind::House => {
            c.fill_rect(0, 20, 60, 40, opaque(BROWN));
            c.fill_triangle((30.0, 0.0), (0.0, 20.0), (60.0, 20.0), opaque(0xDC143C));
            c.fill_rect(10, 30, 15, 15, opaque(GLASS));
            c.fill_rect(35, 30, 15, 15, opaque(GLASS));
            // Door
            c.fill_rect(25, 40, 10, 20, opaque(DARK_BROWN));
        }
        SpriteKind::School => {
            c.fill_rect(0, 10, 80, 50, opaque(0xF0E68C));
            c.fill_rect(0, 0, 80, 10, opaque(BROWN));
            for i in 0..3 {
                c.fill_rect(10 + i * 25, 20, 15, 15, opaque(GLASS));
                c.fill_rect(10 + i * 25, 40, 15, 15, opaque(GLASS));
            }
        }
        SpriteKind::Park => {
            c.fill_rect(0, 0, 100, 80, opaque(0x228B22));
            // Tree
            c.fill_rect(20, 30, 5, 20, opaque(BROWN));
            c.fill_circle(22.0, 25.0, 15.0, opaque(0x00FF00));
            // Playground
            c.fill_rect(60, 20, 30, 30, opaque(0xFFFF00));
            c.fill_rect(65, 25, 20, 20, opaque(0xFF0000));
        }
        SpriteKind::Store => {
            c.fill_rect(0, 0, 70, 50, opaque(0xFFFFFF));
            // Awning
            c.fill_rect(0, 0, 70, 15, opaque(0xFF0000));
            // Doorway
            c.fill_rect(20, 25, 30, 20, opaque(BLACK));
        }
        SpriteKind::Sky => {
            c.fill_gradient_v(opaque(SKY), opaque(SKY_LOW));
        }
    }

    c
}
