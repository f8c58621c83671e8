//! Town layout
//!
//! Positions are game coordinates on the 1024x768 canvas.

use macroquad::prelude::*;
use crate::sprites::SpriteKind;
use crate::ui::Rect;
use crate::viewport::{GAME_HEIGHT, GAME_WIDTH};

/// Location footprint
pub const LOCATION_SIZE: Vec2 = Vec2::new(120.0, 80.0);

/// Road stroke width
pub const ROAD_WIDTH: f32 = 40.0;

/// Where the player appears on entering the town
pub const PLAYER_SPAWN: Vec2 = Vec2::new(200.0, 200.0);

/// A straight road drawn as a thick stroke
#[derive(Debug, Clone, Copy)]
pub struct Road {
    pub from: Vec2,
    pub to: Vec2,
}

/// Street name sign, anchored at its top-left corner
#[derive(Debug, Clone, Copy)]
pub struct StreetSign {
    pub text: &'static str,
    pub pos: Vec2,
}

/// A building or place the player can click for info
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub name: &'static str,
    pub center: Vec2,
    /// Footprint fill, 0xRRGGBB
    pub color: u32,
    /// Emblem drawn on the footprint
    pub building: SpriteKind,
}

impl Location {
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.center.x, self.center.y, LOCATION_SIZE.x, LOCATION_SIZE.y)
    }

    /// Name tag anchor (tag is centred here)
    pub fn label_pos(&self) -> Vec2 {
        self.center + vec2(0.0, 50.0)
    }
}

#[derive(Debug, Clone)]
pub struct TownMap {
    pub roads: Vec<Road>,
    pub signs: Vec<StreetSign>,
    pub locations: Vec<Location>,
}

impl TownMap {
    pub fn north_haven() -> Self {
        Self {
            roads: vec![
                Road { from: vec2(0.0, 300.0), to: vec2(GAME_WIDTH, 300.0) },
                Road { from: vec2(512.0, 0.0), to: vec2(512.0, GAME_HEIGHT) },
            ],
            signs: vec![
                StreetSign { text: "State Street", pos: vec2(100.0, 280.0) },
                StreetSign { text: "Standish Ave", pos: vec2(520.0, 100.0) },
            ],
            locations: vec![
                Location {
                    name: "Jaxon & Parker's House",
                    center: vec2(200.0, 200.0),
                    color: 0x4A90E2,
                    building: SpriteKind::House,
                },
                Location {
                    name: "Vinny & Rocco's House",
                    center: vec2(600.0, 400.0),
                    color: 0x7B68EE,
                    building: SpriteKind::House,
                },
                Location {
                    name: "Blakeslee Park",
                    center: vec2(300.0, 500.0),
                    color: 0x27AE60,
                    building: SpriteKind::Park,
                },
                Location {
                    name: "Green Acres School",
                    center: vec2(700.0, 200.0),
                    color: 0xE74C3C,
                    building: SpriteKind::School,
                },
                Location {
                    name: "GameStop",
                    center: vec2(200.0, 600.0),
                    color: 0xF39C12,
                    building: SpriteKind::Store,
                },
                Location {
                    name: "Five Below",
                    center: vec2(800.0, 600.0),
                    color: 0xE91E63,
                    building: SpriteKind::Store,
                },
            ],
        }
    }

    /// Topmost location under `p`. The hovered location is hit-tested at
    /// its enlarged size.
    pub fn location_at(&self, p: Vec2, hovered: Option<usize>, hover_scale: f32) -> Option<usize> {
        self.locations
            .iter()
            .enumerate()
            .rev()
            .find(|(i, loc)| {
                let rect = if hovered == Some(*i) { loc.rect().scaled(hover_scale) } else { loc.rect() };
                rect.contains(p)
            })
            .map(|(i, _)| i)
    }

    pub fn world_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, GAME_WIDTH, GAME_HEIGHT)
    }
}
