//! The four playable kids
//!
//! Fixed roster: every scene (title previews, select cards, town player)
//! reads name/colour/flavour text from here.

use macroquad::prelude::Color;
use serde::{Deserialize, Serialize};
use crate::ui::hex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Character {
    Jaxon = 0,
    Parker = 1,
    Vinny = 2,
    Rocco = 3,
}

impl Character {
    pub const ALL: [Character; 4] = [
        Character::Jaxon,
        Character::Parker,
        Character::Vinny,
        Character::Rocco,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Character::Jaxon => "Jaxon",
            Character::Parker => "Parker",
            Character::Vinny => "Vinny",
            Character::Rocco => "Rocco",
        }
    }

    /// Body colour used for previews, cards, the town player and the sprite
    pub fn color(&self) -> Color {
        hex(self.rgb())
    }

    /// Raw 0xRRGGBB value (sprite painter works in bytes)
    pub fn rgb(&self) -> u32 {
        match self {
            Character::Jaxon => 0xFF6B6B,
            Character::Parker => 0xFFEB3B,
            Character::Vinny => 0x4CAF50,
            Character::Rocco => 0x9C27B0,
        }
    }

    pub fn special(&self) -> &'static str {
        match self {
            Character::Jaxon => "Slingshot Master",
            Character::Parker => "Bubble Power",
            Character::Vinny => "Master Builder",
            Character::Rocco => "Fossil Finder",
        }
    }

    /// Favourite music, shown on the select card
    pub fn music(&self) -> &'static str {
        match self {
            Character::Jaxon => "Angry Birds & Eminem",
            Character::Parker => "SpongeBob Vibes",
            Character::Vinny => "AC/DC Rock",
            Character::Rocco => "Dino Beats",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(i: usize) -> Option<Character> {
        Character::ALL.get(i).copied()
    }
}
