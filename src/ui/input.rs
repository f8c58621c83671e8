//! Pointer state for scene interaction

use macroquad::prelude::Vec2;
use super::Rect;

/// Mouse/touch pointer, already mapped into game coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    /// Just pressed this frame
    pub pressed: bool,
}

impl PointerState {
    /// Pointer parked at `pos`, no buttons
    pub fn at(pos: Vec2) -> Self {
        Self { pos, ..Default::default() }
    }

    /// Pointer pressed at `pos` this frame
    pub fn press(pos: Vec2) -> Self {
        Self { pos, pressed: true }
    }

    /// Check if pointer is over a rect
    pub fn hovering(&self, rect: &Rect) -> bool {
        rect.contains(self.pos)
    }

    /// Check if pointer just went down inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.pressed && rect.contains(self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::vec2;

    #[test]
    fn test_clicked_requires_press() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!PointerState::at(vec2(5.0, 5.0)).clicked(&r));
        assert!(PointerState::press(vec2(5.0, 5.0)).clicked(&r));
        assert!(!PointerState::press(vec2(15.0, 5.0)).clicked(&r));
    }
}
