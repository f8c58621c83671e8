//! Rectangle type for layout and hit-testing
//!
//! All coordinates are in game space (1024x768), see `crate::viewport`.

use macroquad::prelude::{vec2, Vec2};

/// A rectangle defined by top-left position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size centred on (cx, cy)
    pub fn from_center(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w * 0.5, cy - h * 0.5, w, h)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Check if point is inside (right/bottom edges exclusive)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Grow or shrink about the centre
    pub fn scaled(&self, factor: f32) -> Self {
        let c = self.center();
        Self::from_center(c.x, c.y, self.w * factor, self.h * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(512.0, 384.0, 600.0, 400.0);
        assert_eq!(r, Rect::new(212.0, 184.0, 600.0, 400.0));
        assert_eq!(r.center(), vec2(512.0, 384.0));
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(vec2(50.0, 40.0)));
        assert!(r.contains(vec2(10.0, 20.0)));
        assert!(!r.contains(vec2(110.0, 40.0)));
        assert!(!r.contains(vec2(50.0, 70.0)));
    }

    #[test]
    fn test_scaled_keeps_center() {
        let r = Rect::from_center(200.0, 200.0, 120.0, 80.0).scaled(1.1);
        assert!((r.w - 132.0).abs() < 0.001);
        assert!((r.h - 88.0).abs() < 0.001);
        assert!((r.center() - vec2(200.0, 200.0)).length() < 0.001);
    }
}
