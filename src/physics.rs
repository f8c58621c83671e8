//! Arcade physics body
//!
//! Top-down, no gravity: a box-shaped body that integrates velocity and
//! optionally stays inside world bounds, losing the velocity component
//! that pushes into an edge. The player is the only body in
//! the game, so there is no broad phase and no body-vs-body collision.

use macroquad::prelude::*;
use crate::ui::Rect;

#[derive(Debug, Clone)]
pub struct ArcadeBody {
    /// Centre of the body
    pub position: Vec2,
    /// Pixels per second
    pub velocity: Vec2,
    pub half_size: Vec2,
    /// Area the body is kept inside when `collide_world_bounds` is set
    pub bounds: Rect,
    pub collide_world_bounds: bool,
}

impl ArcadeBody {
    /// Body sized to a circle of `radius` (the bounding square)
    pub fn circle(position: Vec2, radius: f32, bounds: Rect) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            half_size: Vec2::splat(radius),
            bounds,
            collide_world_bounds: false,
        }
    }

    pub fn with_world_bounds(mut self, collide: bool) -> Self {
        self.collide_world_bounds = collide;
        self
    }

    pub fn set_velocity(&mut self, x: f32, y: f32) {
        self.velocity = vec2(x, y);
    }

    pub fn set_velocity_x(&mut self, x: f32) {
        self.velocity.x = x;
    }

    pub fn set_velocity_y(&mut self, y: f32) {
        self.velocity.y = y;
    }

    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    /// Integrate one step of `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.position += self.velocity * dt.max(0.0);

        if !self.collide_world_bounds {
            return;
        }

        let min = vec2(self.bounds.x, self.bounds.y) + self.half_size;
        let max = vec2(self.bounds.right(), self.bounds.bottom()) - self.half_size;

        if self.position.x < min.x {
            self.position.x = min.x;
            self.velocity.x = self.velocity.x.max(0.0);
        } else if self.position.x > max.x {
            self.position.x = max.x;
            self.velocity.x = self.velocity.x.min(0.0);
        }

        if self.position.y < min.y {
            self.position.y = min.y;
            self.velocity.y = self.velocity.y.max(0.0);
        } else if self.position.y > max.y {
            self.position.y = max.y;
            self.velocity.y = self.velocity.y.min(0.0);
        }
    }
}

/// Velocity of magnitude `speed` pointing from `from` towards `to`.
///
/// Uses the angle between the points, so coincident points yield
/// `(speed, 0)` (atan2(0, 0) == 0).
pub fn velocity_towards(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    let d = to - from;
    let angle = d.y.atan2(d.x);
    vec2(angle.cos(), angle.sin()) * speed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> Rect {
        Rect::new(0.0, 0.0, 1024.0, 768.0)
    }

    #[test]
    fn test_step_integrates_velocity() {
        let mut body = ArcadeBody::circle(vec2(200.0, 200.0), 20.0, world());
        body.set_velocity(200.0, -100.0);
        body.step(0.5);
        assert_eq!(body.position, vec2(300.0, 150.0));
    }

    #[test]
    fn test_world_bounds_clamp_and_stop() {
        let mut body = ArcadeBody::circle(vec2(30.0, 740.0), 20.0, world()).with_world_bounds(true);
        body.set_velocity(-200.0, 200.0);
        body.step(1.0);
        assert_eq!(body.position, vec2(20.0, 748.0));
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_without_bounds_body_leaves_world() {
        let mut body = ArcadeBody::circle(vec2(10.0, 10.0), 20.0, world());
        body.set_velocity(-100.0, 0.0);
        body.step(1.0);
        assert_eq!(body.position.x, -90.0);
    }

    #[test]
    fn test_velocity_towards() {
        let v = velocity_towards(vec2(0.0, 0.0), vec2(0.0, 50.0), 200.0);
        assert!(v.x.abs() < 1e-3);
        assert!((v.y - 200.0).abs() < 1e-3);

        let v = velocity_towards(vec2(10.0, 10.0), vec2(13.0, 14.0), 200.0);
        assert!((v.length() - 200.0).abs() < 1e-3);
        assert!((v.x - 120.0).abs() < 1e-3);

        let v = velocity_towards(vec2(5.0, 5.0), vec2(5.0, 5.0), 200.0);
        assert_eq!(v, vec2(200.0, 0.0));
    }
}
