//! Camera flash effect

use macroquad::prelude::*;
use crate::viewport::{GAME_HEIGHT, GAME_WIDTH};

/// White overlay fading out linearly over `duration` seconds
#[derive(Debug, Clone)]
pub struct CameraFlash {
    duration: f32,
    elapsed: f32,
}

impl CameraFlash {
    pub fn new(duration: f32) -> Self {
        Self { duration: duration.max(0.0), elapsed: 0.0 }
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }

    pub fn is_active(&self) -> bool {
        self.elapsed < self.duration
    }

    /// Overlay opacity, 1.0 at the start down to 0.0
    pub fn alpha(&self) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        1.0 - self.elapsed / self.duration
    }

    /// Draw over the whole game area (call last)
    pub fn draw(&self) {
        if self.is_active() {
            draw_rectangle(0.0, 0.0, GAME_WIDTH, GAME_HEIGHT, Color::new(1.0, 1.0, 1.0, self.alpha()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_fades_to_zero() {
        let mut f = CameraFlash::new(0.25);
        assert!(f.is_active());
        assert_eq!(f.alpha(), 1.0);
        f.update(0.125);
        assert!((f.alpha() - 0.5).abs() < 1e-5);
        f.update(1.0);
        assert!(!f.is_active());
        assert_eq!(f.alpha(), 0.0);
    }

    #[test]
    fn test_zero_duration_is_inactive() {
        let f = CameraFlash::new(0.0);
        assert!(!f.is_active());
        assert_eq!(f.alpha(), 0.0);
    }
}
