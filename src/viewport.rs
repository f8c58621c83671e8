//! Scale-to-fit viewport
//!
//! The game is laid out on a fixed 1024x768 canvas. Each frame the canvas
//! is scaled uniformly to fit the window and centred, leaving letterbox
//! bars on the long axis. Pointer positions are mapped back through the
//! same transform.

use macroquad::prelude::*;

/// Logical game width
pub const GAME_WIDTH: f32 = 1024.0;

/// Logical game height
pub const GAME_HEIGHT: f32 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Uniform game-to-screen scale
    pub scale: f32,
    /// Screen position of the game's top-left corner
    pub offset: Vec2,
}

impl Viewport {
    /// Fit the game canvas into a window of the given size
    pub fn fit(screen_w: f32, screen_h: f32) -> Self {
        let scale = (screen_w / GAME_WIDTH).min(screen_h / GAME_HEIGHT).max(f32::EPSILON);
        let offset = vec2(
            ((screen_w - GAME_WIDTH * scale) * 0.5).max(0.0),
            ((screen_h - GAME_HEIGHT * scale) * 0.5).max(0.0),
        );
        Self { scale, offset }
    }

    /// Fit the current window
    pub fn current() -> Self {
        Self::fit(screen_width(), screen_height())
    }

    /// Window pixel position to game coordinates
    pub fn to_game(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.scale
    }

    /// Game coordinates to window pixel position
    #[cfg(test)]
    pub fn to_screen(&self, game: Vec2) -> Vec2 {
        game * self.scale + self.offset
    }

    /// Letterboxed game area in framebuffer pixels.
    ///
    /// `fit` works in logical window pixels; the GL viewport wants
    /// physical ones, so everything is multiplied by the DPI scale.
    pub fn viewport_px(&self, dpi: f32) -> (i32, i32, i32, i32) {
        let dpi = if dpi.is_finite() && dpi > 0.0 { dpi } else { 1.0 };
        (
            (self.offset.x * dpi).round() as i32,
            (self.offset.y * dpi).round() as i32,
            (GAME_WIDTH * self.scale * dpi).round() as i32,
            (GAME_HEIGHT * self.scale * dpi).round() as i32,
        )
    }

    /// Camera that maps game coordinates into the letterboxed area of the
    /// current window
    pub fn camera(&self) -> Camera2D {
        self.camera_for_dpi(macroquad::miniquad::window::dpi_scale())
    }

    /// The viewport rectangle is symmetric, so GL's bottom-left origin
    /// lands on the same pixels as a top-left one.
    pub fn camera_for_dpi(&self, dpi: f32) -> Camera2D {
        Camera2D {
            target: vec2(GAME_WIDTH * 0.5, GAME_HEIGHT * 0.5),
            zoom: vec2(2.0 / GAME_WIDTH, 2.0 / GAME_HEIGHT),
            viewport: Some(self.viewport_px(dpi)),
            ..Default::default()
        }
    }
}
