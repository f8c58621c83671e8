//! Theme - shared colours and text sizes
//!
//! Colours are kept as 0xRRGGBB so they read like the art brief;
//! convert with [`hex`] / [`rgba`] at draw time.

use macroquad::prelude::Color;

/// 0xRRGGBB to an opaque colour
pub fn hex(rgb: u32) -> Color {
    rgba(rgb, 1.0)
}

/// 0xRRGGBB plus alpha
pub fn rgba(rgb: u32, alpha: f32) -> Color {
    let [_, r, g, b] = rgb.to_be_bytes();
    Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, alpha)
}

// =============================================================================
// Backgrounds
// =============================================================================

/// Game background (sky blue)
pub const SKY: u32 = 0x87CEEB;

/// Bottom of the title gradient
pub const SKY_LOW: u32 = 0x98D8C8;

/// Outside the letterboxed game area
pub const LETTERBOX: u32 = 0x000000;

// =============================================================================
// Common
// =============================================================================

/// Primary button / progress fill
pub const BUTTON_GREEN: u32 = 0x4CAF50;

/// Primary button hover
pub const BUTTON_GREEN_HOVER: u32 = 0x66BB6A;

/// Disabled button fill
pub const DISABLED_FILL: u32 = 0xCCCCCC;

/// Disabled button label
pub const DISABLED_TEXT: u32 = 0x999999;

/// Close button
pub const CLOSE_RED: u32 = 0xFF0000;

// =============================================================================
// Title
// =============================================================================

pub const TITLE_STROKE: u32 = 0x2C3E50;
pub const SUBTITLE_FILL: u32 = 0xFFD700;
pub const SUBTITLE_STROKE: u32 = 0xFF6B6B;

// =============================================================================
// Character cards
// =============================================================================

pub const CARD_SPECIAL: u32 = 0x666666;
pub const CARD_MUSIC: u32 = 0x999999;

// =============================================================================
// Town
// =============================================================================

pub const ROAD: u32 = 0x555555;

/// Preloader box behind the progress bar
pub const LOADING_BOX: u32 = 0x222222;

// =============================================================================
// Font Sizes
// =============================================================================

pub const FONT_TITLE: f32 = 84.0;
pub const FONT_SUBTITLE: f32 = 72.0;
pub const FONT_HEADING: f32 = 48.0;
pub const FONT_BUTTON: f32 = 36.0;
pub const FONT_LARGE: f32 = 24.0;
pub const FONT_MEDIUM: f32 = 18.0;
pub const FONT_SMALL: f32 = 14.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_channels() {
        let c = hex(0xFF8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
        assert_eq!(rgba(0x000000, 0.7).a, 0.7);
    }
}
