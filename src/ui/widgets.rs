//! Drawing helpers shared by the scenes
//!
//! Text is positioned by an origin like a sprite: (0,0) anchors the
//! top-left corner at (x, y), (0.5,0.5) the centre, (1,0.5) the
//! right-middle. Multi-line text is aligned on the same origin.

use macroquad::prelude::*;
use super::Rect;

/// Line advance relative to font size
const LINE_SPACING: f32 = 1.2;

/// Baseline position inside a line, relative to font size
const BASELINE: f32 = 0.8;

pub const ORIGIN_TOP_LEFT: Vec2 = Vec2::new(0.0, 0.0);
pub const ORIGIN_CENTER: Vec2 = Vec2::new(0.5, 0.5);
pub const ORIGIN_LEFT_MIDDLE: Vec2 = Vec2::new(0.0, 0.5);
pub const ORIGIN_RIGHT_MIDDLE: Vec2 = Vec2::new(1.0, 0.5);

/// How a label is painted
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    /// Outline colour and total thickness
    pub stroke: Option<(Color, f32)>,
    pub scale: f32,
}

impl TextStyle {
    pub fn new(size: f32, color: Color) -> Self {
        Self { size, color, stroke: None, scale: 1.0 }
    }

    pub fn stroke(mut self, color: Color, thickness: f32) -> Self {
        self.stroke = Some((color, thickness));
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    fn font_size(&self) -> f32 {
        self.size * self.scale
    }
}

/// Measure a (possibly multi-line) string at the given font size
pub fn measure_block(text: &str, font_size: f32) -> Vec2 {
    let mut width: f32 = 0.0;
    let mut lines = 0;
    for line in text.lines() {
        let dims = measure_text(line, None, font_size.round().max(1.0) as u16, 1.0);
        width = width.max(dims.width);
        lines += 1;
    }
    vec2(width, lines.max(1) as f32 * font_size * LINE_SPACING)
}

/// Draw text anchored at (x, y) by `origin`; returns the block's bounds
pub fn draw_label(text: &str, x: f32, y: f32, origin: Vec2, style: &TextStyle) -> Rect {
    let font_size = style.font_size();
    let block = measure_block(text, font_size);
    let left = x - block.x * origin.x;
    let top = y - block.y * origin.y;
    let line_h = font_size * LINE_SPACING;

    for (i, line) in text.lines().enumerate() {
        let dims = measure_text(line, None, font_size.round().max(1.0) as u16, 1.0);
        let lx = (left + (block.x - dims.width) * origin.x).round();
        let baseline = (top + i as f32 * line_h + font_size * BASELINE).round();

        if let Some((stroke_color, thickness)) = style.stroke {
            // Eight offset copies approximate an outline
            let r = thickness * 0.5 * style.scale;
            for (dx, dy) in [(-r, -r), (0.0, -r), (r, -r), (-r, 0.0), (r, 0.0), (-r, r), (0.0, r), (r, r)] {
                draw_text(line, lx + dx, baseline + dy, font_size, stroke_color);
            }
        }
        draw_text(line, lx, baseline, font_size, style.color);
    }

    Rect::new(left, top, block.x, block.y)
}

/// Draw text on a filled box with padding, like a street sign or name tag
pub fn draw_tag(
    text: &str,
    x: f32,
    y: f32,
    origin: Vec2,
    style: &TextStyle,
    background: Color,
    padding: Vec2,
) -> Rect {
    let font_size = style.font_size();
    let pad = padding * style.scale;
    let block = measure_block(text, font_size);
    let outer = vec2(block.x + pad.x * 2.0, block.y + pad.y * 2.0);
    let left = x - outer.x * origin.x;
    let top = y - outer.y * origin.y;

    draw_rectangle(left, top, outer.x, outer.y, background);
    draw_label(text, left + pad.x, top + pad.y, ORIGIN_TOP_LEFT, style);

    Rect::new(left, top, outer.x, outer.y)
}

/// Filled rectangle with an outline
pub fn draw_boxed_rect(rect: Rect, fill: Color, stroke: Color, thickness: f32) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
    if thickness > 0.0 {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, thickness, stroke);
    }
}

/// Filled circle with an outline
pub fn draw_ringed_circle(center: Vec2, radius: f32, fill: Color, stroke: Color, thickness: f32) {
    draw_circle(center.x, center.y, radius, fill);
    if thickness > 0.0 {
        draw_circle_lines(center.x, center.y, radius, thickness, stroke);
    }
}

/// Draw a rounded rectangle (overlapping rects plus corner circles)
pub fn draw_rounded_rect(rect: Rect, r: f32, color: Color) {
    let r = r.min(rect.w * 0.5).min(rect.h * 0.5);
    let Rect { x, y, w, h } = rect;
    draw_rectangle(x + r, y, w - r * 2.0, h, color);
    draw_rectangle(x, y + r, w, h - r * 2.0, color);
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}

/// Draw a texture stretched to `size`, centred on `center`
pub fn draw_texture_centered(texture: &Texture2D, center: Vec2, size: Vec2, tint: Color) {
    draw_texture_ex(
        texture,
        center.x - size.x * 0.5,
        center.y - size.y * 0.5,
        tint,
        DrawTextureParams {
            dest_size: Some(size),
            ..Default::default()
        },
    );
}
