//! RGBA8 pixel canvas with basic vector fills
//!
//! Shapes are rasterized by sampling pixel centres, so a circle of radius
//! r at (cx, cy) covers exactly the pixels whose centre lies within r.
//! Everything clips at the canvas edges.

/// RGBA colour in bytes
pub type Rgba = [u8; 4];

/// 0xRRGGBB to an opaque RGBA byte colour
pub fn opaque(rgb: u32) -> Rgba {
    let [_, r, g, b] = rgb.to_be_bytes();
    [r, g, b, 255]
}

pub const TRANSPARENT: Rgba = [0, 0, 0, 0];

#[derive(Debug, Clone)]
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    /// Row-major RGBA8
    pub pixels: Vec<u8>,
}

impl Canvas {
    /// Fully transparent canvas
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * 4],
        }
    }

    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]])
    }

    /// Source-over blend a colour onto one pixel (ignores out-of-range)
    pub fn blend(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let i = (y as usize * self.width + x as usize) * 4;
        let sa = color[3] as u32;
        if sa == 255 {
            self.pixels[i..i + 4].copy_from_slice(&color);
            return;
        }
        if sa == 0 {
            return;
        }

        let da = self.pixels[i + 3] as u32;
        let out_a = sa + da * (255 - sa) / 255;
        for c in 0..3 {
            let s = color[c] as u32 * sa;
            let d = self.pixels[i + c] as u32 * da * (255 - sa) / 255;
            self.pixels[i + c] = if out_a == 0 { 0 } else { ((s + d) / out_a) as u8 };
        }
        self.pixels[i + 3] = out_a as u8;
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width as i32);
        let y1 = (y + h).min(self.height as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, color);
            }
        }
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgba) {
        let x0 = (cx - r).floor().max(0.0) as i32;
        let y0 = (cy - r).floor().max(0.0) as i32;
        let x1 = ((cx + r).ceil() as i32).min(self.width as i32);
        let y1 = ((cy + r).ceil() as i32).min(self.height as i32);
        let r2 = r * r;
        for py in y0..y1 {
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.blend(px, py, color);
                }
            }
        }
    }

    /// Fill a triangle (either winding)
    pub fn fill_triangle(&mut self, a: (f32, f32), b: (f32, f32), c: (f32, f32), color: Rgba) {
        let edge = |p: (f32, f32), q: (f32, f32), x: f32, y: f32| {
            (q.0 - p.0) * (y - p.1) - (q.1 - p.1) * (x - p.0)
        };
        let area = edge(a, b, c.0, c.1);
        if area == 0.0 {
            return;
        }

        let x0 = a.0.min(b.0).min(c.0).floor().max(0.0) as i32;
        let y0 = a.1.min(b.1).min(c.1).floor().max(0.0) as i32;
        let x1 = (a.0.max(b.0).max(c.0).ceil() as i32).min(self.width as i32);
        let y1 = (a.1.max(b.1).max(c.1).ceil() as i32).min(self.height as i32);

        for py in y0..y1 {
            for px in x0..x1 {
                let x = px as f32 + 0.5;
                let y = py as f32 + 0.5;
                let w0 = edge(b, c, x, y) * area.signum();
                let w1 = edge(c, a, x, y) * area.signum();
                let w2 = edge(a, b, x, y) * area.signum();
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    self.blend(px, py, color);
                }
            }
        }
    }

    /// Vertical gradient over the whole canvas, `top` on row 0 to `bottom`
    /// on the last row
    pub fn fill_gradient_v(&mut self, top: Rgba, bottom: Rgba) {
        let rows = self.height.max(1);
        for py in 0..self.height {
            let t = if rows > 1 { py as f32 / (rows - 1) as f32 } else { 0.0 };
            let mut color = [0u8; 4];
            for c in 0..4 {
                let v = top[c] as f32 + (bottom[c] as f32 - top[c] as f32) * t;
                color[c] = v.round() as u8;
            }
            self.fill_rect(0, py as i32, self.width as i32, 1, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let c = Canvas::new(4, 3);
        assert_eq!(c.pixels.len(), 48);
        assert_eq!(c.get(3, 2), Some(TRANSPARENT));
        assert_eq!(c.get(4, 0), None);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut c = Canvas::new(4, 4);
        c.fill_rect(2, 2, 10, 10, opaque(0xFF0000));
        assert_eq!(c.get(1, 1), Some(TRANSPARENT));
        assert_eq!(c.get(2, 2), Some([255, 0, 0, 255]));
        assert_eq!(c.get(3, 3), Some([255, 0, 0, 255]));
        c.fill_rect(-5, -5, 6, 6, opaque(0x00FF00));
        assert_eq!(c.get(0, 0), Some([0, 255, 0, 255]));
        assert_eq!(c.get(1, 0), Some(TRANSPARENT));
    }

    #[test]
    fn test_fill_circle_covers_center_not_corners() {
        let mut c = Canvas::new(32, 32);
        c.fill_circle(16.0, 12.0, 12.0, opaque(0xFF6B6B));
        assert_eq!(c.get(16, 12), Some([0xFF, 0x6B, 0x6B, 255]));
        assert_eq!(c.get(0, 0), Some(TRANSPARENT));
        assert_eq!(c.get(16, 30), Some(TRANSPARENT));
    }

    #[test]
    fn test_fill_triangle_roof() {
        let mut c = Canvas::new(60, 60);
        c.fill_triangle((30.0, 0.0), (0.0, 20.0), (60.0, 20.0), opaque(0xDC143C));
        assert_eq!(c.get(30, 15), Some([0xDC, 0x14, 0x3C, 255]));
        assert_eq!(c.get(2, 2), Some(TRANSPARENT));
        assert_eq!(c.get(30, 25), Some(TRANSPARENT));
    }

    #[test]
    fn test_gradient_endpoints() {
        let mut c = Canvas::new(1, 768);
        c.fill_gradient_v(opaque(0x87CEEB), opaque(0x98D8C8));
        assert_eq!(c.get(0, 0), Some([0x87, 0xCE, 0xEB, 255]));
        assert_eq!(c.get(0, 767), Some([0x98, 0xD8, 0xC8, 255]));
    }

    #[test]
    fn test_blend_half_alpha_over_opaque() {
        let mut c = Canvas::new(1, 1);
        c.fill_rect(0, 0, 1, 1, opaque(0x000000));
        c.blend(0, 0, [255, 255, 255, 128]);
        let p = c.get(0, 0).unwrap();
        assert_eq!(p[3], 255);
        assert!((p[0] as i32 - 128).abs() <= 1);
    }
}
