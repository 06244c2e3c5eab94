//! ---------------------------------------------------------------------------
//! CPU line renderer
//!
//! * Fills a frame-buffer in **0x00RRGGBB** format at logical resolution.
//! * Every write is a source-over blend with the current colour.
//! * Pixels outside the surface are silently discarded.
//! ---------------------------------------------------------------------------

use glam::{Vec2, vec2};

use crate::renderer::{Rgba, Surface, clip_segment};

/// Software implementation of [`Surface`].
pub struct Canvas {
    scratch: Vec<u32>,
    width: usize,
    height: usize,
    colour: Rgba,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            scratch: vec![Rgba::BACKGROUND.to_xrgb(); width * height],
            width,
            height,
            colour: Rgba::WHITE,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.scratch
    }

    /// Nearest-neighbour upscale by an integer factor into `dst`.
    ///
    /// `dst` is resized to `(width * scale) * (height * scale)`.
    pub fn upscale_into(&self, dst: &mut Vec<u32>, scale: usize) {
        let out_w = self.width * scale;
        dst.resize(out_w * self.height * scale, 0);
        for (y, src_row) in self.scratch.chunks_exact(self.width.max(1)).enumerate() {
            let first = y * scale * out_w;
            let row = &mut dst[first..first + out_w];
            for (x, &px) in src_row.iter().enumerate() {
                row[x * scale..(x + 1) * scale].fill(px);
            }
            for k in 1..scale {
                dst.copy_within(first..first + out_w, first + k * out_w);
            }
        }
    }

    /// Guard band one pixel beyond every edge; lines are clipped to it
    /// before rasterising so Bresenham never walks far off-surface.
    #[inline]
    fn guard_band(&self) -> (Vec2, Vec2) {
        (
            Vec2::splat(-1.0),
            vec2(self.width as f32 + 1.0, self.height as f32 + 1.0),
        )
    }

    #[inline]
    fn plot(&mut self, x: i32, y: i32) {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            let idx = y as usize * self.width + x as usize;
            self.scratch[idx] = self.colour.blend_over(self.scratch[idx]);
        }
    }

    /// Integer Bresenham line-drawing algorithm.
    fn bresenham(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                if x0 == x1 {
                    break;
                }
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                if y0 == y1 {
                    break;
                }
                err += dx;
                y0 += sy;
            }
        }
    }
}

/// Pixel cell containing `p`.
#[inline]
fn cell(p: Vec2) -> (i32, i32) {
    (p.x.floor() as i32, p.y.floor() as i32)
}

/*──────────────────────── Surface trait impl ─────────────────────────*/
impl Surface for Canvas {
    fn set_logical_size(&mut self, width: usize, height: usize) {
        // (re)allocate if resolution changed
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.scratch.resize(width * height, 0);
        }
    }

    fn clear(&mut self, colour: Rgba) {
        self.scratch.fill(colour.to_xrgb());
    }

    fn set_color(&mut self, colour: Rgba) {
        self.colour = colour;
    }

    fn draw_line(&mut self, a: Vec2, b: Vec2) {
        let (min, max) = self.guard_band();
        if let Some((a, b)) = clip_segment(a, b, min, max) {
            let ((x0, y0), (x1, y1)) = (cell(a), cell(b));
            self.bresenham(x0, y0, x1, y1);
        }
    }

    fn draw_point(&mut self, p: Vec2) {
        if p.is_finite() {
            let (x, y) = cell(p);
            self.plot(x, y);
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
