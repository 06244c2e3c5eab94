//! Rendering abstraction layer.
//!
//! *The draw passes never touch a pixel buffer directly.*
//! They issue line/point calls against a [`Surface`], which the host
//! provides for the duration of one frame.
//!
//! * [`software::Canvas`] is the CPU back-end used by the window host.
//! * [`wireframe`] and [`minimap`] are the two passes that make up a frame.

use glam::Vec2;

/// Straight RGBA colour with named channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(0xFF, 0xFF, 0xFF);
    pub const RED: Rgba = Rgba::rgb(0xFF, 0, 0);
    pub const BLUE: Rgba = Rgba::rgb(0, 0, 0xFF);
    pub const BACKGROUND: Rgba = Rgba::rgb(0x23, 0x23, 0x23);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Decode `0xRRGGBBAA`.
    #[inline]
    pub const fn from_packed(c: u32) -> Self {
        Self {
            r: (c >> 24) as u8,
            g: (c >> 16) as u8,
            b: (c >> 8) as u8,
            a: c as u8,
        }
    }

    /// Frame-buffer format understood by the window (0x00RRGGBB).
    #[inline]
    pub const fn to_xrgb(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Source-over blend of `self` onto an 0x00RRGGBB pixel.
    pub fn blend_over(self, dst: u32) -> u32 {
        match self.a {
            0xFF => self.to_xrgb(),
            0 => dst,
            a => {
                let a = a as u32;
                let mix = |s: u8, d: u32| (s as u32 * a + (d & 0xFF) * (255 - a) + 127) / 255;
                mix(self.r, dst >> 16) << 16 | mix(self.g, dst >> 8) << 8 | mix(self.b, dst)
            }
        }
    }
}

/// Drawing capability handed to the core once per frame.
///
/// Coordinates are device pixels at the logical resolution.
pub trait Surface {
    /// Resize the logical drawing area.
    fn set_logical_size(&mut self, width: usize, height: usize);

    /// Fill the whole surface with `colour`.
    fn clear(&mut self, colour: Rgba);

    /// Colour used by subsequent draw calls.
    fn set_color(&mut self, colour: Rgba);

    fn draw_line(&mut self, a: Vec2, b: Vec2);

    fn draw_point(&mut self, p: Vec2);

    /// Connected line strip through `points`.
    fn draw_polyline(&mut self, points: &[Vec2]) {
        for w in points.windows(2) {
            self.draw_line(w[0], w[1]);
        }
    }

    /// Optional text overlay; surfaces without fonts ignore it.
    fn write_text(&mut self, _pos: Vec2, _text: &str) {}
}

/// Clip segment `a`–`b` to the rectangle `[min, max]` (Liang–Barsky).
///
/// Returns the visible part, or `None` if the segment misses the
/// rectangle or has a non-finite endpoint.
pub fn clip_segment(a: Vec2, b: Vec2, min: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    if !(a.is_finite() && b.is_finite()) {
        return None;
    }
    let d = b - a;
    let (mut t0, mut t1) = (0.0_f32, 1.0_f32);
    for (p, q) in [
        (-d.x, a.x - min.x),
        (d.x, max.x - a.x),
        (-d.y, a.y - min.y),
        (d.y, max.y - a.y),
    ] {
        if p == 0.0 {
            // parallel to this edge: either fully inside or fully out
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    // untouched endpoints are returned bit-exact
    let a_out = if t0 > 0.0 { a + d * t0 } else { a };
    let b_out = if t1 < 1.0 { a + d * t1 } else { b };
    Some((a_out, b_out))
}

pub mod minimap;
pub mod software;
pub mod wireframe;

/*──────────────────────────────── Tests ───────────────────────────────*/
