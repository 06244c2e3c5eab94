//! Top-down debug view drawn in the panel right of the 3-D view.
//!
//! The map's bounding box is scaled uniformly into the panel with a 10 %
//! margin, y pointing down the screen. The camera marker keeps a fixed
//! pixel size and is rotated by yaw; walls are plain footprints. Every
//! segment is clipped to the panel.

use glam::{Vec2, vec2};

use crate::{
    engine::{Viewport, rotate},
    renderer::{Rgba, Surface, clip_segment},
    world::{Camera, Map},
};

/// Camera marker outline relative to its tip (the camera position).
/// At yaw 0 it points toward +Y.
const MARKER: [Vec2; 4] = [
    Vec2::ZERO,
    vec2(-4.0, -12.0),
    vec2(4.0, -12.0),
    Vec2::ZERO,
];

/// Fraction of the panel the map may occupy.
const FILL: f32 = 0.9;

/// Uniform map → panel transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    pub scale: f32,
    /// World point mapped to `offset`.
    pub origin: Vec2,
    pub offset: Vec2,
}

impl Fit {
    /// Fit `map` into the right-hand panel of `view`. A map without walls
    /// is drawn 1:1 from the panel's top-left corner.
    pub fn new(map: &Map, view: &Viewport) -> Self {
        let corner = vec2(view.w, 0.0);
        let panel = vec2(view.w, view.h);
        let Some((lo, hi)) = map.bounds() else {
            return Self {
                scale: 1.0,
                origin: Vec2::ZERO,
                offset: corner,
            };
        };
        let size = (hi - lo).max(Vec2::ONE);
        let scale = (panel.x / size.x).min(panel.y / size.y) * FILL;
        Self {
            scale,
            origin: lo,
            offset: corner + (panel - size * scale) * 0.5,
        }
    }

    #[inline]
    pub fn to_panel(&self, p: Vec2) -> Vec2 {
        self.offset + (p - self.origin) * self.scale
    }
}

pub fn draw_minimap<S: Surface + ?Sized>(surface: &mut S, map: &Map, cam: &Camera, view: &Viewport) {
    let fit = Fit::new(map, view);
    let (lo, hi) = (vec2(view.w, 0.0), vec2(2.0 * view.w - 1.0, view.h - 1.0));

    surface.set_color(Rgba::BLUE);
    surface.draw_line(vec2(view.w, 0.0), vec2(view.w, view.h));

    let tip = fit.to_panel(cam.pos().truncate());
    let t = cam.trig();
    let marker = MARKER.map(|d| tip + rotate(d, t.sin2d, t.cos2d));
    surface.set_color(Rgba::WHITE);
    for w in marker.windows(2) {
        clipped_line(surface, w[0], w[1], lo, hi);
    }
    surface.set_color(Rgba::RED);
    if tip.cmpge(lo).all() && tip.cmple(hi).all() {
        surface.draw_point(tip);
    }

    for wall in map.walls() {
        let (a, b) = wall.footprint();
        surface.set_color(wall.colour());
        clipped_line(surface, fit.to_panel(a), fit.to_panel(b), lo, hi);
    }
}

fn clipped_line<S: Surface + ?Sized>(surface: &mut S, a: Vec2, b: Vec2, lo: Vec2, hi: Vec2) {
    if let Some((a, b)) = clip_segment(a, b, lo, hi) {
        surface.draw_line(a, b);
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
