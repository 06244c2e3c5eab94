//! 3-D pass: every wall becomes a projected wireframe quad.
//!
//! Walls are drawn in map order with no sorting or culling; overlap
//! artefacts are accepted. Every line is clipped to the viewport panel so
//! the pass never draws over the minimap.

use glam::{Vec2, Vec3, vec2};
use smallvec::SmallVec;

use crate::{
    engine::{Viewport, clip_near, to_camera, to_screen},
    renderer::{Rgba, Surface, clip_segment},
    world::{Camera, Map, Wall},
};

/// Half-size of the centre cross in pixels.
const MARK: f32 = 2.0;

/// Draw the centre marker followed by every wall of `map`.
pub fn draw_walls<S: Surface + ?Sized>(surface: &mut S, map: &Map, cam: &Camera, view: &Viewport) {
    mark(surface, vec2(view.half_w, view.half_h));
    for wall in map.walls() {
        draw_wall(surface, wall, cam, view);
    }
}

/// Project the four corners of `wall` and outline them.
///
/// If every corner is in front of the near plane and lands inside the
/// panel, the quad goes out as a single closed polyline. Otherwise each
/// edge is clipped in camera space to the near plane, then on screen to
/// the panel, and the visible remainder drawn on its own.
pub fn draw_wall<S: Surface + ?Sized>(surface: &mut S, wall: &Wall, cam: &Camera, view: &Viewport) {
    let corners: [Vec3; 4] = wall.corners().map(|p| to_camera(p, cam));
    let (lo, hi) = panel(view);
    surface.set_color(wall.colour());

    let mut outline: SmallVec<[Vec2; 5]> = corners
        .iter()
        .filter_map(|&c| to_screen(c, cam.look(), view))
        .collect();
    if outline.len() == corners.len() && outline.iter().all(|p| p.cmpge(lo).all() && p.cmple(hi).all()) {
        outline.push(outline[0]);
        surface.draw_polyline(&outline);
        return;
    }

    for i in 0..corners.len() {
        let (mut a, mut b) = (corners[i], corners[(i + 1) % corners.len()]);
        if !clip_near(&mut a, &mut b) {
            continue;
        }
        let (Some(sa), Some(sb)) = (to_screen(a, cam.look(), view), to_screen(b, cam.look(), view)) else {
            continue;
        };
        if let Some((sa, sb)) = clip_segment(sa, sb, lo, hi) {
            surface.draw_line(sa, sb);
        }
    }
}

/// Pixel rectangle `(min, max)` of the 3-D panel, inclusive.
#[inline]
fn panel(view: &Viewport) -> (Vec2, Vec2) {
    (Vec2::ZERO, vec2(view.w - 1.0, view.h - 1.0))
}

/// Small white `×` at `at`.
fn mark<S: Surface + ?Sized>(surface: &mut S, at: Vec2) {
    surface.set_color(Rgba::WHITE);
    surface.draw_line(at - vec2(MARK, MARK), at + vec2(MARK, MARK));
    surface.draw_line(at + vec2(MARK, -MARK), at + vec2(-MARK, MARK));
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::testing::{Call, RecordingSurface};
    use glam::vec3;

    fn view() -> Viewport {
        Viewport::new(160.0, 120.0, 200.0)
    }

    fn long_wall() -> Wall {
        Wall::new([40.0, 40.0], [10.0, 290.0], [0.0, 40.0], [0xFF00FFFF, 0, 0])
    }

    #[test]
    fn visible_wall_is_one_closed_polyline() {
        let cam = Camera::new(vec3(70.0, -110.0, 20.0), 0.0);
        let mut s = RecordingSurface::default();
        draw_wall(&mut s, &long_wall(), &cam, &view());

        assert_eq!(s.calls[0], Call::Color(Rgba::from_packed(0xFF00FFFF)));
        let Call::Polyline(pts) = &s.calls[1] else {
            panic!("expected polyline, got {:?}", s.calls[1]);
        };
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], pts[4]);
        // first corner (40, 10, 0): hand-computed at dov 200
        assert!((pts[0].x - 130.0).abs() < 1.0);
        assert!((pts[0].y - 93.333).abs() < 1.0);
        // the low edge recedes toward the centre
        assert!(pts[1].x < pts[0].x && pts[1].x > 80.0);
    }

    #[test]
    fn straddling_wall_is_clipped_not_garbage() {
        // camera stands beside the middle of the wall
        let cam = Camera::new(vec3(70.0, 150.0, 20.0), 0.0);
        let mut s = RecordingSurface::default();
        draw_wall(&mut s, &long_wall(), &cam, &view());

        let segs = s.segments();
        assert!(!segs.is_empty());
        assert!(s.calls.iter().all(|c| !matches!(c, Call::Polyline(_))));
        for (a, b) in segs {
            assert!(a.is_finite() && b.is_finite());
        }
    }

    #[test]
    fn wall_behind_camera_draws_nothing() {
        let cam = Camera::new(vec3(70.0, 400.0, 20.0), 0.0);
        let mut s = RecordingSurface::default();
        draw_wall(&mut s, &long_wall(), &cam, &view());
        assert!(s.segments().is_empty());
    }

    #[test]
    fn close_walls_stay_inside_the_panel() {
        // just short of the box: its near corners project far off-panel
        let cam = Camera::new(vec3(200.0, 48.0, 20.0), 0.0);
        let map = Map::demo();
        let mut s = RecordingSurface::default();
        draw_walls(&mut s, &map, &cam, &view());

        let segs = s.segments();
        // centre mark plus at least the receding side walls
        assert!(segs.len() > 2 + 2, "box should be visible");
        for (a, b) in segs {
            for p in [a, b] {
                assert!((0.0..=159.0).contains(&p.x) && (0.0..=119.0).contains(&p.y), "{p}");
            }
        }
    }

    #[test]
    fn frame_starts_with_centre_mark_then_walls_in_order() {
        let map = Map::demo();
        let cam = Camera::new(vec3(200.0, 0.0, 20.0), 0.0);
        let mut s = RecordingSurface::default();
        draw_walls(&mut s, &map, &cam, &view());

        assert_eq!(s.calls[0], Call::Color(Rgba::WHITE));
        assert_eq!(s.calls[1], Call::Line(vec2(78.0, 58.0), vec2(82.0, 62.0)));
        let colours: Vec<_> = s
            .calls
            .iter()
            .skip(3)
            .filter_map(|c| match c {
                Call::Color(c) => Some(*c),
                _ => None,
            })
            .collect();
        let expected: Vec<_> = map.walls().map(Wall::colour).collect();
        assert_eq!(colours, expected);
    }
}
