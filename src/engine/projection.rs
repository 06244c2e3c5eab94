//! World → camera → screen.
//!
//! Stages run in a fixed order and each feeds the next:
//!
//! 1. translate by the camera position,
//! 2. rotate by yaw using the cached `sin3d`/`cos3d` pair,
//! 3. divide by depth and scale by the viewport's depth-of-view,
//! 4. reject anything closer than [`NEAR`].
//!
//! Camera space: `.x` = lateral (+ toward the viewer's left, matching the
//! y-down minimap), `.y` = depth, `.z` = height relative to the eye.

use glam::{Vec2, Vec3, vec2, vec3};

use crate::{engine::types::Viewport, world::Camera};

/// Minimum depth a vertex must have to be projected.
///
/// Inclusive: a depth of exactly `NEAR` is kept, since [`clip_near`] pins
/// clipped endpoints to this value.
pub const NEAR: f32 = 1.0;

/// Screen pixels the horizon moves per unit of look offset.
pub const LOOK_SHEAR: f32 = 2.0;

/// Rotate `p` about the origin by the angle whose sine/cosine are given.
#[inline(always)]
pub fn rotate(p: Vec2, sin: f32, cos: f32) -> Vec2 {
    vec2(p.x * cos - p.y * sin, p.y * cos + p.x * sin)
}

/// Stages 1–2: world point → camera space.
#[inline]
pub fn to_camera(p: Vec3, cam: &Camera) -> Vec3 {
    let d = p - cam.pos();
    let t = cam.trig();
    let r = rotate(d.truncate(), t.sin3d, t.cos3d);
    vec3(r.x, r.y, d.z)
}

/// Stages 3–4: camera-space point → device pixels.
///
/// Returns `None` when the point sits in front of the near plane (or the
/// input is not a number); never yields NaN or infinite coordinates.
#[inline]
pub fn to_screen(c: Vec3, look: f32, view: &Viewport) -> Option<Vec2> {
    if c.y.is_nan() || c.y < NEAR {
        return None;
    }
    let k = view.dov / c.y;
    let sx = view.half_w - c.x * k;
    let sy = view.half_h - c.z * k + look * LOOK_SHEAR;
    let s = vec2(sx, sy);
    s.is_finite().then_some(s)
}

/// Full pipeline for a single world point.
#[inline]
pub fn project(p: Vec3, cam: &Camera, view: &Viewport) -> Option<Vec2> {
    to_screen(to_camera(p, cam), cam.look(), view)
}

/// Clip a camera-space segment to the near plane.
/// Returns `false` if it lies completely behind.
pub fn clip_near(a: &mut Vec3, b: &mut Vec3) -> bool {
    if a.y < NEAR && b.y < NEAR {
        return false;
    }
    if a.y < NEAR {
        let t = (NEAR - a.y) / (b.y - a.y);
        *a = a.lerp(*b, t);
        a.y = NEAR;
    } else if b.y < NEAR {
        let t = (NEAR - b.y) / (a.y - b.y);
        *b = b.lerp(*a, t);
        b.y = NEAR;
    }
    true
}

// ──────────────────────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::wrap_angle;

    fn view() -> Viewport {
        Viewport::new(160.0, 120.0, 200.0)
    }

    #[test]
    fn camera_position_is_clipped() {
        let cam = Camera::new(vec3(70.0, -110.0, 20.0), 0.0);
        assert_eq!(project(cam.pos(), &cam, &view()), None);
    }

    #[test]
    fn corner_lands_on_hand_computed_pixel() {
        // dx = -30, dy = 120, dz = -20, k = 200 / 120
        // sx = 80 + 30k = 130, sy = 60 + 20k = 93.33
        let cam = Camera::new(vec3(70.0, -110.0, 20.0), 0.0);
        let s = project(vec3(40.0, 10.0, 0.0), &cam, &view()).unwrap();
        assert!((s.x - 130.0).abs() < 1.0, "x = {}", s.x);
        assert!((s.y - 93.333).abs() < 1.0, "y = {}", s.y);
    }

    #[test]
    fn point_ahead_hits_centre_at_any_yaw() {
        for i in 0..16 {
            let cam = Camera::new(vec3(5.0, -3.0, 20.0), i as f32 * 0.41);
            let ahead = cam.pos() + (cam.forward() * 50.0).extend(0.0);
            let s = project(ahead, &cam, &view()).unwrap();
            assert!((s - vec2(80.0, 60.0)).length() < 1e-3, "yaw {}: {s}", cam.yaw());
        }
    }

    #[test]
    fn right_hand_side_lands_right_of_centre() {
        let cam = Camera::new(vec3(0.0, 0.0, 0.0), 1.3);
        let p = cam.pos() + (cam.forward() * 50.0 + cam.right() * 10.0).extend(0.0);
        let s = project(p, &cam, &view()).unwrap();
        assert!(s.x > 80.0);
        assert!((s.y - 60.0).abs() < 1e-3);
    }

    #[test]
    fn higher_points_are_drawn_higher() {
        let cam = Camera::new(vec3(0.0, 0.0, 20.0), 0.0);
        let lo = project(vec3(0.0, 100.0, 0.0), &cam, &view()).unwrap();
        let hi = project(vec3(0.0, 100.0, 40.0), &cam, &view()).unwrap();
        assert!(hi.y < lo.y);
    }

    #[test]
    fn behind_and_near_points_are_rejected() {
        let cam = Camera::new(Vec3::ZERO, 0.0);
        assert_eq!(project(vec3(0.0, -10.0, 0.0), &cam, &view()), None);
        assert_eq!(project(vec3(3.0, 0.5, 0.0), &cam, &view()), None);
        assert!(project(vec3(3.0, NEAR, 0.0), &cam, &view()).is_some());
        assert_eq!(to_screen(vec3(0.0, f32::NAN, 0.0), 0.0, &view()), None);
    }

    #[test]
    fn look_offset_shears_vertically() {
        let mut cam = Camera::new(Vec3::ZERO, 0.0);
        let p = vec3(0.0, 50.0, 0.0);
        let before = project(p, &cam, &view()).unwrap();
        let limits = crate::world::Limits::viewport(120.0);
        cam.tilt(5.0, &limits);
        let after = project(p, &cam, &view()).unwrap();
        assert_eq!(after.x, before.x);
        assert!((after.y - before.y - 5.0 * LOOK_SHEAR).abs() < 1e-4);
    }

    #[test]
    fn rotation_pairs_are_inverses() {
        let p = vec2(12.5, -7.25);
        for i in 0..32 {
            let cam = Camera::new(Vec3::ZERO, wrap_angle(i as f32 * 0.37));
            let t = cam.trig();
            let there = rotate(p, t.sin3d, t.cos3d);
            let back = rotate(there, t.sin2d, t.cos2d);
            assert!((back - p).length() < 1e-4);
        }
    }

    #[test]
    fn clip_near_trims_only_the_hidden_end() {
        let mut a = vec3(-10.0, -9.0, 0.0);
        let mut b = vec3(10.0, 11.0, 40.0);
        assert!(clip_near(&mut a, &mut b));
        assert_eq!(a.y, NEAR);
        assert!((a.x - 0.0).abs() < 1e-4);
        assert!((a.z - 20.0).abs() < 1e-4);
        assert_eq!(b, vec3(10.0, 11.0, 40.0));

        let mut c = vec3(0.0, -1.0, 0.0);
        let mut d = vec3(5.0, 0.5, 0.0);
        assert!(!clip_near(&mut c, &mut d));
    }
}
