use glam::{Vec2, Vec3, vec2};
use std::f32::consts::TAU;

/// Bound on the vertical look offset (± units).
pub const LOOK_LIMIT: f32 = 20.0;

/// Sine/cosine of the current yaw, cached for the projection hot path.
///
/// * `sin3d`/`cos3d` = `sin(-yaw)`/`cos(-yaw)`: world → camera rotation.
/// * `sin2d`/`cos2d` = `sin(yaw)`/`cos(yaw)`: minimap marker and motion.
///
/// Both pairs are always rebuilt together from one yaw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trig {
    pub sin3d: f32,
    pub cos3d: f32,
    pub sin2d: f32,
    pub cos2d: f32,
}

impl Trig {
    pub fn from_yaw(yaw: f32) -> Self {
        let (sin3d, cos3d) = (-yaw).sin_cos();
        let (sin2d, cos2d) = yaw.sin_cos();
        Self {
            sin3d,
            cos3d,
            sin2d,
            cos2d,
        }
    }
}

/// Clamp bounds for height and look offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    pub z_min: f32,
    pub z_max: f32,
    pub look: f32,
}

impl Limits {
    /// Height bounded by `±h` (panel height).
    pub fn viewport(h: f32) -> Self {
        Self {
            z_min: -h,
            z_max: h,
            look: LOOK_LIMIT,
        }
    }

    /// Height bounded by the floor and a fixed wall height.
    pub fn wall(wall_height: f32) -> Self {
        Self {
            z_min: 0.0,
            z_max: wall_height,
            look: LOOK_LIMIT,
        }
    }
}

/// The single controllable view-point.
///
/// * `pos.x` = lateral, `pos.y` = depth, `pos.z` = eye height.
/// * `yaw` in radians, always in `[0, 2π)`; `+yaw` turns clockwise on the
///   minimap (whose y axis points down the screen).
/// * `look` shears the vertical screen axis to fake pitch.
///
/// Fields are private so the trig cache can never go stale.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pos: Vec3,
    yaw: f32,
    look: f32,
    trig: Trig,
}

impl Camera {
    pub fn new(pos: Vec3, yaw: f32) -> Self {
        let yaw = wrap_angle(yaw);
        Self {
            pos,
            yaw,
            look: 0.0,
            trig: Trig::from_yaw(yaw),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec3 {
        self.pos
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn look(&self) -> f32 {
        self.look
    }

    #[inline]
    pub fn trig(&self) -> &Trig {
        &self.trig
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit vector of travel for "forward" on the X-Y plane.
    /// Yaw 0 looks down +Y.
    #[inline]
    pub fn forward(&self) -> Vec2 {
        vec2(-self.trig.sin2d, self.trig.cos2d)
    }

    /// Unit vector to the viewer's right on the X-Y plane.
    #[inline]
    pub fn right(&self) -> Vec2 {
        vec2(-self.trig.cos2d, -self.trig.sin2d)
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Translate on the X-Y plane, preserving eye height.
    pub fn shift(&mut self, delta: Vec2) {
        self.pos.x += delta.x;
        self.pos.y += delta.y;
    }

    /// Rotate by `delta` radians and rebuild the trig cache.
    pub fn turn(&mut self, delta: f32) {
        self.yaw = wrap_angle(self.yaw + delta);
        self.trig = Trig::from_yaw(self.yaw);
    }

    /// Change eye height; returns `true` if the result was clamped.
    pub fn rise(&mut self, delta: f32, limits: &Limits) -> bool {
        let z = self.pos.z + delta;
        self.pos.z = z.clamp(limits.z_min, limits.z_max);
        self.pos.z != z
    }

    /// Change look offset; returns `true` if the result was clamped.
    pub fn tilt(&mut self, delta: f32, limits: &Limits) -> bool {
        let l = self.look + delta;
        self.look = l.clamp(-limits.look, limits.look);
        self.look != l
    }
}

/// Wrap any angle into `[0, 2π)`.
#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    let w = a.rem_euclid(TAU);
    // rem_euclid rounds tiny negatives up to exactly TAU
    if w >= TAU { 0.0 } else { w }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn forward_and_right_are_orthonormal() {
        let mut cam = Camera::new(Vec3::ZERO, 0.3);
        cam.turn(1.1);
        let f = cam.forward();
        let r = cam.right();
        assert!((f.length() - 1.0).abs() < 1e-5);
        assert!((r.length() - 1.0).abs() < 1e-5);
        assert!(f.dot(r).abs() < 1e-5);
    }

    #[test]
    fn yaw_zero_faces_positive_y() {
        let cam = Camera::new(Vec3::ZERO, 0.0);
        assert!((cam.forward() - vec2(0.0, 1.0)).length() < 1e-6);
        assert!((cam.right() - vec2(-1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn turn_wraps_both_ways() {
        let mut cam = Camera::new(Vec3::ZERO, 0.0);
        cam.turn(-0.1);
        assert!(cam.yaw() >= 0.0 && cam.yaw() < TAU);
        assert!((cam.yaw() - (TAU - 0.1)).abs() < 1e-5);
        cam.turn(0.2);
        assert!((cam.yaw() - 0.1).abs() < 1e-5);
    }

    #[test]
    fn trig_cache_tracks_yaw() {
        let mut cam = Camera::new(Vec3::ZERO, 0.0);
        for _ in 0..37 {
            cam.turn(FRAC_PI_2 / 7.0);
            let a = cam.yaw();
            let t = cam.trig();
            assert_eq!(t.sin2d, a.sin());
            assert_eq!(t.cos2d, a.cos());
            assert_eq!(t.sin3d, (-a).sin());
            assert_eq!(t.cos3d, (-a).cos());
        }
    }

    #[test]
    fn wrap_angle_never_returns_tau() {
        assert_eq!(wrap_angle(-1e-9), 0.0);
        assert_eq!(wrap_angle(TAU), 0.0);
        assert!((wrap_angle(3.0 * TAU + 1.0) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn rise_and_tilt_report_clamping() {
        let limits = Limits::wall(40.0);
        let mut cam = Camera::new(Vec3::new(0.0, 0.0, 38.0), 0.0);
        assert!(cam.rise(4.0, &limits));
        assert_eq!(cam.pos().z, 40.0);
        assert!(!cam.rise(-4.0, &limits));
        assert!(!cam.tilt(1.0, &limits));
        assert_eq!(cam.look(), 1.0);
    }
}
