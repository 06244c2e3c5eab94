/// Constants that depend on the *panel*, not on the map.
///
/// `dov` is the depth-of-view scale: pixels per map unit at depth 1.
/// Larger values tighten the field of view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub w: f32,
    pub h: f32,
    pub half_w: f32, // pre-derived for speed
    pub half_h: f32, // pre-derived for speed
    pub dov: f32,
}

impl Viewport {
    pub fn new(w: f32, h: f32, dov: f32) -> Self {
        Self {
            w,
            h,
            half_w: w * 0.5,
            half_h: h * 0.5,
            dov,
        }
    }
}
