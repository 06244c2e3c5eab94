//! World → screen maths shared by the draw passes.

pub mod projection;
mod types;

pub use projection::{LOOK_SHEAR, NEAR, clip_near, project, rotate, to_camera, to_screen};
pub use types::Viewport;
