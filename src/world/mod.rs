mod camera;
mod geometry;

pub use camera::{Camera, LOOK_LIMIT, Limits, Trig, wrap_angle};
pub use geometry::{Map, Section, WALL_HEIGHT, Wall};
