//! Minimal first-person wireframe renderer in the style of early
//! raycasting engines.
//!
//! Walls are 2-D line segments extruded between two heights. Every frame
//! the camera pose is advanced from the keyboard, each wall corner is run
//! through the projection pipeline in [`engine`], and the resulting
//! screen-space quads are outlined on a [`renderer::Surface`] next to a
//! top-down minimap.

pub mod config;
pub mod engine;
pub mod host;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod world;
