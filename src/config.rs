//! Startup parameters: logical resolution, window scale, panel layout and
//! projection constants.

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::{
    engine::Viewport,
    world::{Limits, WALL_HEIGHT},
};

/// How the logical surface is split between the 3-D view and the minimap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// 3-D view on the left half, minimap on the right half.
    Split,
    /// 3-D view only, full width.
    Single,
}

/// What bounds the camera's eye height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum HeightBound {
    /// `±` panel height.
    Viewport,
    /// Floor to the fixed wall height.
    Wall,
}

#[derive(Clone, Debug, Parser)]
#[command(name = "view_wire", about = "Wireframe first-person wall renderer")]
pub struct Config {
    /// Logical width in pixels (both panels together in split layout).
    #[arg(long, default_value_t = 320)]
    pub width: usize,

    /// Logical height in pixels.
    #[arg(long, default_value_t = 120)]
    pub height: usize,

    /// Integer window scale.
    #[arg(long, default_value_t = 4)]
    pub scale: usize,

    #[arg(long, value_enum, default_value_t = Layout::Split)]
    pub layout: Layout,

    /// Depth-of-view: pixels per map unit at depth 1.
    #[arg(long, default_value_t = 200.0)]
    pub dov: f32,

    #[arg(long, value_enum, default_value_t = HeightBound::Viewport)]
    pub height_bound: HeightBound,

    /// Target frames per second.
    #[arg(long, default_value_t = 60)]
    pub fps: usize,
}

/// Rejected startup parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("logical size {0}x{1} must be non-zero")]
    EmptySurface(usize, usize),

    #[error("window scale must be at least 1")]
    ZeroScale,

    #[error("split layout needs an even width, got {0}")]
    OddSplit(usize),

    #[error("depth-of-view must be positive, got {0}")]
    BadDov(f32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 320,
            height: 120,
            scale: 4,
            layout: Layout::Split,
            dov: 200.0,
            height_bound: HeightBound::Viewport,
            fps: 60,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptySurface(self.width, self.height));
        }
        if self.scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        if self.layout == Layout::Split && self.width % 2 != 0 {
            return Err(ConfigError::OddSplit(self.width));
        }
        if self.dov.is_nan() || self.dov <= 0.0 {
            return Err(ConfigError::BadDov(self.dov));
        }
        Ok(())
    }

    /// Size of the panel the 3-D view is projected into.
    pub fn viewport(&self) -> Viewport {
        let w = match self.layout {
            Layout::Split => self.width / 2,
            Layout::Single => self.width,
        };
        Viewport::new(w as f32, self.height as f32, self.dov)
    }

    pub fn limits(&self) -> Limits {
        match self.height_bound {
            HeightBound::Viewport => Limits::viewport(self.height as f32),
            HeightBound::Wall => Limits::wall(WALL_HEIGHT),
        }
    }

    /// Window size in physical pixels.
    pub fn window_size(&self) -> (usize, usize) {
        (self.width * self.scale, self.height * self.scale)
    }
}
