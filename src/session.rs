//! The per-frame controller: owns the map and the camera and composes a
//! frame out of the minimap and wireframe passes.

use glam::{Vec3, vec2};
use std::time::Duration;
use tracing::info;

use crate::{
    config::{Config, Layout},
    engine::Viewport,
    host::{FrameTimer, Handler},
    renderer::{Rgba, Surface, minimap::draw_minimap, wireframe::draw_walls},
    sim::{Keys, player_input},
    world::{Camera, Limits, Map},
};

/// Pose the camera starts every session in.
pub const START_POS: Vec3 = Vec3::new(200.0, 40.0, 20.0);

/// How often the frame rate is reported.
const FPS_WINDOW: Duration = Duration::from_secs(3);

pub struct Session {
    pub map: Map,
    pub camera: Camera,
    view: Viewport,
    limits: Limits,
    layout: Layout,
    timer: FrameTimer,
}

impl Session {
    pub fn new(cfg: &Config, map: Map) -> Self {
        Self {
            map,
            camera: Camera::new(START_POS, 0.0),
            view: cfg.viewport(),
            limits: cfg.limits(),
            layout: cfg.layout,
            timer: FrameTimer::new(FPS_WINDOW),
        }
    }

    /// Logical size of the whole surface for the current layout.
    pub fn logical_size(&self) -> (usize, usize) {
        let panels = match self.layout {
            Layout::Split => 2.0,
            Layout::Single => 1.0,
        };
        ((self.view.w * panels) as usize, self.view.h as usize)
    }
}

impl Handler for Session {
    fn init(&mut self, surface: &mut dyn Surface) {
        let (w, h) = self.logical_size();
        surface.set_logical_size(w, h);
        info!(sections = self.map.sections.len(), w, h, layout = ?self.layout, "session ready");
    }

    fn update(&mut self, keys: Keys) {
        player_input(&mut self.camera, keys, &self.limits);
    }

    fn draw(&mut self, surface: &mut dyn Surface) {
        surface.clear(Rgba::BACKGROUND);
        if self.layout == Layout::Split {
            draw_minimap(surface, &self.map, &self.camera, &self.view);
        }
        draw_walls(surface, &self.map, &self.camera, &self.view);

        if let Some(fps) = self.timer.tick() {
            let p = self.camera.pos();
            info!(fps, x = p.x, y = p.y, z = p.z, yaw = self.camera.yaw(), "frame rate");
        }
        surface.write_text(vec2(self.view.w - 40.0, 0.0), &format!("{:.0} fps", self.timer.fps()));
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
