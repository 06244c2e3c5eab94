//! Window + run loop.
//!
//! The host owns the window, the software [`Canvas`] and the keyboard;
//! the core only sees them through [`Handler`] callbacks, once per frame.

use minifb::{Key, Window, WindowOptions};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::info;

use crate::{
    config::Config,
    renderer::{Surface, software::Canvas},
    sim::Keys,
};

/// Per-frame callbacks driven by [`run`].
pub trait Handler {
    /// Called once before the first frame.
    fn init(&mut self, surface: &mut dyn Surface);

    /// Apply this frame's keyboard snapshot.
    fn update(&mut self, keys: Keys);

    /// Issue this frame's draw calls.
    fn draw(&mut self, surface: &mut dyn Surface);
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("window error: {0}")]
    Window(#[from] minifb::Error),
}

/// Raw keys polled each frame, with the controller bit they set.
const BINDINGS: [(Key, Keys); 13] = [
    (Key::W, Keys::W),
    (Key::Up, Keys::W),
    (Key::S, Keys::S),
    (Key::Down, Keys::S),
    (Key::A, Keys::A),
    (Key::D, Keys::D),
    (Key::Comma, Keys::COMMA),
    (Key::Left, Keys::COMMA),
    (Key::Period, Keys::PERIOD),
    (Key::Right, Keys::PERIOD),
    (Key::LeftShift, Keys::SHIFT),
    (Key::RightShift, Keys::SHIFT),
    (Key::M, Keys::M),
];

fn read_keys(win: &Window) -> Keys {
    BINDINGS
        .iter()
        .filter(|(k, _)| win.is_key_down(*k))
        .fold(Keys::empty(), |acc, (_, bit)| acc | *bit)
}

/// Open a window and drive `handler` until it is closed or Escape is hit.
pub fn run<H: Handler>(title: &str, cfg: &Config, handler: &mut H) -> Result<(), HostError> {
    let (win_w, win_h) = cfg.window_size();
    let mut win = Window::new(title, win_w, win_h, WindowOptions::default())?;
    win.set_target_fps(cfg.fps);

    let mut canvas = Canvas::new(cfg.width, cfg.height);
    let mut present = Vec::with_capacity(win_w * win_h);
    handler.init(&mut canvas);
    info!(
        logical_w = canvas.width(),
        logical_h = canvas.height(),
        win_w,
        win_h,
        "window open"
    );

    while win.is_open() && !win.is_key_down(Key::Escape) {
        handler.update(read_keys(&win));
        handler.draw(&mut canvas);

        // the handler may have changed the logical size in init()
        let scale = (win_w / canvas.width().max(1)).max(1);
        canvas.upscale_into(&mut present, scale);
        win.update_with_buffer(&present, canvas.width() * scale, canvas.height() * scale)?;
    }
    info!("window closed");
    Ok(())
}

/// Rolling frame-rate counter.
///
/// `tick` once per frame; every `window` it returns the average FPS over
/// that period.
pub struct FrameTimer {
    window: Duration,
    frames: u32,
    since: Instant,
    fps: f32,
}

impl FrameTimer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            frames: 0,
            since: Instant::now(),
            fps: 0.0,
        }
    }

    /// Last reported average.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn tick(&mut self) -> Option<f32> {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.since);
        if elapsed < self.window {
            return None;
        }
        self.fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.since = now;
        Some(self.fps)
    }
}

// ──────────────────────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_timer_reports_once_per_window() {
        let start = Instant::now();
        let mut t = FrameTimer {
            window: Duration::from_secs(1),
            frames: 0,
            since: start,
            fps: 0.0,
        };
        for i in 1..30 {
            assert_eq!(t.tick_at(start + Duration::from_millis(i * 10)), None);
        }
        let fps = t.tick_at(start + Duration::from_secs(1)).unwrap();
        assert!((fps - 30.0).abs() < 1e-3);
        assert_eq!(t.fps(), fps);
        assert_eq!(t.tick_at(start + Duration::from_millis(1500)), None);
    }

    #[test]
    fn bindings_cover_every_controller_key() {
        let all = BINDINGS.iter().fold(Keys::empty(), |acc, (_, bit)| acc | *bit);
        assert_eq!(all, Keys::all());
    }
}
