use smallvec::SmallVec;
use tracing::{debug, trace};

use super::components::{Command, Keys};
use crate::world::{Camera, Limits};

pub const MOVE_STEP: f32 = 8.0; // map units per command
pub const RISE_STEP: f32 = 4.0; // map units per command
pub const LOOK_STEP: f32 = 1.0;
pub const TURN_STEP: f32 = 0.069_813_17; // 4° in radians

/// Commands issued by one keyboard snapshot, at most one per axis:
/// W/S (forward-back, look, height), turn, strafe.
pub fn commands(keys: Keys) -> SmallVec<[Command; 3]> {
    let mut out = SmallVec::new();

    let vertical = if keys.contains(Keys::SHIFT) {
        (Command::LookUp, Command::LookDown)
    } else if keys.contains(Keys::M) {
        (Command::MoveUp, Command::MoveDown)
    } else {
        (Command::Forward, Command::Backward)
    };
    if keys.contains(Keys::W) {
        out.push(vertical.0);
    } else if keys.contains(Keys::S) {
        out.push(vertical.1);
    }

    if keys.contains(Keys::COMMA) {
        out.push(Command::AntiClockwise);
    } else if keys.contains(Keys::PERIOD) {
        out.push(Command::Clockwise);
    }

    if keys.contains(Keys::A) {
        out.push(Command::StrafeLeft);
    } else if keys.contains(Keys::D) {
        out.push(Command::StrafeRight);
    }
    out
}

/// Apply a single command to the camera.
pub fn apply_command(cam: &mut Camera, cmd: Command, limits: &Limits) {
    trace!(?cmd, "apply");
    let fwd = cam.forward() * MOVE_STEP;
    let right = cam.right() * MOVE_STEP;
    let clamped = match cmd {
        Command::Forward => {
            cam.shift(fwd);
            false
        }
        Command::Backward => {
            cam.shift(-fwd);
            false
        }
        Command::StrafeLeft => {
            cam.shift(-right);
            false
        }
        Command::StrafeRight => {
            cam.shift(right);
            false
        }
        Command::MoveUp => cam.rise(RISE_STEP, limits),
        Command::MoveDown => cam.rise(-RISE_STEP, limits),
        Command::LookUp => cam.tilt(LOOK_STEP, limits),
        Command::LookDown => cam.tilt(-LOOK_STEP, limits),
        Command::AntiClockwise => {
            cam.turn(-TURN_STEP);
            false
        }
        Command::Clockwise => {
            cam.turn(TURN_STEP);
            false
        }
    };
    if clamped {
        debug!(?cmd, z = cam.pos().z, look = cam.look(), "clamped");
    }
}

/// Map one keyboard snapshot to commands and apply them in order.
pub fn player_input(cam: &mut Camera, keys: Keys, limits: &Limits) {
    for cmd in commands(keys) {
        apply_command(cam, cmd, limits);
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
