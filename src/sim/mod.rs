mod components;
mod systems;

pub use components::{Command, Keys};
pub use systems::{
    LOOK_STEP, MOVE_STEP, RISE_STEP, TURN_STEP, apply_command, commands, player_input,
};
