use bitflags::bitflags;

/// One discrete camera command; each application moves the pose by a
/// fixed step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Forward,
    Backward,
    AntiClockwise,
    Clockwise,
    MoveUp,
    MoveDown,
    LookUp,
    LookDown,
    StrafeLeft,
    StrafeRight,
}

bitflags! {
    /// Snapshot of the keys the controller cares about, taken once per
    /// frame by the host.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Keys: u16 {
        const W      = 0x0001; // or Up
        const S      = 0x0002; // or Down
        const A      = 0x0004;
        const D      = 0x0008;
        const COMMA  = 0x0010; // or Left
        const PERIOD = 0x0020; // or Right
        const SHIFT  = 0x0040; // either side
        const M      = 0x0080;
    }
}
