use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureMode {
    Idle,
    Move,
    Rotate,
    ScaleRotate,
}

impl GestureMode {
    /// Live pointer count a mode consumes; zero for idle.
    pub fn pointer_count(self) -> usize {
        match self {
            GestureMode::Idle => 0,
            GestureMode::Move | GestureMode::Rotate => 1,
            GestureMode::ScaleRotate => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GestureMode::Idle => "idle",
            GestureMode::Move => "move",
            GestureMode::Rotate => "rotate",
            GestureMode::ScaleRotate => "scale-rotate",
        }
    }
}

/// Pair measurements: distance at gesture start, plus the twist unwrapped
/// frame by frame so it can run past half a turn without flipping sign.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairBaseline {
    pub distance: f32,
    /// Pair angle seen on the previous frame.
    pub angle: f32,
    /// Pair angle change since gesture start.
    pub twist: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairGesture {
    /// Pointer ids, lower first.
    pub ids: (i32, i32),
    /// Midpoint at the previous frame.
    pub anchor: Vec2,
    pub baseline_scale: f32,
    pub baseline_rotation: f32,
    /// `None` while both pointers sit on the same spot; captured on the first
    /// move that separates them.
    pub baseline: Option<PairBaseline>,
}

/// The single active gesture. Each variant carries exactly what its mode needs.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Move {
        pointer: i32,
        anchor: Vec2,
    },
    Rotate {
        pointer: i32,
        anchor: Vec2,
        baseline_rotation: f32,
    },
    ScaleRotate(PairGesture),
}

impl GestureState {
    pub fn mode(&self) -> GestureMode {
        match self {
            GestureState::Idle => GestureMode::Idle,
            GestureState::Move { .. } => GestureMode::Move,
            GestureState::Rotate { .. } => GestureMode::Rotate,
            GestureState::ScaleRotate(_) => GestureMode::ScaleRotate,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    pub fn anchor(&self) -> Option<Vec2> {
        match self {
            GestureState::Idle => None,
            GestureState::Move { anchor, .. } | GestureState::Rotate { anchor, .. } => Some(*anchor),
            GestureState::ScaleRotate(pair) => Some(pair.anchor),
        }
    }

    pub fn baseline_distance(&self) -> Option<f32> {
        match self {
            GestureState::ScaleRotate(pair) => pair.baseline.map(|b| b.distance),
            _ => None,
        }
    }
}
