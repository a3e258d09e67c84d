use std::ops::{Add, Mul};

use slotmap::new_key_type;

new_key_type! {
    pub struct AgentId;
    pub struct MazeId;
}

/// A lattice position or a unit direction vector, depending on context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for GridPoint {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self { x: self.x + other.x, y: self.y + other.y }
    }
}

impl Mul<i32> for GridPoint {
    type Output = Self;

    fn mul(self, factor: i32) -> Self {
        Self { x: self.x * factor, y: self.y * factor }
    }
}

impl Mul for GridPoint {
    type Output = Self;

    /// Component-wise scaling, used to map grid units onto anisotropic pixel grids.
    fn mul(self, other: Self) -> Self {
        Self { x: self.x * other.x, y: self.y * other.y }
    }
}

/// Inclusive grid extent: valid positions satisfy `0 <= x <= width` and `0 <= y <= height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds {
    pub width: i32,
    pub height: i32,
}

impl GridBounds {
    pub fn contains(self, point: GridPoint) -> bool {
        point.x >= 0 && point.x <= self.width && point.y >= 0 && point.y <= self.height
    }
}

/// The direction set a maze carves with. Chosen once per maze and never mixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionFamily {
    Orthogonal,
    Diagonal,
}

impl DirectionFamily {
    pub const fn directions(self) -> [GridPoint; 4] {
        match self {
            Self::Orthogonal => [
                GridPoint::new(-1, 0),
                GridPoint::new(1, 0),
                GridPoint::new(0, 1),
                GridPoint::new(0, -1),
            ],
            Self::Diagonal => [
                GridPoint::new(-1, -1),
                GridPoint::new(1, -1),
                GridPoint::new(1, 1),
                GridPoint::new(-1, 1),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// One carved path step in grid units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from: GridPoint,
    pub to: GridPoint,
}

/// A render instruction for the external canvas. Emitted, never buffered or retried.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub segment: Segment,
    pub color: Rgb,
    pub stroke_width: f32,
}

/// Request to start a child agent at `pos`, seeded with a truncated copy of
/// the parent's backtracking stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnProposal {
    pub pos: GridPoint,
    pub inherited_path: Vec<GridPoint>,
}

/// Outcome of advancing one agent by one step.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    Moved { segment: Segment, spawn: Option<SpawnProposal> },
    Died,
}

/// Everything one outer tick produced for the renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutput {
    pub draws: Vec<DrawCommand>,
    /// Apply the whole-canvas fade after compositing this frame's draws.
    pub fade: bool,
}
