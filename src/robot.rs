//! Robot state, facing directions and the instruction set that drives them.

use crate::grid::Grid;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compass facing of a robot.
///
/// The discriminants are the fixed cyclic order used for rotation:
/// turning right adds one step, turning left subtracts one, both modulo 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// All directions in cyclic order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction at `index` modulo 4.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// One step counter-clockwise.
    pub fn left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// One step clockwise.
    pub fn right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Unit offset of a single move in this direction. North is `+y`.
    pub fn step(self) -> IVec2 {
        match self {
            Direction::North => IVec2::Y,
            Direction::East => IVec2::X,
            Direction::South => IVec2::NEG_Y,
            Direction::West => IVec2::NEG_X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a direction name is not one of the four upper-case values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction `{0}`")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    /// Case-sensitive: only `NORTH`, `EAST`, `SOUTH` and `WEST` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDirection(s.to_owned()))
    }
}

/// A single robot on the grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    /// Ordinal name assigned at creation, e.g. `Robot 1`.
    pub name: String,

    /// Current cell. Always inside the grid once placed by the registry.
    pub position: IVec2,

    pub direction: Direction,
}

impl Robot {
    /// Creates a robot without any bounds validation; callers check the grid first.
    pub fn new(name: impl Into<String>, x: i32, y: i32, direction: Direction) -> Self {
        Self {
            name: name.into(),
            position: IVec2::new(x, y),
            direction,
        }
    }

    /// `"<x>,<y>,<DIRECTION>"`, e.g. `1,2,NORTH`.
    pub fn report(&self) -> String {
        format!("{},{},{}", self.position.x, self.position.y, self.direction)
    }

    pub(crate) fn rotate_left(&mut self) {
        self.direction = self.direction.left();
    }

    pub(crate) fn rotate_right(&mut self) {
        self.direction = self.direction.right();
    }

    /// Moves one cell forward, saturating at the grid edge.
    pub(crate) fn advance(&mut self, grid: &Grid) {
        self.position = grid.clamp(self.position + self.direction.step());
    }
}

/// Instructions understood by the interpreter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Place a new robot (`PLACE x,y,DIRECTION`).
    Place {
        x: i32,
        y: i32,
        direction: Direction,
    },
    /// Rotate the active robot counter-clockwise (`LEFT`).
    Left,
    /// Rotate the active robot clockwise (`RIGHT`).
    Right,
    /// Move the active robot one cell forward (`MOVE`).
    Move,
    /// Select the active robot by 1-based creation index (`ROBOT n`).
    Select(i64),
    /// Report every robot plus the active one (`REPORT`).
    Report,
    /// No-op: unknown keyword or malformed argument.
    Ignore,
}
