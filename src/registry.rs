//! Ownership of all placed robots and tracking of the active one.

use crate::grid::Grid;
use crate::robot::{Direction, Robot};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Output of a single `REPORT`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// `"<name>: <x>,<y>,<DIRECTION>"` for every robot, in creation order.
    pub robots: Vec<String>,
    /// `"No of robots: <count>, Active robot: <name>"`.
    pub summary: String,
}

impl Report {
    /// All lines of the block, robots first and the summary last.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.robots
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.summary.as_str()))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// All robots created during a run, plus the grid they live on.
///
/// The registry is either empty or holds at least one robot with exactly one of them
/// active. Robots are never removed, so once populated it stays populated. Every
/// operation on the active robot is a no-op while empty.
#[derive(Clone, Debug, Default)]
pub struct RobotRegistry {
    grid: Grid,
    robots: Vec<Robot>,
    active: Option<usize>,
}

impl RobotRegistry {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            robots: Vec::new(),
            active: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access, e.g. for occupancy bookkeeping.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn len(&self) -> usize {
        self.robots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.robots.is_empty()
    }

    /// Robots in creation order.
    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    /// Zero-based index of the active robot.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active(&self) -> Option<&Robot> {
        self.active.and_then(|i| self.robots.get(i))
    }

    fn active_mut(&mut self) -> Option<&mut Robot> {
        self.active.and_then(|i| self.robots.get_mut(i))
    }

    /// Places a new robot at `(x, y)` if the cell is on the grid.
    ///
    /// The first robot ever placed becomes active; later placements leave the active
    /// robot alone. Returns `false` (and creates nothing) when out of bounds.
    pub fn place(&mut self, x: i32, y: i32, direction: Direction) -> bool {
        if !self.grid.is_within_bounds(x, y) {
            trace!(x, y, "placement outside grid ignored");
            return false;
        }

        let name = format!("Robot {}", self.robots.len() + 1);
        debug!(%name, x, y, %direction, "placed robot");
        self.robots.push(Robot::new(name, x, y, direction));
        if self.active.is_none() {
            self.active = Some(0);
        }
        true
    }

    /// Makes the robot at 1-based `index` active. Out-of-range indices are ignored.
    pub fn set_active(&mut self, index: i64) {
        match usize::try_from(index) {
            Ok(i) if (1..=self.robots.len()).contains(&i) => {
                debug!(index = i, "switched active robot");
                self.active = Some(i - 1);
            }
            _ => trace!(index, "robot index out of range"),
        }
    }

    pub fn rotate_left(&mut self) {
        if let Some(robot) = self.active_mut() {
            robot.rotate_left();
        }
    }

    pub fn rotate_right(&mut self) {
        if let Some(robot) = self.active_mut() {
            robot.rotate_right();
        }
    }

    /// Moves the active robot one cell forward, staying put at the edge.
    pub fn move_active(&mut self) {
        if let Some(i) = self.active
            && let Some(robot) = self.robots.get_mut(i)
        {
            robot.advance(&self.grid);
        }
    }

    /// Snapshot of every robot and the active one, or `None` while empty.
    pub fn report_all(&self) -> Option<Report> {
        let active = self.active()?;
        let robots = self
            .robots
            .iter()
            .map(|r| format!("{}: {}", r.name, r.report()))
            .collect();
        Some(Report {
            robots,
            summary: format!(
                "No of robots: {}, Active robot: {}",
                self.robots.len(),
                active.name
            ),
        })
    }
}
