//! Interpreter that drives a [`RobotRegistry`] from text instruction lines.
//!
//! The entry point is [`RobotInterpreter`]. Configure it with a [`GridConfig`], then feed it
//! lines with [`RobotInterpreter::process_line`] or a whole sequence with
//! [`RobotInterpreter::run`]. Each `REPORT` reached yields a [`Report`].

use crate::grid::{DEFAULT_GRID_SIZE, Grid};
use crate::registry::{Report, RobotRegistry};
use crate::robot::{Direction, Instruction};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Configuration for a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Side length of the square grid.
    pub grid_size: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

/// Parses one instruction line.
///
/// The keyword is everything before the first space, the argument everything after it.
/// Unknown keywords and malformed arguments become [`Instruction::Ignore`].
pub fn parse_instruction(line: &str) -> Instruction {
    let line = line.trim();
    let (keyword, arg) = match line.split_once(' ') {
        Some((keyword, arg)) => (keyword, arg.trim()),
        None => (line, ""),
    };

    match keyword {
        "PLACE" => parse_place(arg).unwrap_or(Instruction::Ignore),
        "LEFT" => Instruction::Left,
        "RIGHT" => Instruction::Right,
        "MOVE" => Instruction::Move,
        "ROBOT" => arg
            .parse()
            .map(Instruction::Select)
            .unwrap_or(Instruction::Ignore),
        "REPORT" => Instruction::Report,
        _ => Instruction::Ignore,
    }
}

/// `x,y,DIRECTION` with exactly three fields.
fn parse_place(arg: &str) -> Option<Instruction> {
    let mut fields = arg.split(',').map(str::trim);
    let x = fields.next()?.parse().ok()?;
    let y = fields.next()?.parse().ok()?;
    let direction: Direction = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Instruction::Place { x, y, direction })
}

/// Executes instructions against an owned [`RobotRegistry`].
pub struct RobotInterpreter {
    registry: RobotRegistry,
}

impl Default for RobotInterpreter {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl RobotInterpreter {
    /// Creates an interpreter over an empty grid of the configured size.
    pub fn new(config: GridConfig) -> Self {
        Self::with_registry(RobotRegistry::new(Grid::new(config.grid_size)))
    }

    /// Resumes from an existing registry.
    pub fn with_registry(registry: RobotRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RobotRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> RobotRegistry {
        self.registry
    }

    /// Applies one instruction.
    ///
    /// Until a robot has been placed only [`Instruction::Place`] has any effect; everything
    /// else is dropped. Returns the report for [`Instruction::Report`].
    pub fn execute(&mut self, instruction: Instruction) -> Option<Report> {
        if self.registry.is_empty() && !matches!(instruction, Instruction::Place { .. }) {
            trace!(?instruction, "no robot placed yet, dropping");
            return None;
        }

        match instruction {
            Instruction::Place { x, y, direction } => {
                self.registry.place(x, y, direction);
            }
            Instruction::Left => self.registry.rotate_left(),
            Instruction::Right => self.registry.rotate_right(),
            Instruction::Move => self.registry.move_active(),
            Instruction::Select(index) => self.registry.set_active(index),
            Instruction::Report => return self.registry.report_all(),
            Instruction::Ignore => {}
        }
        None
    }

    /// Parses and applies one line.
    pub fn process_line(&mut self, line: &str) -> Option<Report> {
        let instruction = parse_instruction(line);
        if instruction == Instruction::Ignore && !line.trim().is_empty() {
            trace!(line, "ignoring unrecognized instruction");
        }
        self.execute(instruction)
    }

    /// Processes every line in order and collects the reports produced along the way.
    pub fn run<I, S>(&mut self, lines: I) -> Vec<Report>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| self.process_line(line.as_ref()))
            .collect()
    }
}
