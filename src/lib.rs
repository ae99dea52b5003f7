//! # grid-robots
//!
//! Toy robots on a bounded square grid, driven by text instructions such as
//! `PLACE 1,2,EAST`, `MOVE`, `LEFT`, `RIGHT`, `ROBOT 2` and `REPORT`.
//!
//! A [`RobotInterpreter`] parses each line into an [`Instruction`] and applies it to a
//! [`RobotRegistry`], which owns every robot and the [`Grid`] they move on. Reports are
//! returned as values; reading instruction files lives in [`source`] and printing is left
//! to the caller.

pub mod grid;
pub mod interpreter;
pub mod registry;
pub mod robot;
pub mod source;

pub use grid::*;
pub use interpreter::*;
pub use registry::*;
pub use robot::*;
pub use source::{SourceError, read_instructions, read_lines};
