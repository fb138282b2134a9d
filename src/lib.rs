// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod actions;
pub mod config;
pub mod data;
pub mod grid;
pub mod instance;
pub mod plan;
pub mod plan_formatter;
pub mod solver;
pub mod state;

mod fs;
mod generator;
mod parser;
mod vec2d;

use std::error::Error;

use crate::instance::Instance;
use crate::solver::{SolverErr, SolverOk};

pub use crate::parser::ParserErr;

pub trait LoadInstance {
    fn load_instance(&self) -> Result<Instance, Box<dyn Error>>;
}

pub trait Solve {
    /// `max_states` stops the search once more states than that have been created.
    fn solve(&self, max_states: Option<usize>, print_status: bool) -> Result<SolverOk, SolverErr>;
}
