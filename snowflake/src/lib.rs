//! Reiter's hexagonal cellular automaton for snowflake growth.
//!
//! The lattice it produces is written in the plain text matrix format read by
//! the `plotter` crate.

extern crate failure;
#[macro_use] extern crate log;

pub mod automaton;
pub mod errors;
pub mod lattice;

pub use automaton::{Automaton, Params};
pub use lattice::Lattice;
