//! N-Queens Solver Library
//!
//! Exhaustive backtracking search for placements of N non-attacking queens
//! on an N×N board, with two interchangeable occupancy representations
//! (boolean line arrays and bitmasks) behind one [`Solver`] trait, plus
//! the timing harness and CSV export used to compare them.

pub mod board;
pub mod persistence;
pub mod solver;
pub mod timing;

pub use solver::{ArraySolver, BitmaskSolver, CapacityError, Solver, MAX_BITMASK_BOARD};
