//! Backtracking N-queens solvers.
//!
//! Two interchangeable strategies over the same row-by-row search:
//! - [`ArraySolver`] tracks attacked lines in three boolean arrays indexed
//!   by column and diagonal identifiers, setting and clearing flags around
//!   each recursive call.
//! - [`BitmaskSolver`] packs the same occupancy into three `u32` masks
//!   passed by value, extracting candidate columns one lowest set bit at
//!   a time.
//!
//! Both try columns in ascending order, so they enumerate solutions in the
//! same lexicographic order and report identical counts.

use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use crate::board::Placement;

/// Widest board the bitmask representation can hold: one column per bit.
pub const MAX_BITMASK_BOARD: usize = u32::BITS as usize;

/// Erases the occupancy strategy behind a vtable, so callers can drive
/// either solver without naming it.
pub trait Solver {
    /// Runs the full search from a fresh state and returns the elapsed
    /// wall-clock time. Repeat calls are independent.
    fn solve(&mut self) -> Duration;

    /// Number of solutions found by the last [`solve`](Solver::solve) run.
    fn solution_count(&self) -> u64;

    /// Recorded placements, nonempty only when recording was requested.
    fn solutions(&self) -> &[Placement];

    fn board_size(&self) -> usize;
}

/// Backtracking solver over boolean occupancy arrays.
///
/// The three line arrays are threaded through the recursion as mutable
/// borrows; every tentative placement is reverted on the way out, so a
/// call sees exactly the occupancy of the rows above it.
#[derive(Debug)]
pub struct ArraySolver {
    board_size: usize,
    enumerate_all: bool,
    record_solutions: bool,
    current: Vec<usize>,
    solutions: Vec<Placement>,
    count: u64,
}

impl ArraySolver {
    pub fn new(board_size: usize, enumerate_all: bool, record_solutions: bool) -> Self {
        Self {
            board_size,
            enumerate_all,
            record_solutions,
            current: Vec::with_capacity(board_size),
            solutions: Vec::new(),
            count: 0,
        }
    }

    /// Index of the major diagonal (constant `col - row`) through a cell.
    ///
    /// Offset by `n - 1` so the lowest diagonal (column 0, last row) lands
    /// at index 0 and the highest at `2n - 2`.
    fn major_diag(&self, row: usize, col: usize) -> usize {
        col + (self.board_size - 1) - row
    }

    /// Index of the minor diagonal (constant `row + col`) through a cell.
    fn minor_diag(row: usize, col: usize) -> usize {
        row + col
    }

    fn place(&mut self, row: usize, cols: &mut [bool], major: &mut [bool], minor: &mut [bool]) {
        if self.count > 0 && !self.enumerate_all {
            return;
        }

        if row == self.board_size {
            // one queen per row above us, none attacking: a full solution
            self.count += 1;
            if self.record_solutions {
                self.solutions.push(self.current.clone());
            }
            return;
        }

        for col in 0..self.board_size {
            let maj = self.major_diag(row, col);
            let min = Self::minor_diag(row, col);
            if cols[col] || major[maj] || minor[min] {
                continue;
            }

            self.current.push(col);
            cols[col] = true;
            major[maj] = true;
            minor[min] = true;

            self.place(row + 1, cols, major, minor);

            self.current.pop();
            cols[col] = false;
            major[maj] = false;
            minor[min] = false;
        }
    }
}

impl Solver for ArraySolver {
    fn solve(&mut self) -> Duration {
        self.count = 0;
        self.solutions.clear();
        self.current.clear();

        // 2n - 1 diagonals per family (0 on the empty board)
        let diagonals = (2 * self.board_size).saturating_sub(1);
        let mut cols = vec![false; self.board_size];
        let mut major = vec![false; diagonals];
        let mut minor = vec![false; diagonals];

        let start = Instant::now();
        self.place(0, &mut cols, &mut major, &mut minor);
        start.elapsed()
    }

    fn solution_count(&self) -> u64 {
        self.count
    }

    fn solutions(&self) -> &[Placement] {
        &self.solutions
    }

    fn board_size(&self) -> usize {
        self.board_size
    }
}

/// Returned when a requested board does not fit in the mask width.
#[derive(Debug)]
pub struct CapacityError {
    board_size: usize,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "board size {} exceeds the {}-bit mask capacity",
            self.board_size, MAX_BITMASK_BOARD
        )
    }
}

impl Error for CapacityError {}

/// Backtracking solver over three `u32` occupancy masks.
///
/// Bit `i` of each mask stands for column `i`, lowest bit first. The
/// diagonal masks shift one bit per row transition: the major mask toward
/// the high bit (a `col - row` diagonal meets the next row one column to
/// the right) and the minor mask toward the low bit. Masks are passed by
/// value, so backtracking needs no explicit unset; only the per-row bit
/// trail is pushed and popped.
#[derive(Debug)]
pub struct BitmaskSolver {
    board_size: usize,
    full_mask: u32,
    enumerate_all: bool,
    record_solutions: bool,
    current: Vec<u32>,
    solutions: Vec<Placement>,
    count: u64,
}

impl BitmaskSolver {
    /// Rejects boards wider than [`MAX_BITMASK_BOARD`]: the masks cannot
    /// represent more columns than they have bits, and truncating would
    /// silently miscount.
    pub fn new(
        board_size: usize,
        enumerate_all: bool,
        record_solutions: bool,
    ) -> Result<Self, CapacityError> {
        if board_size > MAX_BITMASK_BOARD {
            return Err(CapacityError { board_size });
        }

        // built by right-shifting MAX, since `1 << 32` overflows
        let full_mask = match board_size {
            0 => 0,
            n => u32::MAX >> (MAX_BITMASK_BOARD - n),
        };

        Ok(Self {
            board_size,
            full_mask,
            enumerate_all,
            record_solutions,
            current: Vec::with_capacity(board_size),
            solutions: Vec::new(),
            count: 0,
        })
    }

    fn place(&mut self, cols: u32, major: u32, minor: u32) {
        if self.count > 0 && !self.enumerate_all {
            return;
        }

        if cols == self.full_mask {
            // exactly one bit joins `cols` per level, so a full column
            // mask means every row holds a queen
            self.count += 1;
            if self.record_solutions {
                let placement = self
                    .current
                    .iter()
                    .map(|bit| bit.trailing_zeros() as usize)
                    .collect();
                self.solutions.push(placement);
            }
            return;
        }

        let mut free = !(cols | major | minor) & self.full_mask;
        while free != 0 {
            // two's-complement negation isolates the lowest set bit
            let bit = free & free.wrapping_neg();
            free ^= bit;

            self.current.push(bit);
            self.place(cols | bit, (major | bit) << 1, (minor | bit) >> 1);
            self.current.pop();
        }
    }
}

impl Solver for BitmaskSolver {
    fn solve(&mut self) -> Duration {
        self.count = 0;
        self.solutions.clear();
        self.current.clear();

        let start = Instant::now();
        self.place(0, 0, 0);
        start.elapsed()
    }

    fn solution_count(&self) -> u64 {
        self.count
    }

    fn solutions(&self) -> &[Placement] {
        &self.solutions
    }

    fn board_size(&self) -> usize {
        self.board_size
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::board::is_non_attacking;

    /// Solution counts for n = 0..=12 (the empty board has one trivial
    /// solution).
    const KNOWN_COUNTS: [u64; 13] = [1, 1, 0, 0, 2, 10, 4, 40, 92, 352, 724, 2680, 14200];

    #[test]
    fn test_array_solver_known_counts() {
        for (n, &expected) in KNOWN_COUNTS.iter().enumerate() {
            let mut solver = ArraySolver::new(n, true, false);
            solver.solve();
            assert_eq!(solver.solution_count(), expected, "board size {n}");
        }
    }

    #[test]
    fn test_bitmask_solver_known_counts() {
        for (n, &expected) in KNOWN_COUNTS.iter().enumerate() {
            let mut solver = BitmaskSolver::new(n, true, false).unwrap();
            solver.solve();
            assert_eq!(solver.solution_count(), expected, "board size {n}");
        }
    }

    #[test]
    fn test_first_solution_mode() {
        for (n, &expected) in KNOWN_COUNTS.iter().enumerate() {
            let expected_first = u64::from(expected > 0);

            let mut array = ArraySolver::new(n, false, true);
            array.solve();
            assert_eq!(array.solution_count(), expected_first, "array, board size {n}");
            assert_eq!(array.solutions().len() as u64, expected_first);

            let mut bitmask = BitmaskSolver::new(n, false, true).unwrap();
            bitmask.solve();
            assert_eq!(
                bitmask.solution_count(),
                expected_first,
                "bitmask, board size {n}"
            );
            assert_eq!(bitmask.solutions().len() as u64, expected_first);
        }
    }

    #[test]
    fn test_recorded_solutions_match_count() {
        let mut solver = BitmaskSolver::new(6, true, true).unwrap();
        solver.solve();
        assert_eq!(solver.solution_count(), 4);
        assert_eq!(solver.solutions().len(), 4);
    }

    #[test]
    fn test_enumeration_order_is_lexicographic() {
        let mut array = ArraySolver::new(6, true, true);
        array.solve();
        let mut bitmask = BitmaskSolver::new(6, true, true).unwrap();
        bitmask.solve();

        // both strategies try columns ascending, so the solution lists agree
        assert_eq!(array.solutions(), bitmask.solutions());
        assert_eq!(array.solutions()[0], vec![1, 3, 5, 0, 2, 4]);
    }

    #[test]
    fn test_n8_solutions_valid_and_distinct() {
        for solver in [
            &mut ArraySolver::new(8, true, true) as &mut dyn Solver,
            &mut BitmaskSolver::new(8, true, true).unwrap(),
        ] {
            solver.solve();
            let mut seen = FxHashSet::default();
            for placement in solver.solutions() {
                assert_eq!(placement.len(), 8);
                assert!(is_non_attacking(placement), "attacking: {placement:?}");
                assert!(seen.insert(placement.clone()), "duplicate: {placement:?}");
            }
            assert_eq!(seen.len(), 92);
        }
    }

    #[test]
    fn test_solve_resets_between_runs() {
        let mut solver = ArraySolver::new(8, true, true);
        solver.solve();
        solver.solve();
        assert_eq!(solver.solution_count(), 92);
        assert_eq!(solver.solutions().len(), 92);
    }

    #[test]
    fn test_capacity_rejected_above_mask_width() {
        assert!(BitmaskSolver::new(MAX_BITMASK_BOARD, true, false).is_ok());
        let err = BitmaskSolver::new(MAX_BITMASK_BOARD + 1, true, false).unwrap_err();
        assert!(err.to_string().contains("33"));
    }

    proptest! {
        /// The shift-pairing regression: the bitmask strategy must agree
        /// with the array strategy on every board size it is run at.
        #[test]
        fn strategies_agree_on_counts(n in 0usize..=9) {
            let mut array = ArraySolver::new(n, true, false);
            array.solve();
            let mut bitmask = BitmaskSolver::new(n, true, false).unwrap();
            bitmask.solve();
            prop_assert_eq!(array.solution_count(), bitmask.solution_count());
        }
    }
}
