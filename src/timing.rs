//! Repeated timed solver runs across board sizes.

use std::time::Duration;

/// Runs `repeats` timed solves for every board size in `1..=max_board_size`.
///
/// `solve` is handed a board size and must run one fresh search, returning
/// the elapsed time. The result is shaped `[board_size][repeat]`, in
/// seconds, ready for [`crate::persistence::save_results`].
pub fn run_timing_tests<F>(max_board_size: usize, repeats: usize, mut solve: F) -> Vec<Vec<f64>>
where
    F: FnMut(usize) -> Duration,
{
    let mut results = Vec::with_capacity(max_board_size);

    for board_size in 1..=max_board_size {
        let times: Vec<f64> = (0..repeats)
            .map(|_| solve(board_size).as_secs_f64())
            .collect();

        log::info!(
            "board size {board_size}: {repeats} runs, best {:.6}s",
            times.iter().copied().fold(f64::INFINITY, f64::min)
        );
        results.push(times);
    }

    results
}
