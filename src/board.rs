//! Board diagrams and placement validation.
//!
//! A completed placement is a row-to-column mapping: entry `r` holds the
//! column of the queen on row `r`. Both solver strategies hand out this
//! form regardless of their internal occupancy representation.

/// A placement: one column index per row, in row order.
pub type Placement = Vec<usize>;

/// Formats a placement as a board diagram.
///
/// One line per row, with a `Q` at the occupied column and `.` elsewhere.
/// An empty placement (board size 0) formats as the empty string.
pub fn format_board(placement: &[usize], board_size: usize) -> String {
    let mut output = String::with_capacity(placement.len() * (board_size + 1));

    for &col in placement {
        for c in 0..board_size {
            output.push(if c == col { 'Q' } else { '.' });
        }
        output.push('\n');
    }

    output
}

/// Checks that no two queens in a placement attack each other.
///
/// Rows are distinct by construction (one entry per row), so only columns
/// and the two diagonal families need checking. Two queens share a
/// diagonal exactly when their row distance equals their column distance.
pub fn is_non_attacking(placement: &[usize]) -> bool {
    for (row_a, &col_a) in placement.iter().enumerate() {
        for (row_b, &col_b) in placement.iter().enumerate().skip(row_a + 1) {
            if col_a == col_b || col_a.abs_diff(col_b) == row_b - row_a {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_known_placement() {
        let diagram = format_board(&[1, 3, 0, 2], 4);
        assert_eq!(diagram, ".Q..\n...Q\nQ...\n..Q.\n");
    }

    #[test]
    fn test_format_empty_board() {
        assert_eq!(format_board(&[], 0), "");
    }

    #[test]
    fn test_format_single_cell() {
        assert_eq!(format_board(&[0], 1), "Q\n");
    }

    #[test]
    fn test_one_marker_per_row() {
        let diagram = format_board(&[2, 0, 3, 1], 4);
        for line in diagram.lines() {
            assert_eq!(line.len(), 4);
            assert_eq!(line.matches('Q').count(), 1, "row {line:?}");
        }
    }

    #[test]
    fn test_valid_placement_accepted() {
        assert!(is_non_attacking(&[1, 3, 0, 2]));
        assert!(is_non_attacking(&[]));
        assert!(is_non_attacking(&[0]));
    }

    #[test]
    fn test_shared_column_rejected() {
        assert!(!is_non_attacking(&[2, 0, 2]));
    }

    #[test]
    fn test_shared_diagonal_rejected() {
        // (0,0) and (1,1) sit on the same major diagonal
        assert!(!is_non_attacking(&[0, 1]));
        // (0,1) and (1,0) sit on the same minor diagonal
        assert!(!is_non_attacking(&[1, 0]));
    }
}
