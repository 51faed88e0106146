//! CSV export of timing results.
//!
//! One `size_<i>` column per board size and one row per repeat index, with
//! six-decimal seconds. Board sizes with fewer runs than the longest
//! column leave their remaining cells blank.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes a timing table shaped `[board_size][repeat]` as CSV.
pub fn write_results<W: Write>(results: &[Vec<f64>], writer: &mut W) -> io::Result<()> {
    for i in 0..results.len() {
        if i > 0 {
            write!(writer, ",")?;
        }
        write!(writer, "size_{}", i + 1)?;
    }
    writeln!(writer)?;

    let max_runs = results.iter().map(Vec::len).max().unwrap_or(0);
    for run in 0..max_runs {
        for (i, times) in results.iter().enumerate() {
            if i > 0 {
                write!(writer, ",")?;
            }
            if let Some(seconds) = times.get(run) {
                write!(writer, "{seconds:.6}")?;
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Saves a timing table to `path`, creating or truncating the file.
pub fn save_results(results: &[Vec<f64>], path: &Path) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_results(results, &mut file)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_csv(results: &[Vec<f64>]) -> String {
        let mut buffer = Vec::new();
        write_results(results, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_ragged_columns_left_blank() {
        let csv = to_csv(&[vec![1.0], vec![2.0, 3.0]]);
        assert_eq!(csv, "size_1,size_2\n1.000000,2.000000\n,3.000000\n");
    }

    #[test]
    fn test_fixed_six_decimal_formatting() {
        let csv = to_csv(&[vec![0.000_001_4], vec![12.5]]);
        assert_eq!(csv, "size_1,size_2\n0.000001,12.500000\n");
    }

    #[test]
    fn test_empty_table_is_header_only() {
        assert_eq!(to_csv(&[]), "\n");
    }
}
