//! Binary matrix file I/O
//!
//! Format: the side length `N` on the first line, then `N` lines of exactly
//! `N` characters, `1` for an occupied cell and `0` for an empty one.

use crate::domain::empty_square::Matrix;
use crate::domain::input_format::{FormatError, LoadError};
use crate::infra::line_reader::{LineReader, read_input};
use log::debug;
use std::path::Path;

/// Load a matrix definition file
pub fn load_matrix(path: impl AsRef<Path>) -> Result<Matrix, LoadError> {
    let text = read_input(path.as_ref())?;
    let matrix = parse_matrix(&text)?;
    debug!(
        "loaded {0}x{0} matrix from {1}",
        matrix.size(),
        path.as_ref().display()
    );
    Ok(matrix)
}

/// Parse matrix definition text
pub fn parse_matrix(text: &str) -> Result<Matrix, FormatError> {
    let mut reader = LineReader::new(text);
    let size = reader.next_count()?;

    let mut cells = Vec::with_capacity(size.saturating_mul(size).min(text.len()));
    for _ in 0..size {
        let line = reader.next_line()?;
        let row = parse_row(line, size, reader.line_number())?;
        cells.extend(row);
    }
    reader.finish()?;

    Ok(Matrix::from_checked_cells(size, cells))
}

fn parse_row(line: &str, size: usize, line_number: usize) -> Result<Vec<bool>, FormatError> {
    let found = line.chars().count();
    if found != size {
        return Err(FormatError::RowLength {
            line: line_number,
            expected: size,
            found,
        });
    }

    line.chars()
        .enumerate()
        .map(|(column, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(FormatError::InvalidBoolean {
                line: line_number,
                column: column + 1,
                found: other,
            }),
        })
        .collect()
}

/// Serialize a matrix to its file format
pub fn serialize_matrix(matrix: &Matrix) -> String {
    let mut out = format!("{}\n", matrix.size());
    for row in matrix.rows() {
        out.extend(row.iter().map(|&occupied| if occupied { '1' } else { '0' }));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matrix() {
        let matrix = parse_matrix("3\n100\n000\n001\n").unwrap();
        assert_eq!(matrix.size(), 3);
        assert!(matrix.is_occupied(0, 0));
        assert!(!matrix.is_occupied(1, 0));
        assert!(matrix.is_occupied(2, 2));
    }

    #[test]
    fn test_serialize_matrix() {
        let matrix = Matrix::from_rows(&[[true, false], [false, false]]).unwrap();
        assert_eq!(serialize_matrix(&matrix), "2\n10\n00\n");
        assert_eq!(parse_matrix(&serialize_matrix(&matrix)).unwrap(), matrix);
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = parse_matrix("0\n").unwrap();
        assert_eq!(matrix.size(), 0);
        assert_eq!(serialize_matrix(&matrix), "0\n");
    }

    #[test]
    fn test_wrong_row_length() {
        assert_eq!(
            parse_matrix("2\n00\n000\n"),
            Err(FormatError::RowLength {
                line: 3,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            parse_matrix("2\n00\n0x\n"),
            Err(FormatError::InvalidBoolean {
                line: 3,
                column: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_too_few_rows() {
        assert_eq!(
            parse_matrix("3\n000\n000\n"),
            Err(FormatError::MissingLine { line: 4 })
        );
    }

    #[test]
    fn test_extra_row() {
        assert_eq!(
            parse_matrix("1\n0\n1\n"),
            Err(FormatError::TrailingContent { line: 3 })
        );
    }

    #[test]
    fn test_bad_side_length() {
        assert!(matches!(
            parse_matrix("-2\n"),
            Err(FormatError::InvalidNumber { line: 1, .. })
        ));
        assert!(matches!(
            parse_matrix(""),
            Err(FormatError::MissingLine { line: 1 })
        ));
    }
}
