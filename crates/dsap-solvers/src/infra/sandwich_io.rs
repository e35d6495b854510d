//! Sandwich delivery context file I/O
//!
//! Format: the number of days, then a line of daily orders and a line of
//! per-run-length delivery caps, each with exactly that many integers.

use crate::domain::input_format::{FormatError, LoadError};
use crate::domain::sandwich_delivery::SandwichContext;
use crate::infra::line_reader::{LineReader, join_values, read_input};
use log::debug;
use std::path::Path;

/// Load a sandwich delivery context file
pub fn load_sandwich_context(path: impl AsRef<Path>) -> Result<SandwichContext, LoadError> {
    let text = read_input(path.as_ref())?;
    let context = parse_sandwich_context(&text)?;
    debug!(
        "loaded {}-day delivery context from {}",
        context.days(),
        path.as_ref().display()
    );
    Ok(context)
}

/// Parse sandwich delivery context text
pub fn parse_sandwich_context(text: &str) -> Result<SandwichContext, FormatError> {
    let mut reader = LineReader::new(text);
    let days = reader.next_count()?;
    let orders = reader.next_integers(days)?;
    let max_deliverable = reader.next_integers(days)?;
    reader.finish()?;

    Ok(SandwichContext::from_checked_parts(orders, max_deliverable))
}

/// Serialize a context to its file format
pub fn serialize_sandwich_context(context: &SandwichContext) -> String {
    format!(
        "{}\n{}\n{}\n",
        context.days(),
        join_values(context.orders()),
        join_values(context.max_deliverable()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sandwich_context() {
        let context = parse_sandwich_context("4\n10 1 7 7\n8 4 2 1\n").unwrap();
        assert_eq!(context.days(), 4);
        assert_eq!(context.orders(), &[10, 1, 7, 7]);
        assert_eq!(context.max_deliverable(), &[8, 4, 2, 1]);
    }

    #[test]
    fn test_serialize_sandwich_context() {
        let context = SandwichContext::new(vec![3, 0], vec![2, 1]).unwrap();
        let text = serialize_sandwich_context(&context);
        assert_eq!(text, "2\n3 0\n2 1\n");
        assert_eq!(parse_sandwich_context(&text).unwrap(), context);
    }

    #[test]
    fn test_header_with_two_values() {
        assert!(matches!(
            parse_sandwich_context("4 1\n10 1 7 7\n8 4 2 1\n"),
            Err(FormatError::TokenCount { line: 1, .. })
        ));
    }

    #[test]
    fn test_long_caps_line() {
        assert!(matches!(
            parse_sandwich_context("2\n1 2\n1 2 3\n"),
            Err(FormatError::TokenCount {
                line: 3,
                expected: 2,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_missing_caps_line() {
        assert_eq!(
            parse_sandwich_context("2\n1 2\n"),
            Err(FormatError::MissingLine { line: 3 })
        );
    }

    #[test]
    fn test_order_out_of_range() {
        assert!(matches!(
            parse_sandwich_context("1\n5000000000000000000\n1\n"),
            Err(FormatError::InvalidNumber { line: 2, .. })
        ));
    }

    #[test]
    fn test_trailing_line() {
        assert_eq!(
            parse_sandwich_context("1\n1\n1\n\n"),
            Err(FormatError::TrailingContent { line: 4 })
        );
    }
}
