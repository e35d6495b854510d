//! Strict line-oriented reader shared by the loaders
//!
//! Values on a line are separated by runs of horizontal whitespace
//! (spaces and tabs). Every read advances the 1-based line counter used in
//! error reports.

use crate::domain::input_format::FormatError;
use std::fs;
use std::path::Path;
use std::str::Lines;

/// Read a whole input file into memory
pub fn read_input(path: impl AsRef<Path>) -> std::io::Result<String> {
    fs::read_to_string(path)
}

/// Split a line on horizontal whitespace, skipping empty tokens
pub fn split_horizontal(line: &str) -> impl Iterator<Item = &str> {
    line.split([' ', '\t']).filter(|token| !token.is_empty())
}

/// Cursor over the lines of an input file
pub struct LineReader<'a> {
    lines: Lines<'a>,
    line_number: usize,
}

impl<'a> LineReader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line_number: 0,
        }
    }

    /// Number of the line returned by the last successful read
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Next raw line, without its terminator
    pub fn next_line(&mut self) -> Result<&'a str, FormatError> {
        self.line_number += 1;
        self.lines.next().ok_or(FormatError::MissingLine {
            line: self.line_number,
        })
    }

    /// Next line, which must hold exactly `expected` tokens
    pub fn next_tokens(&mut self, expected: usize) -> Result<Vec<&'a str>, FormatError> {
        let line = self.next_line()?;
        let tokens: Vec<&str> = split_horizontal(line).collect();
        if tokens.len() != expected {
            return Err(FormatError::TokenCount {
                line: self.line_number,
                expected,
                found: tokens.len(),
                content: line.to_string(),
            });
        }
        Ok(tokens)
    }

    /// Next line as exactly `expected` signed integers
    pub fn next_integers(&mut self, expected: usize) -> Result<Vec<i32>, FormatError> {
        let tokens = self.next_tokens(expected)?;
        let line = self.line_number;
        tokens
            .into_iter()
            .map(|token| parse_integer(token, line))
            .collect()
    }

    /// Next line as a single non-negative count
    pub fn next_count(&mut self) -> Result<usize, FormatError> {
        let tokens = self.next_tokens(1)?;
        parse_count(tokens[0], self.line_number)
    }

    /// Succeeds only if no lines remain
    pub fn finish(mut self) -> Result<(), FormatError> {
        match self.lines.next() {
            Some(_) => Err(FormatError::TrailingContent {
                line: self.line_number + 1,
            }),
            None => Ok(()),
        }
    }
}

/// Parse a signed 32-bit integer token
pub fn parse_integer(token: &str, line: usize) -> Result<i32, FormatError> {
    token.parse().map_err(|_| FormatError::InvalidNumber {
        line,
        kind: "a 32-bit integer",
        token: token.to_string(),
    })
}

/// Parse a non-negative count token
pub fn parse_count(token: &str, line: usize) -> Result<usize, FormatError> {
    token.parse().map_err(|_| FormatError::InvalidNumber {
        line,
        kind: "a non-negative integer",
        token: token.to_string(),
    })
}

/// Parse a wizard id token
pub fn parse_id(token: &str, line: usize) -> Result<u32, FormatError> {
    token.parse().map_err(|_| FormatError::InvalidNumber {
        line,
        kind: "a wizard id",
        token: token.to_string(),
    })
}

/// Join values with single spaces
pub fn join_values<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
