//! Input file error definitions
//!
//! All four text formats share these errors. Line numbers are 1-based.

use thiserror::Error;

/// Violations of a DSAP input file format
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The file ended before the declared number of lines
    #[error("Line {line}: expected another line, but the file ended")]
    MissingLine { line: usize },
    /// A line held the wrong number of whitespace-separated items
    #[error("Line {line}: expected {expected} items, found {found} in the line: {content}")]
    TokenCount {
        line: usize,
        expected: usize,
        found: usize,
        content: String,
    },
    /// A token could not be read as the required kind of number
    #[error("Line {line}: expected {kind}, found '{token}'")]
    InvalidNumber {
        line: usize,
        kind: &'static str,
        token: String,
    },
    /// A matrix row had the wrong number of characters
    #[error("Line {line}: expected {expected} characters, found {found}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A matrix cell was neither `0` nor `1`
    #[error("Line {line}, column {column}: booleans must be represented by '0' or '1', found '{found}'")]
    InvalidBoolean {
        line: usize,
        column: usize,
        found: char,
    },
    /// A wizard line had more than one `:` separator
    #[error("Line {line}: expected at most 2 sections, found {found} in the line: {content}")]
    WizardSections {
        line: usize,
        found: usize,
        content: String,
    },
    /// Two wizard lines declared the same id
    #[error("Line {line}: wizard {id} is already defined")]
    DuplicateWizard { line: usize, id: u32 },
    /// An apprentice list referenced a wizard that is not in the file
    #[error("Wizard {wizard} lists apprentice {apprentice}, which is not defined")]
    UnknownApprentice { wizard: u32, apprentice: u32 },
    /// A non-empty guild did not contain the root wizard
    #[error("The guild has no root wizard (id {root})")]
    MissingRoot { root: u32 },
    /// A wizard was listed as an apprentice more than once
    #[error("Wizard {apprentice} is listed as an apprentice of both {first} and {second}")]
    MultipleMasters {
        apprentice: u32,
        first: u32,
        second: u32,
    },
    /// The root wizard was listed as somebody's apprentice
    #[error("The root wizard {root} is listed as an apprentice of {master}")]
    ApprenticedRoot { root: u32, master: u32 },
    /// A wizard is not part of the tree under the root wizard
    #[error("Wizard {wizard} cannot be reached from the root wizard")]
    Unreachable { wizard: u32 },
    /// Content remained after the declared number of lines
    #[error("The file is longer than the specified length (unexpected line {line})")]
    TrailingContent { line: usize },
}

/// Loading failures: either the file could not be read or it was malformed
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The file content violated the format
    #[error(transparent)]
    Format(#[from] FormatError),
}
