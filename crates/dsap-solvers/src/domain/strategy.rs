//! Calculation strategy selection
//!
//! Every problem exposes the same three interchangeable strategies.
//! The command-line flag is mapped onto a [`Strategy`] through
//! [`STRATEGY_FLAGS`].

use crate::constants::STRATEGY_FLAGS;
use std::fmt;

/// How a DP recurrence is evaluated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Plain recursion, recomputing overlapping subproblems
    Recursive,
    /// Top-down recursion with a cache of solved subproblems
    Memoized,
    /// Bottom-up table fill
    Iterative,
}

impl Strategy {
    /// All strategies, in flag order
    pub const ALL: [Strategy; 3] = [Self::Recursive, Self::Memoized, Self::Iterative];

    /// Resolve a command-line flag such as `-r`, `--Memoized` or `i`
    ///
    /// Returns `None` when the flag names no known strategy.
    pub fn from_flag(flag: &str) -> Option<Self> {
        let name = strip_hyphens(flag).to_ascii_lowercase();
        STRATEGY_FLAGS
            .iter()
            .find(|(spelling, _)| *spelling == name)
            .map(|&(_, strategy)| strategy)
    }

    /// Short flag used in usage text
    pub fn short_flag(self) -> char {
        match self {
            Self::Recursive => 'r',
            Self::Memoized => 'm',
            Self::Iterative => 'i',
        }
    }

    /// Lowercase name, identical to the long flag
    pub fn name(self) -> &'static str {
        match self {
            Self::Recursive => "recursive",
            Self::Memoized => "memoized",
            Self::Iterative => "iterative",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strip every leading hyphen from a flag
pub fn strip_hyphens(flag: &str) -> &str {
    flag.trim_start_matches('-')
}
