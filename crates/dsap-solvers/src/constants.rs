//! DSAP program constants
//!
//! Note: per-problem limits live next to the data types they describe.

use crate::domain::strategy::Strategy;

// =============================================================================
// Strategy flags
// =============================================================================

/// Accepted flag spellings (after leading hyphens are stripped, lowercase)
pub const STRATEGY_FLAGS: [(&str, Strategy); 6] = [
    ("r", Strategy::Recursive),
    ("recursive", Strategy::Recursive),
    ("m", Strategy::Memoized),
    ("memoized", Strategy::Memoized),
    ("i", Strategy::Iterative),
    ("iterative", Strategy::Iterative),
];

// =============================================================================
// Wizard guild
// =============================================================================

/// Id of the wizard heading every guild
pub const ROOT_WIZARD_ID: u32 = 1;

/// Separator between wizard details and the apprentice list
pub const APPRENTICE_SEPARATOR: char = ':';

// =============================================================================
// Reporting
// =============================================================================

/// First stderr line when the input file cannot be read
pub const OPEN_FAILURE_MESSAGE: &str = "Could not open file.";

/// First stderr line when the input file is malformed
pub const PARSE_FAILURE_MESSAGE: &str = "Could not parse the file.";

/// First stderr line when fewer than two arguments are given
pub const NOT_ENOUGH_ARGUMENTS_MESSAGE: &str = "Not enough arguments were supplied.";

/// Exit status for a file that could not be opened or parsed
pub const EXIT_LOAD_FAILURE: u8 = 1;

/// Exit status for a bad command line
pub const EXIT_USAGE: u8 = 2;
