//! Command-line workflow shared by the four programs
//!
//! Each program takes `<strategy-flag> <file-path>`, loads the file, runs
//! the selected calculator and prints a single integer. [`run`] returns the
//! answer or a [`RunError`]; [`report`] turns either into stream output and
//! an exit status, so nothing here touches the process streams directly.

use crate::constants::{
    EXIT_LOAD_FAILURE, EXIT_USAGE, NOT_ENOUGH_ARGUMENTS_MESSAGE, OPEN_FAILURE_MESSAGE,
    PARSE_FAILURE_MESSAGE,
};
use crate::domain::corner_shop::{ProfitForecast, max_profit};
use crate::domain::empty_square::{Matrix, largest_empty_square};
use crate::domain::input_format::LoadError;
use crate::domain::sandwich_delivery::{SandwichContext, max_sandwiches};
use crate::domain::strategy::Strategy;
use crate::domain::wizard_team::{WizardGuild, highest_team_ability};
use crate::infra::guild_io::load_guild;
use crate::infra::matrix_io::load_matrix;
use crate::infra::profit_io::load_profit_forecast;
use crate::infra::sandwich_io::load_sandwich_context;
use log::{debug, info};
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;
use thiserror::Error;

/// One DP exercise: how to load its input and how to solve it
pub trait Problem {
    /// Parsed input file
    type Input;

    /// Program name used in usage text
    const PROGRAM: &'static str;

    fn load(path: &Path) -> Result<Self::Input, LoadError>;

    fn solve(input: &Self::Input, strategy: Strategy) -> i64;
}

/// Largest empty square (`dsap1`)
pub struct EmptySquare;

impl Problem for EmptySquare {
    type Input = Matrix;
    const PROGRAM: &'static str = "dsap1";

    fn load(path: &Path) -> Result<Matrix, LoadError> {
        load_matrix(path)
    }

    fn solve(input: &Matrix, strategy: Strategy) -> i64 {
        // A side length never exceeds the number of rows held in memory
        largest_empty_square(input, strategy) as i64
    }
}

/// Maximum corner-shop profit (`dsap2`)
pub struct CornerShop;

impl Problem for CornerShop {
    type Input = ProfitForecast;
    const PROGRAM: &'static str = "dsap2";

    fn load(path: &Path) -> Result<ProfitForecast, LoadError> {
        load_profit_forecast(path)
    }

    fn solve(input: &ProfitForecast, strategy: Strategy) -> i64 {
        max_profit(input, strategy)
    }
}

/// Highest-ability wizard team (`dsap3`)
pub struct WizardTeam;

impl Problem for WizardTeam {
    type Input = WizardGuild;
    const PROGRAM: &'static str = "dsap3";

    fn load(path: &Path) -> Result<WizardGuild, LoadError> {
        load_guild(path)
    }

    fn solve(input: &WizardGuild, strategy: Strategy) -> i64 {
        highest_team_ability(input, strategy)
    }
}

/// Maximum sandwiches deliverable (`dsap4`)
pub struct SandwichDelivery;

impl Problem for SandwichDelivery {
    type Input = SandwichContext;
    const PROGRAM: &'static str = "dsap4";

    fn load(path: &Path) -> Result<SandwichContext, LoadError> {
        load_sandwich_context(path)
    }

    fn solve(input: &SandwichContext, strategy: Strategy) -> i64 {
        max_sandwiches(input, strategy)
    }
}

/// Reasons a program run produces no answer
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{message}", message = NOT_ENOUGH_ARGUMENTS_MESSAGE)]
    NotEnoughArguments,
    #[error("Unknown strategy flag '{0}'.")]
    UnknownStrategy(String),
    #[error(transparent)]
    Load(#[from] LoadError),
}

impl RunError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NotEnoughArguments | Self::UnknownStrategy(_) => EXIT_USAGE,
            Self::Load(_) => EXIT_LOAD_FAILURE,
        }
    }

    /// Text written to stderr: a category line followed by the cause,
    /// plus usage for command-line mistakes
    pub fn describe<P: Problem>(&self) -> String {
        match self {
            Self::NotEnoughArguments | Self::UnknownStrategy(_) => {
                format!("{}\n{}", self, usage::<P>())
            }
            Self::Load(LoadError::Io(e)) => format!("{}\n{}", OPEN_FAILURE_MESSAGE, e),
            Self::Load(LoadError::Format(e)) => format!("{}\n{}", PARSE_FAILURE_MESSAGE, e),
        }
    }
}

/// Usage text listing every supported flag
pub fn usage<P: Problem>() -> String {
    let mut text = String::from("usage:");
    for strategy in Strategy::ALL {
        text.push_str(&format!(
            "\n       {} -{} <filename>",
            P::PROGRAM,
            strategy.short_flag()
        ));
    }
    text
}

/// Run a program on its arguments (excluding the program name)
///
/// Arguments beyond the first two are ignored.
pub fn run<P: Problem>(args: &[String]) -> Result<i64, RunError> {
    let [flag, path, ..] = args else {
        return Err(RunError::NotEnoughArguments);
    };

    let strategy =
        Strategy::from_flag(flag).ok_or_else(|| RunError::UnknownStrategy(flag.clone()))?;
    debug!("{}: {} strategy on {}", P::PROGRAM, strategy, path);

    let input = P::load(Path::new(path))?;

    let start = Instant::now();
    let answer = P::solve(&input, strategy);
    info!(
        "{}: {} strategy finished in {:.3} seconds",
        P::PROGRAM,
        strategy,
        start.elapsed().as_secs_f64()
    );

    Ok(answer)
}

/// Write the outcome of [`run`] and return the exit status
///
/// The answer goes to `out` without a trailing newline; errors go to `err`.
pub fn report<P: Problem>(
    result: &Result<i64, RunError>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<u8> {
    match result {
        Ok(answer) => {
            write!(out, "{}", answer)?;
            out.flush()?;
            Ok(0)
        }
        Err(e) => {
            writeln!(err, "{}", e.describe::<P>())?;
            Ok(e.exit_code())
        }
    }
}
