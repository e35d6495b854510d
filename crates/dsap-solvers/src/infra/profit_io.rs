//! Profit forecast file I/O
//!
//! Format:
//!
//! ```text
//! <days> <switch cost>
//! <days integers: item A profits>
//! <days integers: item B profits>
//! ```

use crate::domain::corner_shop::{Item, ProfitForecast};
use crate::domain::input_format::{FormatError, LoadError};
use crate::infra::line_reader::{LineReader, join_values, parse_count, parse_integer, read_input};
use log::debug;
use std::path::Path;

/// Load a profit forecast file
pub fn load_profit_forecast(path: impl AsRef<Path>) -> Result<ProfitForecast, LoadError> {
    let text = read_input(path.as_ref())?;
    let forecast = parse_profit_forecast(&text)?;
    debug!(
        "loaded {}-day forecast (switch cost {}) from {}",
        forecast.days(),
        forecast.switch_cost(),
        path.as_ref().display()
    );
    Ok(forecast)
}

/// Parse profit forecast text
pub fn parse_profit_forecast(text: &str) -> Result<ProfitForecast, FormatError> {
    let mut reader = LineReader::new(text);

    let header = reader.next_tokens(2)?;
    let days = parse_count(header[0], reader.line_number())?;
    let switch_cost = parse_integer(header[1], reader.line_number())?;

    let profits_a = reader.next_integers(days)?;
    let profits_b = reader.next_integers(days)?;
    reader.finish()?;

    Ok(ProfitForecast::from_checked_parts(switch_cost, profits_a, profits_b))
}

/// Serialize a forecast to its file format
pub fn serialize_profit_forecast(forecast: &ProfitForecast) -> String {
    format!(
        "{} {}\n{}\n{}\n",
        forecast.days(),
        forecast.switch_cost(),
        join_values(forecast.profits(Item::A)),
        join_values(forecast.profits(Item::B)),
    )
}
