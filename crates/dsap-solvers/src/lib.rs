//! dsap-solvers - Dynamic programming solvers for the DSAP exercises
//!
//! This crate provides:
//! - Four DP problems (largest empty square, corner-shop profit,
//!   wizard team ability, sandwich delivery), each with recursive,
//!   memoized and iterative strategies
//! - Strict loaders and serializers for each problem's text format
//! - A small runner shared by the `dsap1`..`dsap4` binaries

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use app::runner::{CornerShop, EmptySquare, Problem, RunError, SandwichDelivery, WizardTeam};
pub use domain::corner_shop::{ProfitForecast, max_profit};
pub use domain::empty_square::{Matrix, largest_empty_square};
pub use domain::input_format::{FormatError, LoadError};
pub use domain::sandwich_delivery::{SandwichContext, max_sandwiches};
pub use domain::strategy::Strategy;
pub use domain::wizard_team::{Wizard, WizardGuild, highest_team_ability};
