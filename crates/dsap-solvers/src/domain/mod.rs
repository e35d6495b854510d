//! Domain layer - Pure computational logic
//!
//! This module contains the problem data types and their DP calculators,
//! without I/O dependencies.

pub mod corner_shop;
pub mod empty_square;
pub mod input_format;
pub mod sandwich_delivery;
pub mod strategy;
pub mod wizard_team;
