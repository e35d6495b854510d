//! Infrastructure layer - I/O and external dependencies
//!
//! This module reads and writes the text input formats of the four problems.

pub mod guild_io;
pub mod line_reader;
pub mod matrix_io;
pub mod profit_io;
pub mod sandwich_io;
