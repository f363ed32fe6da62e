//! CLI infrastructure for the reckon binary
//!
//! This module provides the `questions` and `tictactoe` commands.

pub mod commands;
pub mod output;
