//! Command implementations

pub mod questions;
pub mod tictactoe;
