//! Two small search engines in one crate.
//!
//! - [`relevance`]: ranks documents by TF-IDF against a query, then ranks the
//!   sentences of the best documents by summed IDF and query-term density
//! - [`tictactoe`]: board rules and a perfect-play minimax engine for
//!   Tic-Tac-Toe
//!
//! The two halves share nothing but the [`Error`] type.

pub mod cli;
pub mod config;
pub mod error;
pub mod relevance;
pub mod tictactoe;

pub use error::{Error, Result};
