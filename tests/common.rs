//! Common test utilities for the reckon test suite.

#![allow(dead_code)]

use std::{fs, path::Path};

use reckon::{
    relevance::{Corpus, Query},
    tictactoe::Board,
};
use tempfile::TempDir;

/// Build a corpus from whitespace-separated token strings, in order
pub fn corpus(docs: &[(&str, &str)]) -> Corpus {
    docs.iter()
        .map(|(name, text)| {
            (
                name.to_string(),
                text.split_whitespace().map(str::to_string).collect(),
            )
        })
        .collect()
}

/// Build a query from already-normalized words
pub fn query(words: &[&str]) -> Query {
    words.iter().copied().collect()
}

/// Parse a board, panicking on invalid input
pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap_or_else(|e| panic!("bad test board '{s}': {e}"))
}

/// Write files into a fresh temporary directory
pub fn corpus_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, contents) in files {
        write(dir.path(), name, contents);
    }
    dir
}

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}
