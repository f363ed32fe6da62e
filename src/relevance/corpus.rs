//! Documents, corpora and loading them from disk

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
};

use tracing::{debug, info};

use crate::{Error, Result};

/// A named token sequence. Files and sentences are both documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub tokens: Vec<String>,
}

impl Document {
    /// Raw number of occurrences of `word`
    pub fn term_frequency(&self, word: &str) -> usize {
        self.tokens.iter().filter(|token| *token == word).count()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.tokens.iter().any(|token| token == word)
    }
}

/// Documents with unique names, kept in insertion order.
///
/// Insertion order is the input order rankings fall back on for ties.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    positions: HashMap<String, usize>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document. A repeated name replaces the tokens in place and keeps
    /// the original position.
    pub fn insert(&mut self, name: impl Into<String>, tokens: Vec<String>) {
        let name = name.into();
        if let Some(&pos) = self.positions.get(&name) {
            self.documents[pos].tokens = tokens;
            return;
        }
        self.positions.insert(name.clone(), self.documents.len());
        self.documents.push(Document { name, tokens });
    }

    pub fn get(&self, name: &str) -> Option<&Document> {
        self.positions.get(name).map(|&pos| &self.documents[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<String>)> for Corpus {
    fn from_iter<I: IntoIterator<Item = (N, Vec<String>)>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for (name, tokens) in iter {
            corpus.insert(name, tokens);
        }
        corpus
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

/// Read every `.txt` file in `directory`, keyed by file name.
///
/// # Errors
///
/// Returns [`Error::CorpusLoad`] if the directory or any `.txt` file cannot
/// be read, and [`Error::EmptyCorpus`] if there are no `.txt` files.
pub fn load_files(directory: impl AsRef<Path>) -> Result<BTreeMap<String, String>> {
    let directory = directory.as_ref();
    let load_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source| Error::CorpusLoad { path, source }
    };

    let mut files = BTreeMap::new();
    for entry in fs::read_dir(directory).map_err(load_error(directory))? {
        let entry = entry.map_err(load_error(directory))?;
        let path = entry.path();

        if !path.is_file() || path.extension().is_none_or(|ext| ext != "txt") {
            debug!(path = %path.display(), "skipping non-document entry");
            continue;
        }

        let contents = fs::read_to_string(&path).map_err(load_error(&path))?;
        files.insert(entry.file_name().to_string_lossy().into_owned(), contents);
    }

    if files.is_empty() {
        return Err(Error::EmptyCorpus {
            path: directory.to_path_buf(),
        });
    }

    info!(
        directory = %directory.display(),
        documents = files.len(),
        "loaded corpus"
    );
    Ok(files)
}
