//! Inverse document frequency and queries

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::debug;

use super::{corpus::Corpus, text::Tokenizer};

/// Word weights `ln(N / df)` for one document set.
///
/// Built once and never mutated. Words that occur in no document are
/// absent; [`IdfTable::weight`] treats them as weight 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    weights: HashMap<String, f64>,
    documents: usize,
}

impl IdfTable {
    /// Compute IDF over every word of every document in `corpus`.
    ///
    /// `df` counts documents containing the word at least once, not
    /// occurrences. A word in every document gets weight 0.
    pub fn compute(corpus: &Corpus) -> Self {
        let mut containing: HashMap<&str, HashSet<&str>> = HashMap::new();
        for doc in corpus {
            for word in &doc.tokens {
                containing
                    .entry(word.as_str())
                    .or_default()
                    .insert(doc.name.as_str());
            }
        }

        let total = corpus.len() as f64;
        let weights: HashMap<String, f64> = containing
            .into_iter()
            .map(|(word, docs)| (word.to_string(), (total / docs.len() as f64).ln()))
            .collect();

        debug!(
            documents = corpus.len(),
            vocabulary = weights.len(),
            "computed idf table"
        );

        IdfTable {
            weights,
            documents: corpus.len(),
        }
    }

    /// IDF of a word, or `None` if no document contains it
    pub fn get(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    /// IDF of a word, 0 for words outside the vocabulary
    pub fn weight(&self, word: &str) -> f64 {
        self.get(word).unwrap_or(0.0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of documents the table was computed from
    pub fn document_count(&self) -> usize {
        self.documents
    }
}

/// A set of normalized query words.
///
/// Ordered so that any summation over the query is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    words: BTreeSet<String>,
}

impl Query {
    /// Tokenize free text into a query
    pub fn parse(text: &str, tokenizer: &impl Tokenizer) -> Self {
        tokenizer.tokenize(text).into_iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Query {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Query {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relevance::text::WordTokenizer;

    fn corpus(docs: &[(&str, &str)]) -> Corpus {
        docs.iter()
            .map(|(name, text)| {
                (
                    name.to_string(),
                    text.split_whitespace().map(str::to_string).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_idf_counts_documents_not_occurrences() {
        let c = corpus(&[("a", "cat cat cat dog"), ("b", "dog bird"), ("c", "fish")]);
        let idfs = IdfTable::compute(&c);

        assert!((idfs.weight("cat") - 3f64.ln()).abs() < 1e-12);
        assert!((idfs.weight("dog") - (3f64 / 2.0).ln()).abs() < 1e-12);
        assert_eq!(idfs.len(), 4);
        assert_eq!(idfs.document_count(), 3);
    }

    #[test]
    fn test_missing_word_weighs_zero() {
        let idfs = IdfTable::compute(&corpus(&[("a", "cat")]));
        assert_eq!(idfs.get("unicorn"), None);
        assert_eq!(idfs.weight("unicorn"), 0.0);
    }

    #[test]
    fn test_empty_corpus_has_empty_table() {
        let idfs = IdfTable::compute(&Corpus::new());
        assert!(idfs.is_empty());
    }

    #[test]
    fn test_query_collapses_duplicates() {
        let query = Query::parse("Rust, rust and more RUST compilers", &WordTokenizer);
        assert_eq!(query.len(), 2);
        assert!(query.contains("rust"));
        assert!(query.contains("compilers"));
        assert_eq!(query.iter().collect::<Vec<_>>(), vec!["compilers", "rust"]);
    }
}
