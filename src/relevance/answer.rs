//! End-to-end question answering over a loaded corpus

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use super::{
    corpus::Corpus,
    idf::{IdfTable, Query},
    ranking::{ScoredDocument, ScoredSentence, rank_files, rank_sentences},
    text::{PunctuationSplitter, SentenceSplitter, Tokenizer, WordTokenizer},
};
use crate::config::QuestionsConfig;

/// Ranked files and sentences for one query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub query: Vec<String>,
    pub files: Vec<ScoredDocument>,
    pub sentences: Vec<ScoredSentence>,
}

/// Holds a tokenized corpus and its file-level IDF table.
pub struct QuestionAnswerer<T = WordTokenizer, S = PunctuationSplitter> {
    files: BTreeMap<String, String>,
    file_words: Corpus,
    file_idfs: IdfTable,
    tokenizer: T,
    splitter: S,
}

impl QuestionAnswerer {
    /// Build with the default tokenizer and sentence splitter
    pub fn from_files(files: BTreeMap<String, String>) -> Self {
        Self::new(files, WordTokenizer, PunctuationSplitter)
    }
}

impl<T: Tokenizer, S: SentenceSplitter> QuestionAnswerer<T, S> {
    pub fn new(files: BTreeMap<String, String>, tokenizer: T, splitter: S) -> Self {
        let file_words: Corpus = files
            .iter()
            .map(|(name, text)| (name.clone(), tokenizer.tokenize(text)))
            .collect();
        let file_idfs = IdfTable::compute(&file_words);

        QuestionAnswerer {
            files,
            file_words,
            file_idfs,
            tokenizer,
            splitter,
        }
    }

    pub fn file_words(&self) -> &Corpus {
        &self.file_words
    }

    pub fn file_idfs(&self) -> &IdfTable {
        &self.file_idfs
    }

    pub fn query(&self, text: &str) -> Query {
        Query::parse(text, &self.tokenizer)
    }

    /// Sentences of the named files that keep at least one token.
    ///
    /// Files are split into passages on newlines first, then into sentences.
    pub fn sentences_of<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Corpus {
        let mut sentences = Corpus::new();
        for name in names {
            let Some(text) = self.files.get(name) else {
                continue;
            };
            for passage in text.lines() {
                for sentence in self.splitter.split(passage) {
                    let tokens = self.tokenizer.tokenize(&sentence);
                    if !tokens.is_empty() {
                        sentences.insert(sentence, tokens);
                    }
                }
            }
        }
        sentences
    }

    /// Rank files, then rank the sentences of the best files
    pub fn answer(&self, query_text: &str, config: &QuestionsConfig) -> Answer {
        let query = self.query(query_text);
        if query.is_empty() {
            warn!("query has no searchable words; every document scores 0");
        }

        let mut files = rank_files(&query, &self.file_words, &self.file_idfs);
        files.truncate(config.file_matches);

        let sentences = self.sentences_of(files.iter().map(|doc| doc.name.as_str()));
        let sentence_idfs = IdfTable::compute(&sentences);
        let mut ranked = rank_sentences(&query, &sentences, &sentence_idfs);
        ranked.truncate(config.sentence_matches);

        debug!(
            query_words = query.len(),
            candidate_sentences = sentences.len(),
            "answered query"
        );

        Answer {
            query: query.iter().map(str::to_string).collect(),
            files,
            sentences: ranked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files() -> BTreeMap<String, String> {
        [
            (
                "python.txt",
                "Python is a programming language.\nGuido van Rossum created Python in 1991. It is popular.",
            ),
            (
                "rust.txt",
                "Rust is a systems language. The borrow checker enforces memory safety.",
            ),
            ("ocean.txt", "The ocean is deep. Whales swim in the ocean."),
        ]
        .into_iter()
        .map(|(name, text)| (name.to_string(), text.to_string()))
        .collect()
    }

    #[test]
    fn answers_from_best_file() {
        let qa = QuestionAnswerer::from_files(files());
        let answer = qa.answer("Who created Python?", &QuestionsConfig::default());

        assert_eq!(answer.files.len(), 1);
        assert_eq!(answer.files[0].name, "python.txt");
        assert_eq!(
            answer.sentences[0].text,
            "Guido van Rossum created Python in 1991."
        );
    }

    #[test]
    fn sentences_skip_stopword_only_fragments() {
        let qa = QuestionAnswerer::from_files(files());
        let sentences = qa.sentences_of(["python.txt"]);
        // "It is popular." keeps "popular"
        assert_eq!(sentences.len(), 3);
        assert!(sentences.get("Python is a programming language.").is_some());
    }

    #[test]
    fn empty_query_still_returns_requested_counts() {
        let qa = QuestionAnswerer::from_files(files());
        let config = QuestionsConfig::default()
            .with_file_matches(3)
            .with_sentence_matches(2);
        let answer = qa.answer("the and of", &config);

        assert!(answer.query.is_empty());
        assert_eq!(answer.files.len(), 3);
        assert!(answer.files.iter().all(|doc| doc.score == 0.0));
        assert_eq!(answer.sentences.len(), 2);
    }
}
