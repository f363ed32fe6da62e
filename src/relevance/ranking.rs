//! TF-IDF file ranking and IDF/density sentence ranking

use std::cmp::Ordering;

use serde::Serialize;

use super::{
    corpus::{Corpus, Document},
    idf::{IdfTable, Query},
};

/// A file with its cumulative TF-IDF score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDocument {
    pub name: String,
    pub score: f64,
}

/// A sentence with its ranking keys
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    pub text: String,
    /// Sum of IDF over distinct query words present
    pub idf_sum: f64,
    /// Distinct query words present divided by sentence length
    pub density: f64,
}

/// TF-IDF score of one document: `sum(tf(word) * idf(word))` over query words
pub fn tf_idf(query: &Query, doc: &Document, idfs: &IdfTable) -> f64 {
    query
        .iter()
        .map(|word| match doc.term_frequency(word) {
            0 => 0.0,
            tf => tf as f64 * idfs.weight(word),
        })
        .sum()
}

/// Score every document and sort by descending score.
///
/// Documents without any query word score 0 and stay in the ranking. The
/// sort is stable, so equal scores keep corpus order.
pub fn rank_files(query: &Query, files: &Corpus, idfs: &IdfTable) -> Vec<ScoredDocument> {
    let mut ranked: Vec<ScoredDocument> = files
        .iter()
        .map(|doc| ScoredDocument {
            name: doc.name.clone(),
            score: tf_idf(query, doc, idfs),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Names of the `n` best files, best first
pub fn top_files(query: &Query, files: &Corpus, idfs: &IdfTable, n: usize) -> Vec<String> {
    rank_files(query, files, idfs)
        .into_iter()
        .take(n)
        .map(|doc| doc.name)
        .collect()
}

/// Score one sentence
pub fn score_sentence(query: &Query, sentence: &Document, idfs: &IdfTable) -> ScoredSentence {
    let mut idf_sum = 0.0;
    let mut matched = 0usize;
    for word in query.iter().filter(|word| sentence.contains(word)) {
        idf_sum += idfs.weight(word);
        matched += 1;
    }

    let density = if sentence.tokens.is_empty() {
        0.0
    } else {
        matched as f64 / sentence.tokens.len() as f64
    };

    ScoredSentence {
        text: sentence.name.clone(),
        idf_sum,
        density,
    }
}

fn sentence_order(a: &ScoredSentence, b: &ScoredSentence) -> Ordering {
    b.idf_sum
        .total_cmp(&a.idf_sum)
        .then_with(|| b.density.total_cmp(&a.density))
}

/// Score every sentence and sort by summed IDF, then query-term density,
/// both descending. Remaining ties keep input order.
pub fn rank_sentences(query: &Query, sentences: &Corpus, idfs: &IdfTable) -> Vec<ScoredSentence> {
    let mut ranked: Vec<ScoredSentence> = sentences
        .iter()
        .map(|sentence| score_sentence(query, sentence, idfs))
        .collect();
    ranked.sort_by(sentence_order);
    ranked
}

/// The `n` best sentences, best first
pub fn top_sentences(query: &Query, sentences: &Corpus, idfs: &IdfTable, n: usize) -> Vec<String> {
    rank_sentences(query, sentences, idfs)
        .into_iter()
        .take(n)
        .map(|sentence| sentence.text)
        .collect()
}
