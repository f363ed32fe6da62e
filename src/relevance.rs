//! TF-IDF question answering

pub mod answer;
pub mod corpus;
pub mod idf;
pub mod ranking;
pub mod text;

pub use answer::{Answer, QuestionAnswerer};
pub use corpus::{Corpus, Document, load_files};
pub use idf::{IdfTable, Query};
pub use ranking::{
    ScoredDocument, ScoredSentence, rank_files, rank_sentences, top_files, top_sentences,
};
pub use text::{PunctuationSplitter, SentenceSplitter, Tokenizer, WordTokenizer};
