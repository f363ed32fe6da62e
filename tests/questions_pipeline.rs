//! Corpus loading and end-to-end question answering

mod common;

use common::corpus_dir;
use reckon::{
    Error,
    config::QuestionsConfig,
    relevance::{QuestionAnswerer, load_files},
};

fn sample_corpus() -> tempfile::TempDir {
    corpus_dir(&[
        (
            "machine_learning.txt",
            "Machine learning is a field of artificial intelligence.\n\
             Supervised learning uses labeled data. Unsupervised learning finds structure in unlabeled data.",
        ),
        (
            "neural_network.txt",
            "A neural network is built from layers of neurons.\n\
             Backpropagation computes gradients for every weight in the network.",
        ),
        (
            "python.txt",
            "Python is a programming language created by Guido van Rossum.\n\
             Python emphasizes code readability.",
        ),
        ("notes.md", "Python python python python python."),
    ])
}

#[test]
fn load_files_reads_only_txt_documents() {
    let dir = sample_corpus();
    let files = load_files(dir.path()).unwrap();

    let names: Vec<&str> = files.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec!["machine_learning.txt", "neural_network.txt", "python.txt"]
    );
    assert!(files["python.txt"].starts_with("Python is a programming language"));
}

#[test]
fn missing_directory_is_a_load_error() {
    let dir = sample_corpus();
    let missing = dir.path().join("nope");
    assert!(matches!(
        load_files(&missing),
        Err(Error::CorpusLoad { path, .. }) if path == missing
    ));
}

#[test]
fn directory_without_documents_is_rejected() {
    let dir = corpus_dir(&[("readme.md", "not a document")]);
    assert!(matches!(
        load_files(dir.path()),
        Err(Error::EmptyCorpus { .. })
    ));
}

#[test]
fn answers_question_from_best_document() {
    let dir = sample_corpus();
    let qa = QuestionAnswerer::from_files(load_files(dir.path()).unwrap());

    let answer = qa.answer(
        "What does backpropagation compute?",
        &QuestionsConfig::default(),
    );
    assert_eq!(answer.files[0].name, "neural_network.txt");
    assert_eq!(
        answer.sentences[0].text,
        "Backpropagation computes gradients for every weight in the network."
    );
}

#[test]
fn honours_match_counts() {
    let dir = sample_corpus();
    let qa = QuestionAnswerer::from_files(load_files(dir.path()).unwrap());
    let config = QuestionsConfig::default()
        .with_file_matches(2)
        .with_sentence_matches(3);

    let answer = qa.answer("How does learning use data?", &config);
    assert_eq!(answer.files.len(), 2);
    assert_eq!(answer.files[0].name, "machine_learning.txt");
    assert_eq!(answer.sentences.len(), 3);
    assert!(
        answer
            .sentences
            .windows(2)
            .all(|w| w[0].idf_sum >= w[1].idf_sum)
    );
}

#[test]
fn answer_serializes_to_json() {
    let dir = sample_corpus();
    let qa = QuestionAnswerer::from_files(load_files(dir.path()).unwrap());
    let answer = qa.answer("Who created Python?", &QuestionsConfig::default());

    let json = serde_json::to_value(&answer).unwrap();
    assert_eq!(json["files"][0]["name"], "python.txt");
    assert_eq!(json["query"], serde_json::json!(["created", "python"]));
}
