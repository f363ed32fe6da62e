//! Questions command - answer one query from a directory of documents

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    config::QuestionsConfig,
    relevance::{Answer, QuestionAnswerer, load_files},
};

#[derive(Parser, Debug)]
#[command(about = "Answer a question from a corpus of .txt documents")]
pub struct QuestionsArgs {
    /// Directory containing the .txt documents
    pub corpus: PathBuf,

    /// Question to answer (prompted on stdin when omitted)
    #[arg(long)]
    pub query: Option<String>,

    /// Number of top files to pull sentences from
    #[arg(long)]
    pub files: Option<usize>,

    /// Number of sentences to print
    #[arg(long)]
    pub sentences: Option<usize>,

    /// JSON file with default match counts
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the ranked files and sentences as JSON
    #[arg(long)]
    pub json: bool,
}

impl QuestionsArgs {
    /// Match counts from the config file, overridden by explicit flags
    fn resolve_config(&self) -> Result<QuestionsConfig> {
        let mut config = match &self.config {
            Some(path) => QuestionsConfig::from_json_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => QuestionsConfig::default(),
        };
        if let Some(n) = self.files {
            config = config.with_file_matches(n);
        }
        if let Some(n) = self.sentences {
            config = config.with_sentence_matches(n);
        }
        Ok(config)
    }
}

pub fn execute(args: QuestionsArgs) -> Result<()> {
    let config = args.resolve_config()?;

    let files = load_files(&args.corpus)
        .with_context(|| format!("loading corpus from {}", args.corpus.display()))?;
    let answerer = QuestionAnswerer::from_files(files);

    let query = match args.query {
        Some(query) => query,
        None => prompt_query()?,
    };

    let answer = answerer.answer(&query, &config);
    print_answer(&answer, args.json)
}

fn prompt_query() -> Result<String> {
    print!("Query: ");
    io::stdout().flush().context("flushing prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading query from stdin")?;
    Ok(line.trim_end().to_string())
}

fn print_answer(answer: &Answer, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(answer)?);
        return Ok(());
    }

    for sentence in &answer.sentences {
        println!("{}", sentence.text);
    }
    Ok(())
}
