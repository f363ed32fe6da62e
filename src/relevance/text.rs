//! Tokenization and sentence splitting.
//!
//! The ranker only depends on the [`Tokenizer`] and [`SentenceSplitter`]
//! traits. The default implementations lowercase, split on non-alphanumeric
//! characters and drop English stopwords, and break sentences on terminal
//! punctuation.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Turns raw text into normalized word tokens.
///
/// Implementations must be deterministic: the same input always yields the
/// same tokens.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Splits a passage into sentences, in order.
pub trait SentenceSplitter {
    fn split(&self, passage: &str) -> Vec<String>;
}

/// English stopwords (the NLTK list, minus contraction forms that cannot
/// survive splitting on apostrophes)
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
        "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
        "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
        "for", "with", "about", "against", "between", "into", "through", "during", "before",
        "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
        "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
        "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
        "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
        "just", "don", "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren",
        "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn",
        "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
    ]
    .into_iter()
    .collect()
});

/// Check whether a lowercased word is an English stopword
pub fn is_stopword(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Default tokenizer: lowercase, split on non-alphanumeric, drop stopwords
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty() && !is_stopword(word))
            .map(str::to_string)
            .collect()
    }
}

/// Default splitter: a sentence ends at `.`, `!` or `?` (plus any closing
/// quotes or brackets) followed by whitespace or the end of the passage
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSplitter;

const TERMINATORS: [char; 3] = ['.', '!', '?'];
const CLOSERS: [char; 6] = ['"', '\'', ')', ']', '\u{201d}', '\u{2019}'];

impl SentenceSplitter for PunctuationSplitter {
    fn split(&self, passage: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut chars = passage.char_indices().peekable();
        let mut start = 0;

        while let Some((i, c)) = chars.next() {
            if !TERMINATORS.contains(&c) {
                continue;
            }
            let mut end = i + c.len_utf8();
            while let Some(&(j, next)) = chars.peek() {
                if TERMINATORS.contains(&next) || CLOSERS.contains(&next) {
                    end = j + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            let at_boundary = chars.peek().is_none_or(|&(_, next)| next.is_whitespace());
            if at_boundary {
                push_trimmed(&mut sentences, &passage[start..end]);
                start = end;
            }
        }
        push_trimmed(&mut sentences, &passage[start..]);

        sentences
    }
}

fn push_trimmed(sentences: &mut Vec<String>, sentence: &str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        let tokens = WordTokenizer.tokenize("The quick brown fox jumps over the lazy dog!");
        assert_eq!(tokens, vec!["quick", "brown", "fox", "jumps", "lazy", "dog"]);
    }

    #[test]
    fn test_tokenize_lowercases_before_stopword_check() {
        let tokens = WordTokenizer.tokenize("What IS Python? It's a LANGUAGE.");
        assert_eq!(tokens, vec!["python", "language"]);
    }

    #[test]
    fn test_tokenize_keeps_numbers_and_drops_punctuation() {
        let tokens = WordTokenizer.tokenize("Released in 1991 -- version 3.12, (stable).");
        assert_eq!(tokens, vec!["released", "1991", "version", "3", "12", "stable"]);
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let text = "Neural networks learn representations; networks generalize.";
        assert_eq!(WordTokenizer.tokenize(text), WordTokenizer.tokenize(text));
    }

    #[test]
    fn test_split_sentences() {
        let sentences =
            PunctuationSplitter.split("First sentence. Second one!  Is this third? Trailing");
        assert_eq!(
            sentences,
            vec!["First sentence.", "Second one!", "Is this third?", "Trailing"]
        );
    }

    #[test]
    fn test_split_keeps_inner_periods() {
        let sentences = PunctuationSplitter.split("Version 3.12 shipped. It said \"done.\" Then more.");
        assert_eq!(
            sentences,
            vec!["Version 3.12 shipped.", "It said \"done.\"", "Then more."]
        );
    }

    #[test]
    fn test_split_blank_passage() {
        assert!(PunctuationSplitter.split("   ").is_empty());
        assert_eq!(PunctuationSplitter.split("Wait...  what?!"), vec!["Wait...", "what?!"]);
    }
}
