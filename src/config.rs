//! Configuration types.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

/// How many matches the question answerer reports.
///
/// # Examples
///
/// ```
/// use reckon::config::QuestionsConfig;
///
/// let config = QuestionsConfig::default()
///     .with_file_matches(2)
///     .with_sentence_matches(3);
/// assert_eq!(config.file_matches, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionsConfig {
    /// Number of top files whose sentences are considered
    pub file_matches: usize,

    /// Number of sentences to return
    pub sentence_matches: usize,
}

impl Default for QuestionsConfig {
    fn default() -> Self {
        Self {
            file_matches: 1,
            sentence_matches: 1,
        }
    }
}

impl QuestionsConfig {
    /// Load a configuration from a JSON file. Missing fields use defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config '{}'", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn with_file_matches(mut self, n: usize) -> Self {
        self.file_matches = n;
        self
    }

    pub fn with_sentence_matches(mut self, n: usize) -> Self {
        self.sentence_matches = n;
        self
    }
}

/// Options shared by every command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Verbose output
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let config: QuestionsConfig = serde_json::from_str(r#"{"sentence_matches": 4}"#).unwrap();
        assert_eq!(config.file_matches, 1);
        assert_eq!(config.sentence_matches, 4);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = QuestionsConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, crate::Error::Io { .. }));
    }
}
