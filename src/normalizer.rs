use std::collections::HashSet;

use regex::Regex;

use crate::errors::{Result, SentimentError};
use crate::lemmatizer::Lemmatizer;
use crate::stopwords;

/// Anything that is neither a word character nor whitespace.
const PUNCTUATION_PATTERN: &str = r"[^\w\s]";

/// Cleans text for display: lowercase, punctuation stripped, stopwords
/// removed, tokens lemmatized and joined by single spaces.
pub struct Normalizer {
    punctuation: Regex,
    stopwords: HashSet<&'static str>,
    lemmatizer: Lemmatizer,
}

impl Normalizer {
    pub fn new() -> Result<Self> {
        let punctuation = Regex::new(PUNCTUATION_PATTERN).map_err(|e| SentimentError::Model {
            operation: "punctuation pattern compile".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            punctuation,
            stopwords: stopwords::english(),
            lemmatizer: Lemmatizer::new(),
        })
    }

    pub fn normalize(&self, text: &str) -> String {
        let lowercase = text.to_lowercase();
        let stripped = self.punctuation.replace_all(&lowercase, "");

        stripped
            .split_whitespace()
            .filter(|word| !self.is_stopword(word))
            .map(|word| self.lemmatizer.lemmatize(word))
            // lemmas can land on a stopword ("wills" -> "will")
            .filter(|lemma| !self.is_stopword(lemma))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_sentence() -> Result<()> {
        let normalizer = Normalizer::new()?;
        let cleaned = normalizer.normalize("I absolutely love this innovative project!");

        assert_eq!(cleaned, "absolutely love innovative project");
        Ok(())
    }

    #[test]
    fn test_lemmatizes_plurals() -> Result<()> {
        let normalizer = Normalizer::new()?;
        let cleaned = normalizer.normalize("The children loved these new features.");

        assert_eq!(cleaned, "child loved new feature");
        Ok(())
    }

    #[test]
    fn test_empty_input() -> Result<()> {
        let normalizer = Normalizer::new()?;
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("   \t "), "");
        assert_eq!(normalizer.normalize("?!..."), "");
        Ok(())
    }

    #[test]
    fn test_collapses_whitespace() -> Result<()> {
        let normalizer = Normalizer::new()?;
        assert_eq!(normalizer.normalize("  great \t\t  product  "), "great product");
        Ok(())
    }

    #[test]
    fn test_lemma_stopword_removed() -> Result<()> {
        let normalizer = Normalizer::new()?;
        assert_eq!(normalizer.normalize("wills"), "");
        Ok(())
    }

    #[test]
    fn test_idempotent() -> Result<()> {
        let normalizer = Normalizer::new()?;
        let inputs = vec![
            "I absolutely love this innovative project!",
            "The classes were AWFUL, and the buses late...",
            "Cities, churches & boxes: data everywhere",
            "don't stop believing",
            "Ünïcödé wörds über alles",
            "",
        ];

        for input in inputs {
            let once = normalizer.normalize(input);
            let twice = normalizer.normalize(&once);
            assert_eq!(once, twice, "input: {}", input);
        }
        Ok(())
    }
}
