use std::collections::HashMap;

use regex::Regex;

use crate::errors::{Result, SentimentError};
use crate::traits::SubjectivityModel;

const BUNDLED_LEXICON: &str = include_str!("../data/subjectivity_lexicon.tsv");

/// Pattern-style subjectivity lexicon.
///
/// Each opinion word found in the text contributes its subjectivity, scaled by
/// an intensifier directly in front of it ("very good"); the score is the mean
/// contribution, or 0 when the text holds no opinion words at all.
#[derive(Debug)]
pub struct LexiconSubjectivity {
    opinions: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    word: Regex,
}

impl LexiconSubjectivity {
    /// Load the lexicon shipped with the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_tsv(BUNDLED_LEXICON)
    }

    /// Parse `kind<TAB>word<TAB>value` rows; `#` starts a comment line.
    pub fn from_tsv(source: &str) -> Result<Self> {
        let mut opinions = HashMap::new();
        let mut intensifiers = HashMap::new();

        for (index, row) in source.lines().enumerate() {
            let row = row.trim();
            if row.is_empty() || row.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = row.split('\t').collect();
            let [kind, word, value] = fields[..] else {
                return Err(invalid_row(index + 1, "expected 3 tab-separated fields"));
            };
            let value: f64 = value
                .parse()
                .map_err(|_| invalid_row(index + 1, "value is not a number"))?;

            match kind {
                "adj" => {
                    if !(0.0..=1.0).contains(&value) {
                        return Err(invalid_row(index + 1, "subjectivity outside [0, 1]"));
                    }
                    opinions.insert(word.to_lowercase(), value);
                }
                "int" => {
                    intensifiers.insert(word.to_lowercase(), value);
                }
                _ => return Err(invalid_row(index + 1, "unknown entry kind")),
            }
        }

        let word = Regex::new(r"\w+").map_err(|e| SentimentError::Model {
            operation: "word pattern compile".to_string(),
            source: Box::new(e),
        })?;

        tracing::debug!(
            opinions = opinions.len(),
            intensifiers = intensifiers.len(),
            "subjectivity lexicon loaded"
        );

        Ok(Self {
            opinions,
            intensifiers,
            word,
        })
    }

    pub fn len(&self) -> usize {
        self.opinions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opinions.is_empty()
    }
}

fn invalid_row(line: usize, reason: &str) -> SentimentError {
    SentimentError::Model {
        operation: format!("subjectivity lexicon parse (row {})", line),
        source: Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            reason.to_string(),
        )),
    }
}

impl SubjectivityModel for LexiconSubjectivity {
    fn subjectivity(&self, text: &str) -> Result<f64> {
        let lowercase = text.to_lowercase();
        let mut previous: Option<&str> = None;
        let mut contributions = Vec::new();

        for word in self.word.find_iter(&lowercase).map(|m| m.as_str()) {
            if let Some(&subjectivity) = self.opinions.get(word) {
                let intensity = previous
                    .and_then(|p| self.intensifiers.get(p))
                    .copied()
                    .unwrap_or(1.0);
                contributions.push((subjectivity * intensity).min(1.0));
            }
            previous = Some(word);
        }

        if contributions.is_empty() {
            return Ok(0.0);
        }

        let mean = contributions.iter().sum::<f64>() / contributions.len() as f64;
        Ok(mean.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_LEXICON: &str = "# test\nadj\tgood\t0.6\nadj\tawful\t1.0\nint\tvery\t1.3\n";

    #[test]
    fn test_bundled_lexicon_loads() -> Result<()> {
        let lexicon = LexiconSubjectivity::bundled()?;
        assert!(lexicon.len() > 100);
        Ok(())
    }

    #[test]
    fn test_no_opinion_words_is_objective() -> Result<()> {
        let lexicon = LexiconSubjectivity::from_tsv(SMALL_LEXICON)?;
        assert_eq!(lexicon.subjectivity("The train leaves at noon.")?, 0.0);
        assert_eq!(lexicon.subjectivity("")?, 0.0);
        Ok(())
    }

    #[test]
    fn test_mean_of_opinion_words() -> Result<()> {
        let lexicon = LexiconSubjectivity::from_tsv(SMALL_LEXICON)?;
        let score = lexicon.subjectivity("Good food, AWFUL service")?;
        assert!((score - 0.8).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_intensifier_scales_and_caps() -> Result<()> {
        let lexicon = LexiconSubjectivity::from_tsv(SMALL_LEXICON)?;

        let scaled = lexicon.subjectivity("very good")?;
        assert!((scaled - 0.78).abs() < 1e-9);

        let capped = lexicon.subjectivity("very awful")?;
        assert_eq!(capped, 1.0);
        Ok(())
    }

    #[test]
    fn test_malformed_rows_rejected() {
        let test_cases = vec![
            "adj\tgood",
            "adj\tgood\tlots",
            "adj\tgood\t1.5",
            "noun\tgood\t0.5",
        ];

        for source in test_cases {
            let result = LexiconSubjectivity::from_tsv(source);
            assert!(
                matches!(result, Err(SentimentError::Model { .. })),
                "should reject: {:?}",
                source
            );
        }
    }

    #[test]
    fn test_opinionated_sentence_is_subjective() -> Result<()> {
        let lexicon = LexiconSubjectivity::bundled()?;
        let score = lexicon.subjectivity("I absolutely love this innovative project!")?;
        assert!(score > 0.5, "score was {}", score);
        Ok(())
    }
}
