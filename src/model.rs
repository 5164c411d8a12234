use std::collections::HashMap;

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::{
    analysis::PolarityScores,
    errors::{Result, SentimentError},
    traits::SentimentModel,
};

/// VADER polarity model.
///
/// The lexicon is built once when the analyzer is constructed and only read
/// afterwards.
pub struct VaderModel {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderModel {
    pub fn new() -> Self {
        let analyzer = SentimentIntensityAnalyzer::new();

        // warm up the lexicon tables before the first real request
        let _ = analyzer.polarity_scores("warm up");
        tracing::debug!("VADER lexicon loaded");

        Self { analyzer }
    }
}

impl Default for VaderModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentModel for VaderModel {
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores> {
        if text.trim().is_empty() {
            return Ok(PolarityScores::neutral());
        }
        let raw = self.analyzer.polarity_scores(text);
        scores_from_map(&raw)
    }
}

fn score(raw: &HashMap<&str, f64>, key: &str) -> Result<f64> {
    raw.get(key).copied().ok_or_else(|| SentimentError::Model {
        operation: format!("polarity score lookup: {}", key),
        source: Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "VADER returned no value for this key",
        )),
    })
}

/// Text with no sentiment-bearing words is fully neutral. VADER reports
/// all-zero components for it, and `vader_sentiment` still subtracts the
/// punctuation emphasis from a zero valence sum, so "It is Monday!" would come
/// back with a negative compound.
fn scores_from_map(raw: &HashMap<&str, f64>) -> Result<PolarityScores> {
    let scores = PolarityScores {
        compound: score(raw, "compound")?,
        pos: score(raw, "pos")?,
        neg: score(raw, "neg")?,
        neu: score(raw, "neu")?,
    };

    if scores.pos == 0.0 && scores.neg == 0.0 {
        return Ok(PolarityScores::neutral());
    }
    Ok(scores)
}
