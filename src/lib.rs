pub mod analysis;
pub mod batch;
pub mod config;
pub mod errors;
pub mod lemmatizer;
pub mod model;
pub mod normalizer;
pub mod shell;
pub mod stopwords;
pub mod subjectivity;
pub mod traits;

pub mod mocks;

pub use analysis::{AnalysisResult, PolarityScores, SentimentLabel, SubjectivityLabel};
pub use batch::{BatchJob, BatchSummary};
pub use config::Config;
pub use errors::{Result, SentimentError};
pub use model::VaderModel;
pub use normalizer::Normalizer;
pub use shell::{Command, Shell, ShellState};
pub use subjectivity::LexiconSubjectivity;
pub use traits::*;

/// Runs one text through the normalizer and both lexicon models.
///
/// Built once at startup and borrowed by the shell and batch jobs; the models
/// are read-only after construction and need no teardown.
pub struct Analyzer<S: SentimentModel, J: SubjectivityModel> {
    normalizer: Normalizer,
    sentiment: S,
    subjectivity: J,
}

impl<S: SentimentModel, J: SubjectivityModel> Analyzer<S, J> {
    pub fn new(sentiment: S, subjectivity: J) -> Result<Self> {
        Ok(Self {
            normalizer: Normalizer::new()?,
            sentiment,
            subjectivity,
        })
    }

    /// Cleaned text is for display only; both models score the raw text.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        let cleaned = self.normalizer.normalize(text);
        let scores = self.sentiment.polarity_scores(text)?;
        let subjectivity = self.subjectivity.subjectivity(text)?;

        if !(0.0..=1.0).contains(&subjectivity) {
            return Err(SentimentError::Model {
                operation: "subjectivity scoring".to_string(),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("score {} outside [0, 1]", subjectivity),
                )),
            });
        }

        Ok(AnalysisResult::new(text, cleaned, scores, subjectivity))
    }

    pub const fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }
}

impl Analyzer<VaderModel, LexiconSubjectivity> {
    /// Load the VADER lexicon and the bundled subjectivity lexicon.
    pub fn with_lexicon_models() -> Result<Self> {
        let subjectivity = LexiconSubjectivity::bundled()?;
        let analyzer = Self::new(VaderModel::new(), subjectivity)?;
        tracing::info!("lexicon models ready");
        Ok(analyzer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::*;

    #[test]
    fn test_analyze_with_mocks() -> Result<()> {
        let (sentiment, subjectivity) = create_mock_models();
        let analyzer = Analyzer::new(sentiment, subjectivity)?;

        let result = analyzer.analyze("The Projects are GREAT!")?;
        assert_eq!(result.original_text(), "The Projects are GREAT!");
        assert_eq!(result.cleaned_text(), "project great");
        assert_eq!(result.sentiment_label(), SentimentLabel::Positive);
        assert_eq!(result.subjectivity_label(), SubjectivityLabel::Subjective);
        Ok(())
    }

    #[test]
    fn test_out_of_range_subjectivity_rejected() -> Result<()> {
        let (sentiment, _) = create_mock_models();
        let analyzer = Analyzer::new(sentiment, MockSubjectivityModel::new(1.5))?;

        let result = analyzer.analyze("anything");
        assert!(matches!(result, Err(SentimentError::Model { .. })));
        Ok(())
    }

    #[test]
    fn test_model_error_propagates() -> Result<()> {
        let analyzer = Analyzer::new(
            FailingSentimentModel::new("bad"),
            MockSubjectivityModel::new(0.0),
        )?;

        assert!(analyzer.analyze("a bad line").is_err());
        assert!(analyzer.analyze("a fine line").is_ok());
        Ok(())
    }
}
