use crate::analysis::PolarityScores;
use crate::errors::{Result, SentimentError};
use crate::traits::{SentimentModel, SubjectivityModel};

/// テスト用の固定スコアを返す極性モデル
#[derive(Debug, Clone)]
pub struct MockSentimentModel {
    pub scores: PolarityScores,
}

impl MockSentimentModel {
    pub const fn new(scores: PolarityScores) -> Self {
        Self { scores }
    }
}

impl SentimentModel for MockSentimentModel {
    fn polarity_scores(&self, _text: &str) -> Result<PolarityScores> {
        Ok(self.scores)
    }
}

/// 特定の文字列を含むテキストで失敗する極性モデル
///
/// Lets batch tests fail exactly one line.
#[derive(Debug, Clone)]
pub struct FailingSentimentModel {
    pub trigger: String,
    pub fallback: PolarityScores,
}

impl FailingSentimentModel {
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            fallback: PolarityScores::neutral(),
        }
    }
}

impl SentimentModel for FailingSentimentModel {
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores> {
        if text.contains(&self.trigger) {
            return Err(SentimentError::Model {
                operation: "mock polarity scoring".to_string(),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("refusing to score text containing {:?}", self.trigger),
                )),
            });
        }
        Ok(self.fallback)
    }
}

/// テスト用の固定主観性モデル
#[derive(Debug, Clone)]
pub struct MockSubjectivityModel {
    pub score: f64,
}

impl MockSubjectivityModel {
    pub const fn new(score: f64) -> Self {
        Self { score }
    }
}

impl SubjectivityModel for MockSubjectivityModel {
    fn subjectivity(&self, _text: &str) -> Result<f64> {
        Ok(self.score)
    }
}

/// テスト用のファクトリー関数
pub const fn create_mock_models() -> (MockSentimentModel, MockSubjectivityModel) {
    (
        MockSentimentModel::new(PolarityScores {
            compound: 0.5,
            pos: 0.4,
            neg: 0.0,
            neu: 0.6,
        }),
        MockSubjectivityModel::new(0.7),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failing_model_only_fails_on_trigger() {
        let model = FailingSentimentModel::new("BOOM");

        assert!(model.polarity_scores("all fine").is_ok());
        assert!(model.polarity_scores("this goes BOOM").is_err());
    }

    #[test]
    fn test_mock_models_are_fixed() -> Result<()> {
        let (sentiment, subjectivity) = create_mock_models();
        assert_eq!(sentiment.polarity_scores("anything")?.compound, 0.5);
        assert_eq!(subjectivity.subjectivity("anything")?, 0.7);
        Ok(())
    }
}
