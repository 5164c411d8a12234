use crate::analysis::PolarityScores;
use crate::errors::Result;

/// 極性スコアを返す語彙ベースのモデル
///
/// The analyzer depends on this abstraction rather than on the VADER wrapper,
/// so tests can inject deterministic or failing models.
pub trait SentimentModel {
    /// Score raw, uncleaned text. Punctuation and capitalization matter.
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores>;
}

/// 主観性スコア（0〜1）を返すモデル
pub trait SubjectivityModel {
    /// Score raw text in `[0, 1]`; 0 is factual, 1 is opinion.
    fn subjectivity(&self, text: &str) -> Result<f64>;
}
