use std::fmt;

/// Compound score above which a text is labelled positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score below which a text is labelled negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;
/// Subjectivity score above which a text is labelled subjective.
pub const SUBJECTIVITY_THRESHOLD: f64 = 0.5;

/// Line used to separate reports on screen and in batch output.
pub const REPORT_DELIMITER: &str = "--------------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_compound(compound: f64) -> Self {
        if compound > POSITIVE_THRESHOLD {
            Self::Positive
        } else if compound < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectivityLabel {
    Subjective,
    Objective,
}

impl SubjectivityLabel {
    pub fn from_score(score: f64) -> Self {
        if score > SUBJECTIVITY_THRESHOLD {
            Self::Subjective
        } else {
            Self::Objective
        }
    }
}

impl fmt::Display for SubjectivityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Subjective => "Subjective",
            Self::Objective => "Objective",
        };
        f.write_str(label)
    }
}

/// Raw output of a polarity model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityScores {
    pub compound: f64,
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
}

impl PolarityScores {
    /// Scores for a text with nothing to score.
    pub const fn neutral() -> Self {
        Self {
            compound: 0.0,
            pos: 0.0,
            neg: 0.0,
            neu: 1.0,
        }
    }
}

/// Result of analyzing one piece of text.
///
/// Fields are private so a result cannot change after the analyzer built it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    original_text: String,
    cleaned_text: String,
    sentiment_label: SentimentLabel,
    scores: PolarityScores,
    subjectivity_label: SubjectivityLabel,
    subjectivity_score: f64,
}

impl AnalysisResult {
    pub fn new(
        original_text: impl Into<String>,
        cleaned_text: impl Into<String>,
        scores: PolarityScores,
        subjectivity_score: f64,
    ) -> Self {
        Self {
            original_text: original_text.into(),
            cleaned_text: cleaned_text.into(),
            sentiment_label: SentimentLabel::from_compound(scores.compound),
            scores,
            subjectivity_label: SubjectivityLabel::from_score(subjectivity_score),
            subjectivity_score,
        }
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn cleaned_text(&self) -> &str {
        &self.cleaned_text
    }

    pub const fn sentiment_label(&self) -> SentimentLabel {
        self.sentiment_label
    }

    pub const fn compound_score(&self) -> f64 {
        self.scores.compound
    }

    pub const fn pos_score(&self) -> f64 {
        self.scores.pos
    }

    pub const fn neg_score(&self) -> f64 {
        self.scores.neg
    }

    pub const fn neu_score(&self) -> f64 {
        self.scores.neu
    }

    pub const fn subjectivity_label(&self) -> SubjectivityLabel {
        self.subjectivity_label
    }

    pub const fn subjectivity_score(&self) -> f64 {
        self.subjectivity_score
    }

    /// Score lines shared by the interactive report and the batch block.
    fn write_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cleaned: '{}'", self.cleaned_text)?;
        writeln!(f, "Sentiment: {}", self.sentiment_label)?;
        writeln!(f, "Compound Score: {:.2}", self.scores.compound)?;
        writeln!(
            f,
            "Detailed Scores - Pos: {:.2}, Neg: {:.2}, Neu: {:.2}",
            self.scores.pos, self.scores.neg, self.scores.neu
        )?;
        writeln!(
            f,
            "Subjectivity: {} (Score: {:.2})",
            self.subjectivity_label, self.subjectivity_score
        )
    }

    /// Report block for one batch line, labelled with its line number.
    pub fn batch_block(&self, line_number: usize) -> BatchBlock<'_> {
        BatchBlock {
            result: self,
            line_number,
        }
    }
}

/// Interactive report.
impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original: '{}'", self.original_text)?;
        self.write_details(f)
    }
}

pub struct BatchBlock<'a> {
    result: &'a AnalysisResult,
    line_number: usize,
}

impl fmt::Display for BatchBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Line {}: '{}'",
            self.line_number, self.result.original_text
        )?;
        self.result.write_details(f)
    }
}
