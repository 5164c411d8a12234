use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::{AnalysisResult, REPORT_DELIMITER};
use crate::errors::{Result, SentimentError};
use crate::traits::{SentimentModel, SubjectivityModel};
use crate::Analyzer;

/// Output file used when none is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";

const BATCH_HEADER: &str = "Batch Sentiment Analysis Results";
const HEADER_RULE: &str = "==================================================";

/// Counts reported after a batch has been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub output_path: PathBuf,
    pub analyzed: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub const fn total(&self) -> usize {
        self.analyzed + self.failed
    }
}

/// One batch command: analyze every non-blank line of `input_path` and write
/// all reports to `output_path` in a single write.
///
/// A line that cannot be decoded or scored becomes an error entry; only file
/// level failures abort the job, and they do so before anything is written.
#[derive(Debug)]
pub struct BatchJob {
    input_path: PathBuf,
    output_path: PathBuf,
    line_results: Vec<(usize, Result<AnalysisResult>)>,
    show_progress: bool,
}

impl BatchJob {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            line_results: Vec::new(),
            show_progress: false,
        }
    }

    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Per-line outcomes in input order, keyed by 1-based line number.
    pub fn line_results(&self) -> &[(usize, Result<AnalysisResult>)] {
        &self.line_results
    }

    pub fn run<S, J>(&mut self, analyzer: &Analyzer<S, J>) -> Result<BatchSummary>
    where
        S: SentimentModel,
        J: SubjectivityModel,
    {
        tracing::info!(input = %self.input_path.display(), "batch started");
        self.line_results.clear();

        let file = self.open_input()?;
        let total_bytes = file.metadata().map(|m| m.len()).unwrap_or(0);
        let progress_bar = self.progress_bar(total_bytes);

        for (index, line) in BufReader::new(file).split(b'\n').enumerate() {
            let line_number = index + 1;
            let bytes = line.map_err(|e| SentimentError::InputFileUnreadable {
                path: self.input_path.clone(),
                source: e,
            })?;
            progress_bar.inc(bytes.len() as u64 + 1);

            if let Some(outcome) = analyze_line(analyzer, line_number, bytes) {
                if let Err(e) = &outcome {
                    tracing::warn!(line = line_number, error = %e, "line skipped");
                }
                self.line_results.push((line_number, outcome));
            }
        }
        progress_bar.finish_and_clear();

        let report = self.render();
        self.write_output(&report)?;

        let failed = self.line_results.iter().filter(|(_, r)| r.is_err()).count();
        let summary = BatchSummary {
            output_path: self.output_path.clone(),
            analyzed: self.line_results.len() - failed,
            failed,
        };
        tracing::info!(
            output = %summary.output_path.display(),
            analyzed = summary.analyzed,
            failed = summary.failed,
            "batch finished"
        );
        Ok(summary)
    }

    fn open_input(&self) -> Result<File> {
        let metadata = fs::metadata(&self.input_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SentimentError::InputFileNotFound {
                    path: self.input_path.clone(),
                }
            } else {
                SentimentError::InputFileUnreadable {
                    path: self.input_path.clone(),
                    source: e,
                }
            }
        })?;

        if !metadata.is_file() {
            return Err(SentimentError::InputFileUnreadable {
                path: self.input_path.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "not a regular file",
                ),
            });
        }

        File::open(&self.input_path).map_err(|e| SentimentError::InputFileUnreadable {
            path: self.input_path.clone(),
            source: e,
        })
    }

    fn progress_bar(&self, total_bytes: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(total_bytes);
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})",
        ) {
            progress_bar.set_style(style.progress_chars("#>-"));
        }
        progress_bar
    }

    /// Full output file contents.
    pub fn render(&self) -> String {
        let mut report = format!("{}\n{}\n", BATCH_HEADER, HEADER_RULE);

        for (line_number, outcome) in &self.line_results {
            match outcome {
                Ok(result) => report.push_str(&result.batch_block(*line_number).to_string()),
                Err(SentimentError::LineProcessing { reason, .. }) => {
                    report.push_str(&format!("Line {}: ERROR - {}\n", line_number, reason))
                }
                Err(e) => report.push_str(&format!("Line {}: ERROR - {}\n", line_number, e)),
            }
            report.push_str(REPORT_DELIMITER);
            report.push('\n');
        }

        report
    }

    /// Written through a temporary file in the destination directory and then
    /// renamed, so a failed write never leaves a partial file behind.
    fn write_output(&self, contents: &str) -> Result<()> {
        let unwritable = |source: std::io::Error| SentimentError::OutputFileUnwritable {
            path: self.output_path.clone(),
            source,
        };

        let directory = match self.output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut builder = tempfile::Builder::new();
        builder.prefix(".sentiment-");
        // NamedTempFile defaults to 0600; a fresh output file gets the usual
        // 0644 (umask still applies at creation)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o644));
        }
        let mut temp = builder.tempfile_in(directory).map_err(unwritable)?;

        // overwriting keeps the existing file's mode
        if let Ok(existing) = fs::metadata(&self.output_path) {
            temp.as_file()
                .set_permissions(existing.permissions())
                .map_err(unwritable)?;
        }

        temp.write_all(contents.as_bytes()).map_err(unwritable)?;
        temp.flush().map_err(unwritable)?;
        temp.persist(&self.output_path)
            .map_err(|e| unwritable(e.error))?;

        Ok(())
    }
}

/// `None` for blank lines, which produce no entry at all.
fn analyze_line<S, J>(
    analyzer: &Analyzer<S, J>,
    line_number: usize,
    mut bytes: Vec<u8>,
) -> Option<Result<AnalysisResult>>
where
    S: SentimentModel,
    J: SubjectivityModel,
{
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }

    let line = match String::from_utf8(bytes) {
        Ok(line) => line,
        Err(e) => {
            return Some(Err(SentimentError::LineProcessing {
                line: line_number,
                reason: format!(
                    "invalid UTF-8 after byte {}",
                    e.utf8_error().valid_up_to()
                ),
            }))
        }
    };

    let text = line.trim();
    if text.is_empty() {
        return None;
    }

    Some(analyzer.analyze(text).map_err(|e| SentimentError::LineProcessing {
        line: line_number,
        reason: describe(&e),
    }))
}

fn describe(err: &SentimentError) -> String {
    match std::error::Error::source(err) {
        Some(source) => format!("{}: {}", err, source),
        None => err.to_string(),
    }
}
