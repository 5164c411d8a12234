use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::analysis::REPORT_DELIMITER;
use crate::batch::BatchJob;
use crate::traits::{SentimentModel, SubjectivityModel};
use crate::Analyzer;

const PROMPT: &str = "Enter text or command: ";
const FAREWELL: &str = "Goodbye!";

/// One parsed line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Batch(PathBuf),
    /// `batch` without a path.
    BatchUsage,
    Analyze(String),
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        if line.is_empty() {
            return Self::Empty;
        }
        if line.eq_ignore_ascii_case("quit") {
            return Self::Quit;
        }
        if line.eq_ignore_ascii_case("batch") {
            return Self::BatchUsage;
        }

        // "batch " is ASCII, so byte 6 is always a char boundary when it matches
        if line.len() > 6 && line.as_bytes()[..6].eq_ignore_ascii_case(b"batch ") {
            let path = line[6..].trim();
            if path.is_empty() {
                return Self::BatchUsage;
            }
            return Self::Batch(PathBuf::from(path));
        }

        Self::Analyze(line.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Terminated,
}

/// Interactive read-dispatch loop over any line source.
///
/// Report text goes to `out`; command failures go to `err` and the loop keeps
/// running. Only `quit` or end of input stops it.
pub struct Shell<'a, S: SentimentModel, J: SubjectivityModel> {
    analyzer: &'a Analyzer<S, J>,
    output_path: PathBuf,
    show_progress: bool,
    state: ShellState,
}

impl<'a, S: SentimentModel, J: SubjectivityModel> Shell<'a, S, J> {
    pub fn new(analyzer: &'a Analyzer<S, J>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            analyzer,
            output_path: output_path.into(),
            show_progress: false,
            state: ShellState::Running,
        }
    }

    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub const fn state(&self) -> ShellState {
        self.state
    }

    pub fn run<R, W, E>(&mut self, mut input: R, mut out: W, mut err: E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        print_banner(&mut out)?;

        let mut line = String::new();
        while self.state == ShellState::Running {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            line.clear();
            match input.read_line(&mut line) {
                Ok(0) => {
                    writeln!(out)?;
                    self.dispatch(Command::Quit, &mut out, &mut err)?;
                }
                Ok(_) => {
                    let command = Command::parse(&line);
                    tracing::debug!(?command, "command parsed");
                    self.dispatch(command, &mut out, &mut err)?;
                }
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    writeln!(err, "Error: input is not valid UTF-8")?;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    pub fn dispatch<W: Write, E: Write>(
        &mut self,
        command: Command,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        match command {
            Command::Quit => {
                writeln!(out, "{}", FAREWELL)?;
                self.state = ShellState::Terminated;
            }
            Command::Empty => {
                writeln!(out, "Please enter some text or a command.\n")?;
            }
            Command::BatchUsage => {
                writeln!(err, "Usage: batch <file_path>")?;
            }
            Command::Batch(path) => {
                let mut job =
                    BatchJob::new(path, &self.output_path).with_progress(self.show_progress);
                match job.run(self.analyzer) {
                    Ok(summary) => writeln!(
                        out,
                        "Batch processing complete! {} analyzed, {} failed. Results saved to '{}'.",
                        summary.analyzed,
                        summary.failed,
                        summary.output_path.display()
                    )?,
                    // file errors abort before the output is touched
                    Err(e) if e.is_file_error() => {
                        tracing::warn!(error = %e, "batch aborted");
                        writeln!(err, "Error: {}. No output was written.", e)?;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "batch failed");
                        writeln!(err, "Error: {}", e)?;
                    }
                }
                writeln!(out, "{}\n", REPORT_DELIMITER)?;
            }
            Command::Analyze(text) => match self.analyzer.analyze(&text) {
                Ok(result) => {
                    write!(out, "{}", result)?;
                    writeln!(out, "{}\n", REPORT_DELIMITER)?;
                }
                Err(e) => {
                    tracing::error!(error = %e, "analysis failed");
                    writeln!(err, "Error: {}", e)?;
                }
            },
        }

        Ok(())
    }
}

fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome to the Sentiment Analysis Tool!")?;
    writeln!(
        out,
        "Features: preprocessing (stopwords, lemmatization), VADER sentiment, subjectivity detection, and batch file processing."
    )?;
    writeln!(
        out,
        "Type 'batch <file_path>' to analyze a file (e.g., 'batch input.txt'). Type 'quit' to exit.\n"
    )
}
