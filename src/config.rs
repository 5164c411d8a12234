use clap::Parser;
use std::path::PathBuf;

use crate::batch::DEFAULT_OUTPUT_PATH;
use crate::errors::SentimentError;

#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// File that batch results are written to (overwritten each run)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH, value_parser = check_output)]
    pub output: PathBuf,

    /// Analyze this file once and exit instead of starting the interactive shell
    #[arg(short, long)]
    pub batch: Option<PathBuf>,

    /// Hide the batch progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    /// Log debug events to stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            batch: None,
            no_progress: false,
            verbose: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }

    pub const fn show_progress(&self) -> bool {
        !self.no_progress
    }

    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose {
            "sentiment_rs=debug"
        } else {
            "warn"
        }
    }
}

fn check_output(s: &str) -> Result<PathBuf, SentimentError> {
    if s.trim().is_empty() {
        return Err(SentimentError::Configuration {
            message: "output path must not be empty".to_string(),
        });
    }

    let path = PathBuf::from(s);
    if path.is_dir() {
        return Err(SentimentError::Configuration {
            message: format!("{} is a directory, expected a file path", s),
        });
    }

    Ok(path)
}
