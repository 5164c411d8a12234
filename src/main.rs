use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use sentiment_rs::{Analyzer, BatchJob, Config, Shell};

fn main() -> Result<()> {
    let config = Config::new();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let analyzer =
        Analyzer::with_lexicon_models().context("Failed to load sentiment lexicons")?;

    if let Some(input) = &config.batch {
        let summary = BatchJob::new(input, &config.output)
            .with_progress(config.show_progress())
            .run(&analyzer)
            .with_context(|| format!("Batch processing failed for {}", input.display()))?;

        println!(
            "Batch processing complete! {} analyzed, {} failed. Results saved to '{}'.",
            summary.analyzed,
            summary.failed,
            summary.output_path.display()
        );
        return Ok(());
    }

    Shell::new(&analyzer, &config.output)
        .with_progress(config.show_progress())
        .run(io::stdin().lock(), io::stdout().lock(), io::stderr().lock())
        .context("Interactive shell I/O failed")?;

    Ok(())
}
