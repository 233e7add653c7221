//! fehu-eval - human-values evaluation CLI
//!
//! Scores task 1 (article level) and task 2 (subevent level) predictions
//! against gold annotations and prints a JSON report.
//!
//! # Usage
//!
//! ```bash
//! # Article-level tasks
//! fehu-eval --gold-task1 gold/article.json \
//!     --pred-task1a pred/task1a.json --pred-task1b pred/task1b.json
//!
//! # All paths from a config file, report also written to disk
//! fehu-eval --config run.json --out results/evaluation_results.json
//!
//! # Markdown table with per-label scores and debug logging
//! fehu-eval --config run.json --format human --per-label -v
//! ```

use std::process::ExitCode;

use clap::Parser;
use fehu_eval::cli::{execute, output, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so the report on stdout stays machine-readable.
    let mut logger = env_logger::Builder::new();
    logger
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .target(env_logger::Target::Stderr);
    if !cli.quiet {
        logger.parse_default_env();
    }
    logger.init();

    log::debug!("fehu-eval v{} starting", env!("CARGO_PKG_VERSION"));

    match execute(&cli).and_then(|text| output::print_stdout(&text)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                output::format_error(output::error_operation(&e), &e.to_string())
            );
            ExitCode::FAILURE
        }
    }
}
