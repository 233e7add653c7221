//! CLI library modules for the fehu-eval binary.
//!
//! Kept in the library so the command flow can be tested without spawning
//! a process.

pub mod output;
pub mod parser;

pub use parser::{Cli, OutputFormat};

use crate::eval::run;
use crate::Result;

/// Run a parsed command line and return the text destined for stdout.
///
/// Resolves the configuration (`--config` file overlaid by flags), scores
/// every configured task, and writes the JSON report to `--out` when given.
pub fn execute(cli: &Cli) -> Result<String> {
    let config = cli.resolve_config()?;
    let report = run(&config)?;
    let json = report.to_json_pretty()?;

    if let Some(path) = &config.out {
        output::write_report(&json, path)?;
        output::log_info(&format!("wrote report to {}", path.display()), cli.quiet);
    }

    Ok(match cli.format {
        OutputFormat::Json => json,
        OutputFormat::Human => report.to_markdown(),
    })
}
