//! CLI argument parsing and structure definitions

use crate::config::EvalConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Human-values evaluation - micro/macro F1 and direction-reversal rate
#[derive(Parser, Debug)]
#[command(name = "fehu-eval")]
#[command(
    author,
    version,
    about = "Human-values evaluation - micro/macro F1 and direction-reversal rate",
    long_about = r#"
fehu-eval - score human-values predictions against gold annotations

TASKS:
  task1a  article level, level-2 values        (--gold-task1 + --pred-task1a)
  task1b  article level, direction x level-1   (--gold-task1 + --pred-task1b)
  task2a  subevent level, level-2 values       (--gold-task2 + --pred-task2a)
  task2b  subevent level, direction x level-1  (--gold-task2 + --pred-task2b)

A task runs only when both its gold and prediction files are given.
Direction-reversal rate is reported for task1b and task2b.

EXAMPLES:
  fehu-eval --gold-task1 gold/article.json --pred-task1a pred/task1a.json
  fehu-eval --config run.json --out results.json
  fehu-eval --gold-task2 gold/subevent.json --pred-task2b pred/task2b.json --format human
"#
)]
pub struct Cli {
    /// Gold file for article-level tasks
    #[arg(long, alias = "gold_task1", value_name = "PATH")]
    pub gold_task1: Option<PathBuf>,

    /// Predictions for task 1a (level-2 values per actor)
    #[arg(long, alias = "pred_task1a", value_name = "PATH")]
    pub pred_task1a: Option<PathBuf>,

    /// Predictions for task 1b (directed level-1 values per actor)
    #[arg(long, alias = "pred_task1b", value_name = "PATH")]
    pub pred_task1b: Option<PathBuf>,

    /// Gold file for subevent-level tasks
    #[arg(long, alias = "gold_task2", value_name = "PATH")]
    pub gold_task2: Option<PathBuf>,

    /// Predictions for task 2a (level-2 values per subevent actor)
    #[arg(long, alias = "pred_task2a", value_name = "PATH")]
    pub pred_task2a: Option<PathBuf>,

    /// Predictions for task 2b (directed level-1 values per subevent actor)
    #[arg(long, alias = "pred_task2b", value_name = "PATH")]
    pub pred_task2b: Option<PathBuf>,

    /// Also write the JSON report to this file
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// JSON file with any of the path options above; flags take precedence
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Include per-label precision/recall/F1 for gold-supported labels
    #[arg(long, alias = "per_label")]
    pub per_label: bool,

    /// Show debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all logging
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON report (default)
    #[default]
    Json,
    /// Markdown table
    #[value(alias = "markdown", alias = "md")]
    Human,
}

impl Cli {
    /// The configuration carried by flags alone (no `--config` file applied).
    #[must_use]
    pub fn flag_config(&self) -> EvalConfig {
        EvalConfig {
            gold_task1: self.gold_task1.clone(),
            pred_task1a: self.pred_task1a.clone(),
            pred_task1b: self.pred_task1b.clone(),
            gold_task2: self.gold_task2.clone(),
            pred_task2a: self.pred_task2a.clone(),
            pred_task2b: self.pred_task2b.clone(),
            out: self.out.clone(),
            per_label: self.per_label,
        }
    }

    /// Resolve the run configuration: the `--config` file, overlaid by flags.
    pub fn resolve_config(&self) -> crate::Result<EvalConfig> {
        let base = match &self.config {
            Some(path) => EvalConfig::from_json_file(path)?,
            None => EvalConfig::default(),
        };
        Ok(base.merge(self.flag_config()))
    }

    /// Default log level implied by `-v` / `-q`.
    #[must_use]
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Off
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}
