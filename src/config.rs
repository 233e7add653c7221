//! Evaluation run configuration.
//!
//! An explicit value passed to [`crate::eval::report::run`]. It is filled
//! from command-line flags, from a JSON file, or built directly in tests.
//! Nothing here touches process-wide state.
//!
//! ```rust
//! use fehu_eval::config::EvalConfig;
//! use fehu_eval::eval::Task;
//!
//! let config = EvalConfig::default()
//!     .with_gold_task1("gold/article.json")
//!     .with_pred_task1a("pred/task1a.json")
//!     .with_pred_task2a("pred/task2a.json"); // no gold_task2: skipped
//!
//! let tasks: Vec<Task> = config.pairs().into_iter().map(|p| p.task).collect();
//! assert_eq!(tasks, vec![Task::Task1a]);
//! ```

use crate::eval::Task;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths and switches for one evaluation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvalConfig {
    /// Gold file for article-level tasks (1a, 1b)
    pub gold_task1: Option<PathBuf>,
    /// Predictions for task 1a
    pub pred_task1a: Option<PathBuf>,
    /// Predictions for task 1b
    pub pred_task1b: Option<PathBuf>,
    /// Gold file for subevent-level tasks (2a, 2b)
    pub gold_task2: Option<PathBuf>,
    /// Predictions for task 2a
    pub pred_task2a: Option<PathBuf>,
    /// Predictions for task 2b
    pub pred_task2b: Option<PathBuf>,
    /// Where to write the JSON report (in addition to stdout)
    pub out: Option<PathBuf>,
    /// Include the per-label breakdown in the report
    pub per_label: bool,
}

/// A runnable (task, gold, prediction) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskPair<'a> {
    /// Task to score
    pub task: Task,
    /// Gold annotation file
    pub gold: &'a Path,
    /// Prediction file
    pub pred: &'a Path,
}

impl EvalConfig {
    /// Read a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
    }

    /// Overlay `other` on `self`: every field set in `other` wins.
    #[must_use]
    pub fn merge(self, other: EvalConfig) -> Self {
        Self {
            gold_task1: other.gold_task1.or(self.gold_task1),
            pred_task1a: other.pred_task1a.or(self.pred_task1a),
            pred_task1b: other.pred_task1b.or(self.pred_task1b),
            gold_task2: other.gold_task2.or(self.gold_task2),
            pred_task2a: other.pred_task2a.or(self.pred_task2a),
            pred_task2b: other.pred_task2b.or(self.pred_task2b),
            out: other.out.or(self.out),
            per_label: other.per_label || self.per_label,
        }
    }

    /// Tasks with both a gold and a prediction file, in report order.
    #[must_use]
    pub fn pairs(&self) -> Vec<TaskPair<'_>> {
        Task::ALL
            .into_iter()
            .filter_map(|task| {
                let gold = self.gold_for(task)?;
                let pred = self.pred_for(task)?;
                Some(TaskPair { task, gold, pred })
            })
            .collect()
    }

    /// Gold file configured for a task's granularity.
    #[must_use]
    pub fn gold_for(&self, task: Task) -> Option<&Path> {
        match task {
            Task::Task1a | Task::Task1b => self.gold_task1.as_deref(),
            Task::Task2a | Task::Task2b => self.gold_task2.as_deref(),
        }
    }

    /// Prediction file configured for a task.
    #[must_use]
    pub fn pred_for(&self, task: Task) -> Option<&Path> {
        match task {
            Task::Task1a => self.pred_task1a.as_deref(),
            Task::Task1b => self.pred_task1b.as_deref(),
            Task::Task2a => self.pred_task2a.as_deref(),
            Task::Task2b => self.pred_task2b.as_deref(),
        }
    }

    /// Set the article-level gold file.
    #[must_use]
    pub fn with_gold_task1(mut self, path: impl Into<PathBuf>) -> Self {
        self.gold_task1 = Some(path.into());
        self
    }

    /// Set the task 1a prediction file.
    #[must_use]
    pub fn with_pred_task1a(mut self, path: impl Into<PathBuf>) -> Self {
        self.pred_task1a = Some(path.into());
        self
    }

    /// Set the task 1b prediction file.
    #[must_use]
    pub fn with_pred_task1b(mut self, path: impl Into<PathBuf>) -> Self {
        self.pred_task1b = Some(path.into());
        self
    }

    /// Set the subevent-level gold file.
    #[must_use]
    pub fn with_gold_task2(mut self, path: impl Into<PathBuf>) -> Self {
        self.gold_task2 = Some(path.into());
        self
    }

    /// Set the task 2a prediction file.
    #[must_use]
    pub fn with_pred_task2a(mut self, path: impl Into<PathBuf>) -> Self {
        self.pred_task2a = Some(path.into());
        self
    }

    /// Set the task 2b prediction file.
    #[must_use]
    pub fn with_pred_task2b(mut self, path: impl Into<PathBuf>) -> Self {
        self.pred_task2b = Some(path.into());
        self
    }

    /// Set the report output path.
    #[must_use]
    pub fn with_out(mut self, path: impl Into<PathBuf>) -> Self {
        self.out = Some(path.into());
        self
    }

    /// Toggle the per-label breakdown.
    #[must_use]
    pub fn with_per_label(mut self, per_label: bool) -> Self {
        self.per_label = per_label;
        self
    }
}
