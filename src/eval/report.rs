//! Task report assembly.
//!
//! Loads each configured (gold, prediction) pair, scores it with the metric
//! core, adds the direction-reversal analysis for direction tasks, and
//! collects everything into an [`EvalReport`] keyed by task name.
//!
//! # Example
//!
//! ```rust
//! use fehu_eval::eval::{score_task, EvalReport, Task};
//! use fehu_eval::ingest::{Document, HumanValue};
//!
//! let gold = vec![Document::new("d1")
//!     .with_article_value(HumanValue::level2("a1", "3"))
//!     .with_article_value(HumanValue::level2("a1", "4"))];
//! let pred = vec![Document::new("d1").with_article_value(HumanValue::level2("a1", "3"))];
//!
//! let mut report = EvalReport::new();
//! report.insert(Task::Task1a, score_task(Task::Task1a, &gold, &pred, false)?);
//!
//! let json = report.to_json_pretty()?;
//! assert!(json.contains("\"task1a\""));
//! assert!(json.contains("\"micro_recall\": 0.5"));
//! # Ok::<(), fehu_eval::Error>(())
//! ```

use super::direction::{direction_reverse_rate, DirectionReversal};
use super::metrics::{evaluate_detailed, EvalResult, LabelMetrics};
use super::universe::LabelUniverse;
use crate::config::EvalConfig;
use crate::ingest::{load_documents, Document, InstanceKey, LabelScheme};
use crate::types::{AnnotationSet, ArticleInstance, Label, SubeventInstance};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::{Entry, HashMap};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;
use std::path::Path;

// =============================================================================
// Tasks
// =============================================================================

/// Which part of a document an instance is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// `(document_id, actor_id)`
    Article,
    /// `(document_id, subevent_id, actor_id)`
    Subevent,
}

/// The four shared-task tracks.
///
/// | Task | Granularity | Labels |
/// |------|-------------|--------|
/// | `task1a` | article | level-2 |
/// | `task1b` | article | direction + level-1 |
/// | `task2a` | subevent | level-2 |
/// | `task2b` | subevent | direction + level-1 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    /// Article-level, level-2 values
    Task1a,
    /// Article-level, direction + level-1 values
    Task1b,
    /// Subevent-level, level-2 values
    Task2a,
    /// Subevent-level, direction + level-1 values
    Task2b,
}

impl Task {
    /// All tasks in report order.
    pub const ALL: [Task; 4] = [Task::Task1a, Task::Task1b, Task::Task2a, Task::Task2b];

    /// Report key.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Task::Task1a => "task1a",
            Task::Task1b => "task1b",
            Task::Task2a => "task2a",
            Task::Task2b => "task2b",
        }
    }

    /// Instance granularity.
    #[must_use]
    pub fn granularity(self) -> Granularity {
        match self {
            Task::Task1a | Task::Task1b => Granularity::Article,
            Task::Task2a | Task::Task2b => Granularity::Subevent,
        }
    }

    /// Label rendering scheme.
    #[must_use]
    pub fn scheme(self) -> LabelScheme {
        match self {
            Task::Task1a | Task::Task2a => LabelScheme::Level2,
            Task::Task1b | Task::Task2b => LabelScheme::DirectionLevel1,
        }
    }

    /// Whether the direction-reversal analysis applies.
    #[must_use]
    pub fn has_direction(self) -> bool {
        self.scheme() == LabelScheme::DirectionLevel1
    }

    /// Label universe for macro-F1.
    #[must_use]
    pub fn universe(self) -> LabelUniverse {
        match self.scheme() {
            LabelScheme::Level2 => LabelUniverse::level2(),
            LabelScheme::DirectionLevel1 => LabelUniverse::direction_level1(),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Results
// =============================================================================

/// Everything reported for one task.
///
/// Serializes flat: the metric fields first, then the direction-reversal
/// fields (task1b/task2b only), then the optional per-label breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    /// Micro/macro scores and support counts
    #[serde(flatten)]
    pub metrics: EvalResult,
    /// Direction-reversal statistics (direction tasks only)
    #[serde(flatten)]
    pub direction: Option<DirectionReversal>,
    /// Gold-supported per-label breakdown (when requested)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_label: Option<BTreeMap<Label, LabelMetrics>>,
}

impl TaskResult {
    /// Score already-extracted annotation sets for `task`.
    pub fn compute<K: Eq + Hash>(
        task: Task,
        gold: &AnnotationSet<K>,
        pred: &AnnotationSet<K>,
        per_label: bool,
    ) -> Result<Self> {
        let detailed = evaluate_detailed(gold, pred, &task.universe());
        let direction = if task.has_direction() {
            Some(direction_reverse_rate(gold, pred)?)
        } else {
            None
        };

        Ok(Self {
            metrics: detailed.result,
            direction,
            per_label: per_label.then_some(detailed.per_label),
        })
    }
}

/// Per-task results, serialized as `{"task1a": {...}, ...}` in task order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvalReport {
    tasks: BTreeMap<Task, TaskResult>,
}

impl EvalReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a task's result.
    pub fn insert(&mut self, task: Task, result: TaskResult) {
        self.tasks.insert(task, result);
    }

    /// Result for a task, if it was evaluated.
    #[must_use]
    pub fn get(&self, task: Task) -> Option<&TaskResult> {
        self.tasks.get(&task)
    }

    /// Iterate results in task order.
    pub fn iter(&self) -> impl Iterator<Item = (Task, &TaskResult)> {
        self.tasks.iter().map(|(task, result)| (*task, result))
    }

    /// Number of evaluated tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no task was evaluated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Format as markdown tables.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::from(
            "| Task | Micro-F1 | Macro-F1 | Micro-P | Micro-R | Instances | Gold | Pred | DRR |\n\
             |------|----------|----------|---------|---------|-----------|------|------|-----|\n",
        );
        for (task, result) in self.iter() {
            let m = &result.metrics;
            let drr = match &result.direction {
                Some(d) => format!(
                    "{:.1}% ({}/{}, {} ambiguous)",
                    d.rate * 100.0,
                    d.reverse_count,
                    d.denom_count,
                    d.ambiguous_count
                ),
                None => "-".to_string(),
            };
            out.push_str(&format!(
                "| {} | {:.1}% | {:.1}% | {:.1}% | {:.1}% | {} | {} | {} | {} |\n",
                task,
                m.micro_f1 * 100.0,
                m.macro_f1 * 100.0,
                m.micro_precision * 100.0,
                m.micro_recall * 100.0,
                m.support_instances,
                m.support_gold_labels,
                m.support_pred_labels,
                drr
            ));
        }

        for (task, result) in self.iter() {
            let Some(per_label) = &result.per_label else {
                continue;
            };
            out.push_str(&format!(
                "\n### {} per label\n\n\
                 | Label | Precision | Recall | F1 | Support | Predicted |\n\
                 |-------|-----------|--------|----|---------|-----------|\n",
                task
            ));
            for (label, lm) in per_label {
                out.push_str(&format!(
                    "| {} | {:.1}% | {:.1}% | {:.1}% | {} | {} |\n",
                    label,
                    lm.precision * 100.0,
                    lm.recall * 100.0,
                    lm.f1 * 100.0,
                    lm.support,
                    lm.predicted
                ));
            }
        }
        out
    }
}

// =============================================================================
// Running
// =============================================================================

fn score_documents<K: InstanceKey>(
    task: Task,
    gold_docs: &[Document],
    pred_docs: &[Document],
    per_label: bool,
) -> Result<TaskResult> {
    let scheme = task.scheme();
    let gold = K::extract(gold_docs, scheme)?;
    let pred = K::extract(pred_docs, scheme)?;

    if gold.is_empty() {
        log::warn!("{}: gold has no annotations; every prediction is a false positive", task);
    }
    if pred.is_empty() {
        log::warn!("{}: no predictions found", task);
    }

    TaskResult::compute(task, &gold, &pred, per_label)
}

/// Score one task from parsed gold and prediction documents.
pub fn score_task(
    task: Task,
    gold: &[Document],
    pred: &[Document],
    per_label: bool,
) -> Result<TaskResult> {
    match task.granularity() {
        Granularity::Article => score_documents::<ArticleInstance>(task, gold, pred, per_label),
        Granularity::Subevent => score_documents::<SubeventInstance>(task, gold, pred, per_label),
    }
}

/// Evaluate every task with both files configured.
///
/// Fails with [`Error::NoTasks`] when no (gold, prediction) pair is
/// configured. Each gold file is parsed once even when two tasks share it.
pub fn run(config: &EvalConfig) -> Result<EvalReport> {
    let pairs = config.pairs();
    if pairs.is_empty() {
        return Err(Error::NoTasks);
    }

    let mut gold_cache: HashMap<&Path, Vec<Document>> = HashMap::new();
    let mut report = EvalReport::new();

    for pair in pairs {
        let gold = match gold_cache.entry(pair.gold) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(load_documents(pair.gold)?),
        };
        let pred = load_documents(pair.pred)?;

        let result = score_task(pair.task, gold, &pred, config.per_label)?;
        log::info!(
            "{}: micro-F1 {:.4}, macro-F1 {:.4} over {} instances",
            pair.task,
            result.metrics.micro_f1,
            result.metrics.macro_f1,
            result.metrics.support_instances
        );
        report.insert(pair.task, result);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{HumanValue, SubeventValues};

    fn l2(actor: &str, value: &str) -> HumanValue {
        HumanValue::level2(actor, value)
    }

    fn dir(actor: &str, d: &str, v: &str) -> HumanValue {
        HumanValue::directed(actor, d, v)
    }

    #[test]
    fn test_task_properties() {
        assert_eq!(Task::Task1a.granularity(), Granularity::Article);
        assert_eq!(Task::Task2b.granularity(), Granularity::Subevent);
        assert!(Task::Task1b.has_direction());
        assert!(!Task::Task2a.has_direction());
        assert_eq!(Task::Task1a.universe().len(), 20);
        assert_eq!(Task::Task2b.universe().len(), 108);
        assert_eq!(Task::Task2a.to_string(), "task2a");
    }

    #[test]
    fn test_level2_task_has_no_direction_fields() {
        let gold = vec![Document::new("d1").with_article_value(l2("a1", "3"))];
        let result = score_task(Task::Task1a, &gold, &gold, false).unwrap();
        assert!(result.direction.is_none());

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("direction_reverse_rate").is_none());
        assert!(json.get("per_label").is_none());
        assert_eq!(json["micro_f1"], 1.0);
    }

    #[test]
    fn test_direction_task_carries_drr() {
        let gold = vec![Document::new("d1").with_subevent(SubeventValues::new(
            "s1",
            vec![dir("a1", "0", "5"), dir("a1", "1", "6")],
        ))];
        let pred = vec![Document::new("d1").with_subevent(SubeventValues::new(
            "s1",
            vec![dir("a1", "1", "5"), dir("a1", "1", "6")],
        ))];

        let result = score_task(Task::Task2b, &gold, &pred, true).unwrap();
        let drr = result.direction.unwrap();
        assert_eq!(drr.reverse_count, 1);
        assert_eq!(drr.denom_count, 2);
        assert_eq!(drr.rate, 0.5);

        let per_label = result.per_label.unwrap();
        assert_eq!(per_label.len(), 2);
        assert_eq!(per_label["1:6"].f1, 1.0);
    }

    #[test]
    fn test_json_key_order() {
        let gold = vec![Document::new("d1").with_article_value(dir("a1", "0", "5"))];
        let pred = vec![Document::new("d1").with_article_value(dir("a1", "1", "5"))];

        let mut report = EvalReport::new();
        report.insert(Task::Task1b, score_task(Task::Task1b, &gold, &pred, false).unwrap());
        report.insert(Task::Task1a, score_task(Task::Task1a, &[], &[], false).unwrap());

        let json = report.to_json_pretty().unwrap();
        let keys = [
            "\"task1a\"",
            "\"task1b\"",
            "\"micro_f1\"",
            "\"macro_f1\"",
            "\"micro_precision\"",
            "\"micro_recall\"",
            "\"support_instances\"",
            "\"support_gold_labels\"",
            "\"support_pred_labels\"",
            "\"direction_reverse_rate\"",
            "\"direction_reverse_count\"",
            "\"direction_reverse_denom_gold_excl\"",
            "\"ambiguous_gold_values_filtered\"",
        ];
        let task1b_at = json.find("\"task1b\"").unwrap();
        let mut last = 0;
        for key in keys {
            let from = if key.starts_with("\"task") { 0 } else { task1b_at };
            let pos = json[from..].find(key).unwrap() + from;
            assert!(pos >= last, "{} out of order in\n{}", key, json);
            last = pos;
        }
    }

    #[test]
    fn test_report_roundtrips_through_json() {
        let gold = vec![Document::new("d1").with_article_value(dir("a1", "0", "5"))];
        let mut report = EvalReport::new();
        report.insert(Task::Task1b, score_task(Task::Task1b, &gold, &gold, false).unwrap());

        let json = report.to_json_pretty().unwrap();
        let back: EvalReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_markdown() {
        let gold = vec![Document::new("d1").with_article_value(l2("a1", "3"))];
        let mut report = EvalReport::new();
        report.insert(Task::Task1a, score_task(Task::Task1a, &gold, &gold, true).unwrap());

        let md = report.to_markdown();
        assert!(md.contains("| task1a | 100.0% | 100.0%"));
        assert!(md.contains("### task1a per label"));
        assert!(md.contains("| 3 | 100.0%"));
    }

    #[test]
    fn test_run_without_pairs_is_no_tasks() {
        let config = EvalConfig::default().with_gold_task1("unused.json");
        assert!(matches!(run(&config), Err(Error::NoTasks)));
    }
}
