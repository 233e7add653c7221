//! Set-based multi-label metrics: micro P/R/F1 and gold-supported macro-F1.
//!
//! Every instance in the union of gold and predicted keys is scored; a
//! missing side counts as the empty set. Per instance:
//!
//! ```text
//! tp += |gold ∩ pred|    fp += |pred − gold|    fn += |gold − pred|
//! ```
//!
//! Any division by zero yields exactly `0.0`: an evaluation with no
//! predictions has precision 0, one with no gold has recall 0, and F1 is 0
//! when both are 0.
//!
//! Macro-F1 averages per-label F1 over labels of the universe that occur at
//! least once in gold within scope (`tp + fn > 0`). Labels that only
//! appear as false positives still count against micro precision but do
//! not enter the macro average.

use super::universe::LabelUniverse;
use crate::types::{AnnotationSet, Label};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

/// `n / d`, or `0.0` when `d == 0`.
#[must_use]
pub fn safe_div(n: f64, d: f64) -> f64 {
    if d == 0.0 {
        0.0
    } else {
        n / d
    }
}

/// Harmonic mean of precision and recall, `0.0` when both are zero.
#[must_use]
pub fn f1_from_pr(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        return 0.0;
    }
    2.0 * precision * recall / (precision + recall)
}

/// True-positive / false-positive / false-negative counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    /// Labels in both gold and prediction
    pub tp: usize,
    /// Predicted labels absent from gold
    pub fp: usize,
    /// Gold labels absent from prediction
    #[serde(rename = "fn")]
    pub fn_: usize,
}

impl Counts {
    /// Create counts directly.
    #[must_use]
    pub fn new(tp: usize, fp: usize, fn_: usize) -> Self {
        Self { tp, fp, fn_ }
    }

    /// `tp / (tp + fp)`
    #[must_use]
    pub fn precision(&self) -> f64 {
        safe_div(self.tp as f64, (self.tp + self.fp) as f64)
    }

    /// `tp / (tp + fn)`
    #[must_use]
    pub fn recall(&self) -> f64 {
        safe_div(self.tp as f64, (self.tp + self.fn_) as f64)
    }

    /// F1 from [`Self::precision`] and [`Self::recall`].
    #[must_use]
    pub fn f1(&self) -> f64 {
        f1_from_pr(self.precision(), self.recall())
    }

    /// Gold occurrences (`tp + fn`).
    #[must_use]
    pub fn support(&self) -> usize {
        self.tp + self.fn_
    }

    /// Predicted occurrences (`tp + fp`).
    #[must_use]
    pub fn predicted(&self) -> usize {
        self.tp + self.fp
    }

    /// Add another set of counts.
    pub fn merge(&mut self, other: &Counts) {
        self.tp += other.tp;
        self.fp += other.fp;
        self.fn_ += other.fn_;
    }

    /// Counts for a single instance's gold and predicted label sets.
    #[must_use]
    pub fn from_sets(gold: &HashSet<Label>, pred: &HashSet<Label>) -> Self {
        let tp = gold.intersection(pred).count();
        Self {
            tp,
            fp: pred.len() - tp,
            fn_: gold.len() - tp,
        }
    }
}

/// Micro counts summed over `instances`.
#[must_use]
pub fn micro_counts<K: Eq + Hash>(
    gold: &AnnotationSet<K>,
    pred: &AnnotationSet<K>,
    instances: &HashSet<&K>,
) -> Counts {
    let mut counts = Counts::default();
    for key in instances {
        counts.merge(&Counts::from_sets(gold.labels(key), pred.labels(key)));
    }
    counts
}

/// Per-label counts over `instances`, for every label seen on either side.
#[must_use]
pub fn per_label_counts<K: Eq + Hash>(
    gold: &AnnotationSet<K>,
    pred: &AnnotationSet<K>,
    instances: &HashSet<&K>,
) -> HashMap<Label, Counts> {
    let mut counts: HashMap<Label, Counts> = HashMap::new();
    for key in instances {
        let g = gold.labels(key);
        let p = pred.labels(key);
        for label in g.intersection(p) {
            counts.entry(label.clone()).or_default().tp += 1;
        }
        for label in p.difference(g) {
            counts.entry(label.clone()).or_default().fp += 1;
        }
        for label in g.difference(p) {
            counts.entry(label.clone()).or_default().fn_ += 1;
        }
    }
    counts
}

/// Labels of `universe` with at least one gold occurrence, in universe order.
#[must_use]
pub fn gold_supported_labels<'u>(
    per_label: &HashMap<Label, Counts>,
    universe: &'u LabelUniverse,
) -> Vec<&'u Label> {
    universe
        .iter()
        .filter(|label| per_label.get(*label).is_some_and(|c| c.support() > 0))
        .collect()
}

/// Mean per-label F1 over gold-supported labels; `0.0` if there are none.
#[must_use]
pub fn macro_f1_gold_supported(
    per_label: &HashMap<Label, Counts>,
    universe: &LabelUniverse,
) -> f64 {
    let labels = gold_supported_labels(per_label, universe);
    if labels.is_empty() {
        return 0.0;
    }
    let sum: f64 = labels
        .iter()
        .filter_map(|label| per_label.get(*label))
        .map(Counts::f1)
        .sum();
    sum / labels.len() as f64
}

/// Scores for one task.
///
/// Field order matches the report layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EvalResult {
    /// Micro-averaged F1
    pub micro_f1: f64,
    /// Gold-supported macro-averaged F1
    pub macro_f1: f64,
    /// Micro-averaged precision
    pub micro_precision: f64,
    /// Micro-averaged recall
    pub micro_recall: f64,
    /// Size of the gold/pred instance union
    pub support_instances: usize,
    /// Raw label count over every gold entry
    pub support_gold_labels: usize,
    /// Raw label count over every predicted entry
    pub support_pred_labels: usize,
}

/// Per-label breakdown for a gold-supported label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelMetrics {
    /// Precision for this label
    pub precision: f64,
    /// Recall for this label
    pub recall: f64,
    /// F1 for this label
    pub f1: f64,
    /// Gold occurrences
    pub support: usize,
    /// Predicted occurrences
    pub predicted: usize,
    /// Correct predictions
    pub correct: usize,
}

impl From<&Counts> for LabelMetrics {
    fn from(c: &Counts) -> Self {
        Self {
            precision: c.precision(),
            recall: c.recall(),
            f1: c.f1(),
            support: c.support(),
            predicted: c.predicted(),
            correct: c.tp,
        }
    }
}

/// [`EvalResult`] plus raw micro counts and the per-label breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailedEvalResult {
    /// Headline scores
    pub result: EvalResult,
    /// Micro counts over the instance union
    pub micro: Counts,
    /// Gold-supported labels only, sorted by label
    pub per_label: BTreeMap<Label, LabelMetrics>,
}

/// Score predictions against gold.
///
/// Pure function of its inputs; never fails. Labels outside `universe`
/// still count toward micro scores.
///
/// # Example
///
/// ```rust
/// use fehu_eval::eval::{evaluate, l2_universe};
/// use fehu_eval::types::{AnnotationSet, ArticleInstance};
///
/// let key = ArticleInstance::new("d1", "a1");
/// let gold: AnnotationSet<_> = [(key.clone(), "3"), (key.clone(), "4")].into_iter().collect();
/// let pred: AnnotationSet<_> = [(key, "3")].into_iter().collect();
///
/// let result = evaluate(&gold, &pred, &l2_universe());
/// assert_eq!(result.micro_precision, 1.0);
/// assert_eq!(result.micro_recall, 0.5);
/// assert!((result.micro_f1 - 2.0 / 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn evaluate<K: Eq + Hash>(
    gold: &AnnotationSet<K>,
    pred: &AnnotationSet<K>,
    universe: &LabelUniverse,
) -> EvalResult {
    evaluate_detailed(gold, pred, universe).result
}

/// Like [`evaluate`], also returning counts and the per-label breakdown.
#[must_use]
pub fn evaluate_detailed<K: Eq + Hash>(
    gold: &AnnotationSet<K>,
    pred: &AnnotationSet<K>,
    universe: &LabelUniverse,
) -> DetailedEvalResult {
    let instances = gold.instance_union(pred);

    let micro = micro_counts(gold, pred, &instances);
    let per_label = per_label_counts(gold, pred, &instances);
    let macro_f1 = macro_f1_gold_supported(&per_label, universe);

    let outside = per_label
        .keys()
        .filter(|label| !universe.contains(label))
        .count();
    if outside > 0 {
        log::warn!(
            "{} distinct label(s) outside the label universe; counted in micro scores only",
            outside
        );
    }
    log::debug!(
        "scored {} instances: tp={} fp={} fn={}",
        instances.len(),
        micro.tp,
        micro.fp,
        micro.fn_
    );

    let micro_precision = micro.precision();
    let micro_recall = micro.recall();

    let breakdown = gold_supported_labels(&per_label, universe)
        .into_iter()
        .filter_map(|label| {
            per_label
                .get(label)
                .map(|c| (label.clone(), LabelMetrics::from(c)))
        })
        .collect();

    DetailedEvalResult {
        result: EvalResult {
            micro_f1: f1_from_pr(micro_precision, micro_recall),
            macro_f1,
            micro_precision,
            micro_recall,
            support_instances: instances.len(),
            support_gold_labels: gold.total_labels(),
            support_pred_labels: pred.total_labels(),
        },
        micro,
        per_label: breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::universe::l2_universe;
    use crate::types::ArticleInstance;

    fn key(d: &str, a: &str) -> ArticleInstance {
        ArticleInstance::new(d, a)
    }

    fn set(entries: &[(&str, &str, &str)]) -> AnnotationSet<ArticleInstance> {
        entries
            .iter()
            .map(|(d, a, l)| (key(d, a), *l))
            .collect()
    }

    #[test]
    fn test_safe_div_and_f1_zero_policy() {
        assert_eq!(safe_div(3.0, 0.0), 0.0);
        assert_eq!(safe_div(0.0, 0.0), 0.0);
        assert_eq!(safe_div(1.0, 4.0), 0.25);
        assert_eq!(f1_from_pr(0.0, 0.0), 0.0);
        assert!((f1_from_pr(1.0, 0.5) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_counts_from_sets() {
        let g: HashSet<Label> = ["1", "2", "3"].iter().map(|s| s.to_string()).collect();
        let p: HashSet<Label> = ["2", "3", "4", "5"].iter().map(|s| s.to_string()).collect();
        assert_eq!(Counts::from_sets(&g, &p), Counts::new(2, 2, 1));
    }

    #[test]
    fn test_partial_overlap() {
        let gold = set(&[("d1", "a1", "3"), ("d1", "a1", "4")]);
        let pred = set(&[("d1", "a1", "3")]);

        let detailed = evaluate_detailed(&gold, &pred, &l2_universe());
        assert_eq!(detailed.micro, Counts::new(1, 0, 1));

        let r = detailed.result;
        assert_eq!(r.micro_precision, 1.0);
        assert_eq!(r.micro_recall, 0.5);
        assert!((r.micro_f1 - 2.0 / 3.0).abs() < 1e-12);
        // label 3: F1 1.0, label 4: F1 0.0
        assert!((r.macro_f1 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_prediction_only_instance_is_false_positive() {
        let gold = set(&[("d1", "a1", "1")]);
        let pred = set(&[("d1", "a1", "1"), ("d2", "a9", "1")]);

        let detailed = evaluate_detailed(&gold, &pred, &l2_universe());
        assert_eq!(detailed.micro, Counts::new(1, 1, 0));
        assert_eq!(detailed.result.support_instances, 2);
        assert_eq!(detailed.result.micro_precision, 0.5);
        assert_eq!(detailed.result.micro_recall, 1.0);
    }

    #[test]
    fn test_gold_only_instance_is_false_negative() {
        let gold = set(&[("d1", "a1", "1"), ("d2", "a2", "2")]);
        let pred = set(&[("d1", "a1", "1")]);

        let r = evaluate(&gold, &pred, &l2_universe());
        assert_eq!(r.micro_precision, 1.0);
        assert_eq!(r.micro_recall, 0.5);
        assert_eq!(r.support_gold_labels, 2);
        assert_eq!(r.support_pred_labels, 1);
    }

    #[test]
    fn test_macro_ignores_unsupported_labels() {
        let gold = set(&[("d1", "a1", "1")]);
        let clean = set(&[("d1", "a1", "1")]);
        let noisy = set(&[("d1", "a1", "1"), ("d1", "a1", "7")]);

        let universe = l2_universe();
        let r_clean = evaluate(&gold, &clean, &universe);
        let r_noisy = evaluate(&gold, &noisy, &universe);

        assert_eq!(r_clean.macro_f1, 1.0);
        assert_eq!(r_noisy.macro_f1, 1.0);
        assert!(r_noisy.micro_f1 < r_clean.micro_f1);
    }

    #[test]
    fn test_labels_outside_universe_count_in_micro_only() {
        let gold = set(&[("d1", "a1", "x")]);
        let pred = set(&[("d1", "a1", "x")]);

        let r = evaluate(&gold, &pred, &l2_universe());
        assert_eq!(r.micro_f1, 1.0);
        assert_eq!(r.macro_f1, 0.0);
    }

    #[test]
    fn test_empty_everything() {
        let empty = AnnotationSet::<ArticleInstance>::new();
        let r = evaluate(&empty, &empty, &l2_universe());
        assert_eq!(r, EvalResult::default());
    }

    #[test]
    fn test_per_label_breakdown_only_gold_supported() {
        let gold = set(&[("d1", "a1", "1"), ("d2", "a1", "1"), ("d2", "a1", "2")]);
        let pred = set(&[("d1", "a1", "1"), ("d2", "a1", "5")]);

        let detailed = evaluate_detailed(&gold, &pred, &l2_universe());
        let labels: Vec<_> = detailed.per_label.keys().cloned().collect();
        assert_eq!(labels, vec!["1".to_string(), "2".to_string()]);

        let one = detailed.per_label["1"];
        assert_eq!(one.support, 2);
        assert_eq!(one.correct, 1);
        assert_eq!(one.predicted, 1);
        assert_eq!(one.recall, 0.5);

        let two = detailed.per_label["2"];
        assert_eq!(two.f1, 0.0);
    }

    #[test]
    fn test_counts_serialize_fn_key() {
        let json = serde_json::to_string(&Counts::new(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"tp":1,"fp":2,"fn":3}"#);
    }
}
