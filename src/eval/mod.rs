//! Scoring for the human-values annotation tasks.
//!
//! # Overview
//!
//! - [`metrics`]: micro P/R/F1 and gold-supported macro-F1 over set-valued
//!   annotations
//! - [`direction`]: direction-reversal rate over gold-exclusive values
//! - [`universe`]: the level-2 and direction x level-1 label universes
//! - [`report`]: per-task assembly into the JSON report
//!
//! # Metric Core
//!
//! ```rust
//! use fehu_eval::eval::{evaluate, l2_universe};
//! use fehu_eval::types::{AnnotationSet, ArticleInstance};
//!
//! let gold: AnnotationSet<ArticleInstance> = AnnotationSet::new();
//! let pred: AnnotationSet<_> = [(ArticleInstance::new("d1", "a1"), "3")].into_iter().collect();
//!
//! let result = evaluate(&gold, &pred, &l2_universe());
//! assert_eq!(result.micro_f1, 0.0);
//! assert_eq!(result.macro_f1, 0.0);
//! assert_eq!(result.support_instances, 1);
//! ```
//!
//! # Metrics
//!
//! | Field | Definition |
//! |-------|------------|
//! | `micro_precision` | `Σtp / (Σtp + Σfp)` |
//! | `micro_recall` | `Σtp / (Σtp + Σfn)` |
//! | `micro_f1` | harmonic mean of the two |
//! | `macro_f1` | mean per-label F1 over labels with gold support |
//! | `direction_reverse_rate` | reversed / gold-exclusive direction values |
//!
//! Zero denominators give `0.0` everywhere.

pub mod direction;
pub mod metrics;
pub mod prelude;
pub mod report;
pub mod universe;

pub use direction::{direction_reverse_rate, DirectionReversal};
pub use metrics::{
    evaluate, evaluate_detailed, f1_from_pr, macro_f1_gold_supported, micro_counts,
    per_label_counts, safe_div, Counts, DetailedEvalResult, EvalResult, LabelMetrics,
};
pub use report::{run, score_task, EvalReport, Granularity, Task, TaskResult};
pub use universe::{l1_dir_universe, l2_universe, LabelUniverse};
