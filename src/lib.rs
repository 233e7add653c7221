//! # fehu-eval
//!
//! Scoring for multi-label human-values annotation.
//!
//! - **Micro-F1**: set-based tp/fp/fn over every instance seen in gold or
//!   predictions
//! - **Macro-F1**: averaged over labels that occur at least once in gold
//! - **Direction-reversal rate**: how often a prediction flips the direction
//!   of a value whose gold direction is unambiguous
//!
//! ## Tasks
//!
//! | Task | Instance | Labels | DRR |
//! |------|----------|--------|-----|
//! | `task1a` | `(document, actor)` | level-2 `"0"`..`"19"` | no |
//! | `task1b` | `(document, actor)` | `"{direction}:{l1}"` | yes |
//! | `task2a` | `(document, subevent, actor)` | level-2 | no |
//! | `task2b` | `(document, subevent, actor)` | `"{direction}:{l1}"` | yes |
//!
//! ## Quick Start
//!
//! ```rust
//! use fehu_eval::eval::{direction_reverse_rate, evaluate, l1_dir_universe};
//! use fehu_eval::types::{AnnotationSet, ArticleInstance};
//!
//! let key = ArticleInstance::new("d1", "a1");
//! let gold: AnnotationSet<_> = [(key.clone(), "0:5"), (key.clone(), "1:7")].into_iter().collect();
//! let pred: AnnotationSet<_> = [(key.clone(), "1:5"), (key, "1:7")].into_iter().collect();
//!
//! let scores = evaluate(&gold, &pred, &l1_dir_universe());
//! assert_eq!(scores.micro_precision, 0.5);
//!
//! let drr = direction_reverse_rate(&gold, &pred)?;
//! assert_eq!(drr.reverse_count, 1);
//! assert_eq!(drr.denom_count, 2);
//! # Ok::<(), fehu_eval::Error>(())
//! ```
//!
//! ## Running a Full Evaluation
//!
//! ```rust,no_run
//! use fehu_eval::config::EvalConfig;
//! use fehu_eval::eval::run;
//!
//! let config = EvalConfig::default()
//!     .with_gold_task1("gold/test_article_human_values.json")
//!     .with_pred_task1a("pred/task1/pred_task1a.json")
//!     .with_pred_task1b("pred/task1/pred_task1b.json");
//!
//! let report = run(&config)?;
//! println!("{}", report.to_json_pretty()?);
//! # Ok::<(), fehu_eval::Error>(())
//! ```
//!
//! ## Design
//!
//! - **Pure core**: `evaluate` and `direction_reverse_rate` are functions of
//!   their inputs; all file handling lives in [`ingest`] and [`eval::report`]
//! - **Zero-safe division**: empty denominators produce `0.0`, never NaN
//! - **Explicit configuration**: [`config::EvalConfig`] is passed in; nothing
//!   reads or rewrites process arguments behind the caller's back

#![warn(missing_docs)]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
mod error;
pub mod eval;
pub mod ingest;
pub mod types;

pub use error::{Error, Result};
