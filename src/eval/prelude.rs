//! Evaluation prelude - commonly used types for quick imports.
//!
//! # Usage
//!
//! ```rust
//! use fehu_eval::eval::prelude::*;
//!
//! let universe = l1_dir_universe();
//! assert_eq!(universe.len(), 108);
//! ```

// Scoring entry points
pub use super::direction::{direction_reverse_rate, DirectionReversal};
pub use super::metrics::{evaluate, EvalResult};
pub use super::universe::{l1_dir_universe, l2_universe, LabelUniverse};

// Report assembly
pub use super::report::{run, score_task, EvalReport, Task, TaskResult};
pub use crate::config::EvalConfig;

// Data model
pub use crate::types::{AnnotationSet, ArticleInstance, SubeventInstance};
