//! Core data model: instance identifiers, labels, and annotation sets.
//!
//! # Parse, Don't Validate
//!
//! Instance identifiers are fixed-arity value types, one per task
//! granularity, so a subevent key can never be compared against an
//! article key by accident. Direction-tagged labels are parsed once into
//! [`DirectionLabel`]; downstream code works with the split form.
//!
//! | Type | Shape | Used by |
//! |------|-------|---------|
//! | [`ArticleInstance`] | `(document_id, actor_id)` | task1a, task1b |
//! | [`SubeventInstance`] | `(document_id, subevent_id, actor_id)` | task2a, task2b |
//! | [`AnnotationSet`] | `instance -> {label}` | gold and predictions |
//! | [`DirectionLabel`] | `"{direction}:{value}"` | task1b, task2b |
//!
//! # Example
//!
//! ```rust
//! use fehu_eval::types::{AnnotationSet, ArticleInstance};
//!
//! let mut gold = AnnotationSet::new();
//! gold.insert(ArticleInstance::new("d1", "a1"), "3");
//! gold.insert(ArticleInstance::new("d1", "a1"), "3"); // set semantics
//! gold.insert(ArticleInstance::new("d1", "a1"), "4");
//!
//! assert_eq!(gold.len(), 1);
//! assert_eq!(gold.total_labels(), 2);
//! assert!(gold.labels(&ArticleInstance::new("d2", "a1")).is_empty());
//! ```

mod annotation;
mod instance;
mod label;

pub use annotation::AnnotationSet;
pub use instance::{ArticleInstance, SubeventInstance};
pub use label::{Direction, DirectionLabel, Label};
