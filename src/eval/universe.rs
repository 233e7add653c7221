//! Label universes for the two task families.
//!
//! A universe is only consulted when restricting macro-F1 to gold-supported
//! labels. Annotation sets are never validated against it.

use crate::types::Label;
use std::collections::btree_set::{self, BTreeSet};

/// Number of level-2 values (`"0"`..`"19"`).
pub const LEVEL2_VALUES: usize = 20;

/// Number of level-1 values (`"0"`..`"53"`).
pub const LEVEL1_VALUES: usize = 54;

/// Direction tokens, aligned first.
pub const DIRECTION_TOKENS: [&str; 2] = ["0", "1"];

/// The enumerable domain of valid labels for a task family.
///
/// Ordered so that macro averaging sums per-label F1 in a stable order.
///
/// # Example
///
/// ```rust
/// use fehu_eval::eval::LabelUniverse;
///
/// let l2 = LabelUniverse::level2();
/// assert_eq!(l2.len(), 20);
/// assert!(l2.contains("19"));
///
/// let l1 = LabelUniverse::direction_level1();
/// assert_eq!(l1.len(), 108);
/// assert!(l1.contains("1:53"));
/// assert!(!l1.contains("2:0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelUniverse {
    labels: BTreeSet<Label>,
}

impl LabelUniverse {
    /// Level-2 universe: `"0"`..`"19"`.
    #[must_use]
    pub fn level2() -> Self {
        (0..LEVEL2_VALUES).map(|i| i.to_string()).collect()
    }

    /// Direction x level-1 universe: `"0:0"`..`"1:53"`.
    #[must_use]
    pub fn direction_level1() -> Self {
        DIRECTION_TOKENS
            .iter()
            .flat_map(|d| (0..LEVEL1_VALUES).map(move |i| format!("{d}:{i}")))
            .collect()
    }

    /// Whether `label` belongs to the universe.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the universe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate labels in sorted order.
    pub fn iter(&self) -> btree_set::Iter<'_, Label> {
        self.labels.iter()
    }
}

impl<L: Into<Label>> FromIterator<L> for LabelUniverse {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LabelUniverse {
    type Item = &'a Label;
    type IntoIter = btree_set::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

/// The 20-element level-2 universe.
#[must_use]
pub fn l2_universe() -> LabelUniverse {
    LabelUniverse::level2()
}

/// The 108-element direction x level-1 universe.
#[must_use]
pub fn l1_dir_universe() -> LabelUniverse {
    LabelUniverse::direction_level1()
}
