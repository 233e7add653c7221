//! Direction-reversal rate (DRR) over gold-exclusive values.
//!
//! For direction-tagged labels (`"{direction}:{value}"`), each instance's gold
//! and predicted labels are partitioned by direction into value sets.
//!
//! - **Ambiguous**: a value gold-annotated in both directions for the same
//!   instance. Excluded from the rate, counted separately.
//! - **Gold-exclusive**: a value gold-annotated in exactly one direction.
//!   These form the denominator.
//! - **Reversed**: a gold-exclusive value that the prediction asserts in the
//!   opposite direction. Also predicting the correct direction does not
//!   cancel a reversal; omitting the value is not a reversal.
//!
//! ```text
//! reversed = (P_aligned ∩ G_only_contra) ∪ (P_contra ∩ G_only_aligned)
//! rate     = Σ|reversed| / Σ(|G_only_aligned| + |G_only_contra|)   (0.0 if empty)
//! ```

use super::metrics::safe_div;
use crate::types::{AnnotationSet, Direction, DirectionLabel, Label};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// Aggregate direction-reversal statistics for one task.
///
/// Serialized with the report key names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionReversal {
    /// `reverse_count / denom_count`, `0.0` when the denominator is zero
    #[serde(rename = "direction_reverse_rate")]
    pub rate: f64,
    /// Gold-exclusive values predicted in the opposite direction
    #[serde(rename = "direction_reverse_count")]
    pub reverse_count: usize,
    /// Gold-exclusive values (the denominator)
    #[serde(rename = "direction_reverse_denom_gold_excl")]
    pub denom_count: usize,
    /// Values gold-annotated in both directions, excluded from the rate
    #[serde(rename = "ambiguous_gold_values_filtered")]
    pub ambiguous_count: usize,
}

/// Values of one instance's label set, split by direction.
#[derive(Debug, Default)]
struct DirectionPartition<'a> {
    aligned: HashSet<&'a str>,
    contradictory: HashSet<&'a str>,
}

impl<'a> DirectionPartition<'a> {
    fn from_labels(labels: &'a HashSet<Label>) -> Result<Self> {
        let mut partition = Self::default();
        for label in labels {
            let parsed = DirectionLabel::parse(label)?;
            match parsed.direction {
                Direction::Aligned => partition.aligned.insert(parsed.value),
                Direction::Contradictory => partition.contradictory.insert(parsed.value),
            };
        }
        Ok(partition)
    }

    fn side(&self, direction: Direction) -> &HashSet<&'a str> {
        match direction {
            Direction::Aligned => &self.aligned,
            Direction::Contradictory => &self.contradictory,
        }
    }
}

/// Per-instance contribution.
#[derive(Debug, Default, PartialEq, Eq)]
struct InstanceReversal {
    reversed: usize,
    exclusive: usize,
    ambiguous: usize,
}

fn instance_reversal(
    gold: &DirectionPartition<'_>,
    pred: &DirectionPartition<'_>,
) -> InstanceReversal {
    let ambiguous = gold.aligned.intersection(&gold.contradictory).count();

    let mut reversed = 0;
    let mut exclusive = 0;
    for direction in [Direction::Aligned, Direction::Contradictory] {
        let other = gold.side(direction.opposite());
        let predicted_opposite = pred.side(direction.opposite());
        for value in gold.side(direction).difference(other) {
            exclusive += 1;
            if predicted_opposite.contains(value) {
                reversed += 1;
            }
        }
    }

    InstanceReversal {
        reversed,
        exclusive,
        ambiguous,
    }
}

/// Direction-reversal rate over the union of gold and predicted instances.
///
/// Every label on either side must contain a `:` separator; the first
/// malformed one aborts with [`crate::Error::MalformedLabel`].
///
/// # Example
///
/// ```rust
/// use fehu_eval::eval::direction_reverse_rate;
/// use fehu_eval::types::{AnnotationSet, ArticleInstance};
///
/// let key = ArticleInstance::new("d1", "a1");
/// let gold: AnnotationSet<_> = [(key.clone(), "0:5")].into_iter().collect();
/// let pred: AnnotationSet<_> = [(key, "1:5")].into_iter().collect();
///
/// let drr = direction_reverse_rate(&gold, &pred).unwrap();
/// assert_eq!(drr.reverse_count, 1);
/// assert_eq!(drr.denom_count, 1);
/// assert_eq!(drr.rate, 1.0);
/// ```
pub fn direction_reverse_rate<K: Eq + Hash>(
    gold: &AnnotationSet<K>,
    pred: &AnnotationSet<K>,
) -> Result<DirectionReversal> {
    let mut reverse_count = 0;
    let mut denom_count = 0;
    let mut ambiguous_count = 0;

    for key in gold.instance_union(pred) {
        let g = DirectionPartition::from_labels(gold.labels(key))?;
        let p = DirectionPartition::from_labels(pred.labels(key))?;
        let contribution = instance_reversal(&g, &p);

        reverse_count += contribution.reversed;
        denom_count += contribution.exclusive;
        ambiguous_count += contribution.ambiguous;
    }

    log::debug!(
        "direction reversal: {} reversed of {} gold-exclusive values ({} ambiguous filtered)",
        reverse_count,
        denom_count,
        ambiguous_count
    );

    Ok(DirectionReversal {
        rate: safe_div(reverse_count as f64, denom_count as f64),
        reverse_count,
        denom_count,
        ambiguous_count,
    })
}
