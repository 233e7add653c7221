//! Annotation sets: instance key -> set of labels.

use super::label::Label;
use once_cell::sync::Lazy;
use std::collections::hash_map::{self, HashMap};
use std::collections::HashSet;
use std::hash::Hash;

/// Shared empty label set returned for absent instances.
static EMPTY_LABELS: Lazy<HashSet<Label>> = Lazy::new(HashSet::new);

/// Mapping from instance identifier to a set of labels.
///
/// Duplicate labels collapse and order is irrelevant. An instance that is
/// absent behaves exactly like one mapped to the empty set; see
/// [`AnnotationSet::labels`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationSet<K: Eq + Hash> {
    inner: HashMap<K, HashSet<Label>>,
}

impl<K: Eq + Hash> Default for AnnotationSet<K> {
    fn default() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> AnnotationSet<K> {
    /// Create an empty annotation set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one label to an instance, creating the instance if needed.
    pub fn insert(&mut self, key: K, label: impl Into<Label>) {
        self.inner.entry(key).or_default().insert(label.into());
    }

    /// Labels for an instance; the empty set when the instance is absent.
    #[must_use]
    pub fn labels(&self, key: &K) -> &HashSet<Label> {
        match self.inner.get(key) {
            Some(labels) => labels,
            None => Lazy::force(&EMPTY_LABELS),
        }
    }

    /// Whether the instance has an entry (possibly an empty one).
    #[must_use]
    pub fn contains_instance(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    /// Iterate over instance keys.
    pub fn instances(&self) -> hash_map::Keys<'_, K, HashSet<Label>> {
        self.inner.keys()
    }

    /// Iterate over `(instance, labels)` entries.
    pub fn iter(&self) -> hash_map::Iter<'_, K, HashSet<Label>> {
        self.inner.iter()
    }

    /// Number of instances with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether there are no instances at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Raw sum of label-set sizes over every entry.
    #[must_use]
    pub fn total_labels(&self) -> usize {
        self.inner.values().map(HashSet::len).sum()
    }

    /// Keys present in `self` or `other` (the scoring scope of a gold/pred pair).
    #[must_use]
    pub fn instance_union<'a>(&'a self, other: &'a Self) -> HashSet<&'a K> {
        self.inner.keys().chain(other.inner.keys()).collect()
    }
}

impl<K: Eq + Hash> From<HashMap<K, HashSet<Label>>> for AnnotationSet<K> {
    fn from(inner: HashMap<K, HashSet<Label>>) -> Self {
        Self { inner }
    }
}

impl<K: Eq + Hash, L: Into<Label>> FromIterator<(K, L)> for AnnotationSet<K> {
    fn from_iter<I: IntoIterator<Item = (K, L)>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: Eq + Hash, L: Into<Label>> Extend<(K, L)> for AnnotationSet<K> {
    fn extend<I: IntoIterator<Item = (K, L)>>(&mut self, iter: I) {
        for (key, label) in iter {
            self.insert(key, label);
        }
    }
}

impl<'a, K: Eq + Hash> IntoIterator for &'a AnnotationSet<K> {
    type Item = (&'a K, &'a HashSet<Label>);
    type IntoIter = hash_map::Iter<'a, K, HashSet<Label>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
