//! Insertion-ordered counting and de-duplication.
//!
//! Ranking by frequency must break ties by first appearance, and the result
//! must not depend on hash ordering. `OrderedCounter` keeps keys in the order
//! they were first seen and sorts stably, so equal counts keep that order.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct OrderedCounter<K> {
    entries: Vec<(K, usize)>,
    index: HashMap<K, usize>,
}

impl<K: Clone + Eq + Hash> OrderedCounter<K> {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Vec::new(), index: HashMap::new() }
    }

    /// Count one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    #[must_use]
    pub fn count(&self, key: &K) -> usize {
        self.index.get(key).map_or(0, |&slot| self.entries[slot].1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys by descending count; ties keep first-seen order.
    #[must_use]
    pub fn ranked(&self) -> Vec<&K> {
        let mut sorted: Vec<&(K, usize)> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.into_iter().map(|(key, _)| key).collect()
    }

    /// Highest-count key, earliest on ties.
    #[must_use]
    pub fn most_common(&self) -> Option<&K> {
        self.ranked().into_iter().next()
    }
}

impl<K: Clone + Eq + Hash> Default for OrderedCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> Extend<K> for OrderedCounter<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

/// Drop repeats, keeping the first occurrence of each item.
pub fn dedup<T, I>(items: I) -> Vec<T>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(item.clone())).collect()
}
