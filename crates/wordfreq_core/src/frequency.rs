use std::collections::hash_map::{self, HashMap};

use crate::token::Token;

/// Occurrence count per normalized token for a single counting run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    counts: HashMap<Token, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count for `token`, inserting it at 1 when unseen.
    pub fn record(&mut self, token: Token) {
        *self.counts.entry(token).or_insert(0) += 1;
    }

    /// Folds another partial table into this one by summing counts per key.
    ///
    /// Plain addition keeps the merge commutative and associative, so the way
    /// input was partitioned never shows in the result.
    pub fn merge(self, other: FrequencyTable) -> FrequencyTable {
        // Drain the smaller map into the larger one.
        let (mut into, from) = if self.counts.len() >= other.counts.len() {
            (self.counts, other.counts)
        } else {
            (other.counts, self.counts)
        };
        for (token, count) in from {
            *into.entry(token).or_insert(0) += count;
        }
        FrequencyTable { counts: into }
    }

    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Token, u64> {
        self.counts.iter()
    }
}

impl Extend<Token> for FrequencyTable {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        for token in iter {
            self.record(token);
        }
    }
}

impl FromIterator<Token> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        table.extend(iter);
        table
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (Token, u64);
    type IntoIter = hash_map::IntoIter<Token, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
