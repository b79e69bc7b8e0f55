use std::cmp::Ordering;
use std::fmt;

use crate::frequency::FrequencyTable;
use crate::token::Token;

/// One ranked `(word, count)` pair, owned by the result sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankedEntry {
    pub word: Token,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(word: impl Into<Token>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.count)
    }
}

/// Total order applied to ranked entries.
pub trait RankOrder: Send + Sync {
    fn compare(&self, a: &RankedEntry, b: &RankedEntry) -> Ordering;
}

impl<F> RankOrder for F
where
    F: Fn(&RankedEntry, &RankedEntry) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &RankedEntry, b: &RankedEntry) -> Ordering {
        self(a, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Ascending,
    #[default]
    Descending,
}

/// Orders by count in the configured direction, then by word compared
/// case-insensitively in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountThenAlpha {
    direction: Direction,
}

impl CountThenAlpha {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub fn ascending() -> Self {
        Self::new(Direction::Ascending)
    }

    pub fn descending() -> Self {
        Self::new(Direction::Descending)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl RankOrder for CountThenAlpha {
    fn compare(&self, a: &RankedEntry, b: &RankedEntry) -> Ordering {
        let by_count = match self.direction {
            Direction::Ascending => a.count.cmp(&b.count),
            Direction::Descending => b.count.cmp(&a.count),
        };
        by_count.then_with(|| compare_ignore_case(&a.word, &b.word))
    }
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    // Equal folds fall back to exact order to stay total.
    folded_a.cmp(folded_b).then_with(|| a.cmp(b))
}

/// Materializes every entry of `table` and fully sorts it by `order`.
pub fn rank(table: FrequencyTable, order: &dyn RankOrder) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = table
        .into_iter()
        .map(|(word, count)| RankedEntry { word, count })
        .collect();
    entries.sort_unstable_by(|a, b| order.compare(a, b));
    entries
}
