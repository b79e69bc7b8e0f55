use std::cmp::Ordering;
use std::sync::Once;

use pretty_assertions::assert_eq;
use wordfreq_core::{rank, CountThenAlpha, Direction, FrequencyTable, RankOrder, RankedEntry};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn table(words: &[(&str, u64)]) -> FrequencyTable {
    words
        .iter()
        .flat_map(|(word, count)| std::iter::repeat(word.to_string()).take(*count as usize))
        .collect()
}

#[test]
fn descending_count_then_alphabetical() {
    init_logging();
    let ranked = rank(
        table(&[("c", 1), ("b", 2), ("a", 2)]),
        &CountThenAlpha::descending(),
    );
    assert_eq!(
        ranked,
        vec![
            RankedEntry::new("a", 2),
            RankedEntry::new("b", 2),
            RankedEntry::new("c", 1),
        ]
    );
}

#[test]
fn equal_counts_fall_back_to_alphabetical() {
    init_logging();
    let ranked = rank(table(&[("z", 1), ("a", 1)]), &CountThenAlpha::descending());
    assert_eq!(ranked, vec![RankedEntry::new("a", 1), RankedEntry::new("z", 1)]);
}

#[test]
fn ascending_reverses_count_but_not_tie_break() {
    init_logging();
    let ranked = rank(
        table(&[("x", 3), ("b", 1), ("a", 1), ("m", 2)]),
        &CountThenAlpha::ascending(),
    );
    let words: Vec<&str> = ranked.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["a", "b", "m", "x"]);
}

#[test]
fn default_comparator_is_descending() {
    assert_eq!(CountThenAlpha::default().direction(), Direction::Descending);
}

#[test]
fn tie_break_ignores_case() {
    let order = CountThenAlpha::descending();
    let upper = RankedEntry::new("Beta", 4);
    let lower = RankedEntry::new("alpha", 4);
    assert_eq!(order.compare(&lower, &upper), Ordering::Less);
    assert_eq!(order.compare(&upper, &lower), Ordering::Greater);
}

#[test]
fn closures_are_rank_orders() {
    init_logging();
    let by_word_desc = |a: &RankedEntry, b: &RankedEntry| b.word.cmp(&a.word);
    let ranked = rank(table(&[("a", 5), ("c", 1), ("b", 3)]), &by_word_desc);
    let words: Vec<&str> = ranked.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["c", "b", "a"]);
}

#[test]
fn ranking_covers_every_distinct_word() {
    let ranked = rank(table(&[("one", 1), ("two", 2), ("three", 3)]), &CountThenAlpha::default());
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0], RankedEntry::new("three", 3));
    assert_eq!(ranked[0].to_string(), "three: 3");
}

#[test]
fn empty_table_ranks_to_empty_sequence() {
    assert!(rank(FrequencyTable::new(), &CountThenAlpha::default()).is_empty());
}
