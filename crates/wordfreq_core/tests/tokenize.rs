use pretty_assertions::assert_eq;
use wordfreq_core::{normalize_raw_word, split_line, Token, WordScanner};

fn scanned(text: &str) -> Vec<Token> {
    let mut scanner = WordScanner::new();
    let mut words: Vec<Token> = scanner.feed(text).collect();
    words.extend(scanner.finish());
    words
}

fn split(text: &str) -> Vec<Token> {
    text.lines().flat_map(split_line).collect()
}

#[test]
fn both_families_agree_on_plain_prose() {
    let text = "It was the best of times, it was the worst of times.\n\
                People's check-mark; peoples' well-known 'tis!";
    assert_eq!(scanned(text), split(text));
}

#[test]
fn non_ascii_letters_stay_inside_words() {
    let text = "Grüßen aus der Straße";
    assert_eq!(scanned(text), vec!["grüßen", "aus", "der", "straße"]);
    assert_eq!(split(text), vec!["grüßen", "aus", "der", "straße"]);
}

#[test]
fn hyphen_runs_are_kept_by_both_families() {
    assert_eq!(scanned("yes -- no"), vec!["yes", "--", "no"]);
    assert_eq!(split("yes -- no"), vec!["yes", "--", "no"]);
}

#[test]
fn families_diverge_on_digits_and_interior_punctuation() {
    assert_eq!(scanned("co.op 42nd"), vec!["co", "op", "nd"]);
    assert_eq!(split("co.op 42nd"), vec!["coop", "42nd"]);
}

#[test]
fn normalize_drops_punctuation_only_words() {
    assert_eq!(normalize_raw_word("..."), None);
    assert_eq!(normalize_raw_word("\"Quoted\""), Some("quoted".to_string()));
    assert_eq!(normalize_raw_word("'-"), Some("'-".to_string()));
}

#[test]
fn trailing_word_is_flushed() {
    assert_eq!(scanned("last"), vec!["last"]);
    assert!(scanned("").is_empty());
    assert!(scanned(" \n\t ").is_empty());
}
