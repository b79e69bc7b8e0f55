use std::sync::LazyLock;

use regex::Regex;

use crate::token::{fold_case, Token};

// ASCII whitespace only: [ \t\n\x0B\f\r].
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\s)+").expect("whitespace pattern"));

// ASCII punctuation except apostrophe and hyphen.
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[[:punct:]&&[^'\-]]+").expect("punctuation pattern"));

/// Strips punctuation (keeping `'` and `-` wherever they appear) and lowercases.
/// Returns `None` when nothing is left.
pub fn normalize_raw_word(raw: &str) -> Option<Token> {
    let stripped = PUNCTUATION.replace_all(raw, "");
    let token = fold_case(&stripped);
    (!token.is_empty()).then_some(token)
}

/// Splits one line on whitespace runs and normalizes each raw word.
///
/// Like the streaming scanner, a hyphen-only word such as `--` survives;
/// unlike it, a word made only of other punctuation (`...`) is dropped,
/// and digits stay attached to the word they appear in.
pub fn split_line(line: &str) -> impl Iterator<Item = Token> + '_ {
    WHITESPACE.split(line).filter_map(normalize_raw_word)
}
