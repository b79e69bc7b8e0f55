//! Wordfreq core: tokenizer rules, frequency aggregation and ranking.
mod frequency;
mod rank;
mod split;
mod token;

pub use frequency::FrequencyTable;
pub use rank::{rank, CountThenAlpha, Direction, RankOrder, RankedEntry};
pub use split::{normalize_raw_word, split_line};
pub use token::{fold_case, is_word_char, Token, WordScanner};
