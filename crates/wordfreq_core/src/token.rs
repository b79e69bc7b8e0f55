/// A normalized, lowercase word.
pub type Token = String;

/// Letters plus apostrophe and hyphen are word characters; everything else ends a word.
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == '\'' || c == '-'
}

/// Lowercases character by character so both tokenizer families fold identically.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Streaming word state machine for the char-by-char tokenizer.
///
/// The scanner is "inside a word" exactly when its accumulator is non-empty.
/// Word characters are appended lowercased with no lookahead, so a leading
/// apostrophe or hyphen stays part of the token (`'tis` stays `'tis`, and a
/// bare `--` is a token of its own).
#[derive(Debug, Default, Clone)]
pub struct WordScanner {
    current: String,
}

impl WordScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one decoded character; returns a token when `c` closes a word.
    pub fn push(&mut self, c: char) -> Option<Token> {
        if is_word_char(c) {
            self.current.extend(c.to_lowercase());
            None
        } else if self.current.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.current))
        }
    }

    /// Flushes the word still being built at end of stream.
    pub fn finish(&mut self) -> Option<Token> {
        if self.current.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.current))
        }
    }

    /// Lazily yields the words that `text` completes. A word still open at
    /// the end of `text` is carried into the next call or [`finish`](Self::finish).
    pub fn feed<'a>(&'a mut self, text: &'a str) -> impl Iterator<Item = Token> + 'a {
        text.chars().filter_map(move |c| self.push(c))
    }

    pub fn in_word(&self) -> bool {
        !self.current.is_empty()
    }
}
