//! Plain-text tokenization - word and sentence splitting

/// Words and sentences extracted from one plain-text body.
///
/// Borrows from the input; word counting is the foundation every scorer
/// builds on.
#[derive(Debug, Clone, Default)]
pub struct Tokens<'a> {
    /// Whitespace-separated words, empty tokens discarded
    pub words: Vec<&'a str>,
    /// Sentences split on `.`/`!`/`?` runs, whitespace-only results discarded
    pub sentences: Vec<&'a str>,
}

impl Tokens<'_> {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Split plain text into words and sentences. Empty input yields empty
/// token lists; there are no error conditions.
pub fn tokenize(text: &str) -> Tokens<'_> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentences: Vec<&str> = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    Tokens { words, sentences }
}
