// Character-level word scanner.
//
// A word is a maximal run of alphabetic characters, apostrophes and hyphens.
// It is kept only if it starts with a letter and is at least `min_len`
// characters long. Everything the scanner sees is reported to a TokenSink,
// which decides what a word or a line break means for the corpus.

use crate::error::AnalysisError;

/// Receives scanner events in input order.
pub trait TokenSink {
    /// An accepted, lowercased word starting at byte `offset` of the source.
    fn word(&mut self, word: String, offset: usize) -> Result<(), AnalysisError>;

    /// A `\n` character.
    fn newline(&mut self);

    /// Any character other than `\n` or `\r` (words included).
    fn content(&mut self);
}

/// Configurable word scanner.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Minimum accepted word length in characters
    pub min_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        // Single letters ("a", "I", stray initials) are noise for density
        Self { min_len: 2 }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == '\'' || c == '-'
}

impl Tokenizer {
    /// Scan `text`, reporting words, newlines and other content to `sink`.
    pub fn feed<S: TokenSink>(&self, text: &str, sink: &mut S) -> Result<(), AnalysisError> {
        let mut start: Option<usize> = None;

        for (i, c) in text.char_indices() {
            if is_word_char(c) {
                if start.is_none() {
                    start = Some(i);
                }
                sink.content();
                continue;
            }

            if let Some(s) = start.take() {
                self.emit(&text[s..i], s, sink)?;
            }

            match c {
                '\n' => sink.newline(),
                '\r' => {}
                _ => sink.content(),
            }
        }

        if let Some(s) = start {
            self.emit(&text[s..], s, sink)?;
        }
        Ok(())
    }

    /// Convenience: the accepted words of `text`, in order.
    pub fn words(&self, text: &str) -> Vec<String> {
        let mut collector = WordCollector(Vec::new());
        // WordCollector never fails
        let _ = self.feed(text, &mut collector);
        collector.0
    }

    fn emit<S: TokenSink>(&self, raw: &str, offset: usize, sink: &mut S) -> Result<(), AnalysisError> {
        let starts_alpha = raw.chars().next().is_some_and(char::is_alphabetic);
        if starts_alpha && raw.chars().count() >= self.min_len {
            sink.word(raw.to_lowercase(), offset)?;
        }
        Ok(())
    }
}

struct WordCollector(Vec<String>);

impl TokenSink for WordCollector {
    fn word(&mut self, word: String, _offset: usize) -> Result<(), AnalysisError> {
        self.0.push(word);
        Ok(())
    }

    fn newline(&mut self) {}

    fn content(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_words() {
        let t = Tokenizer::default();
        assert_eq!(t.words("Hello World foo bar"), vec!["hello", "world", "foo", "bar"]);
    }

    #[test]
    fn test_punctuation_split() {
        let t = Tokenizer::default();
        assert_eq!(
            t.words("void, abyss! darkness? emptiness."),
            vec!["void", "abyss", "darkness", "emptiness"]
        );
    }

    #[test]
    fn test_single_letters_dropped() {
        let t = Tokenizer::default();
        assert_eq!(t.words("I a x void the"), vec!["void", "the"]);
    }

    #[test]
    fn test_min_len_one_keeps_single_letters() {
        let t = Tokenizer { min_len: 1 };
        assert_eq!(t.words("I saw a void"), vec!["i", "saw", "a", "void"]);
    }

    #[test]
    fn test_hyphens_and_apostrophes_stay_inside_words() {
        let t = Tokenizer::default();
        assert_eq!(
            t.words("don't plot-twist well-known"),
            vec!["don't", "plot-twist", "well-known"]
        );
    }

    #[test]
    fn test_leading_apostrophe_rejected() {
        let t = Tokenizer::default();
        // "'tis" starts with an apostrophe; "--" has no letter at all
        assert_eq!(t.words("'tis the -- void"), vec!["the", "void"]);
    }

    #[test]
    fn test_digits_split_words() {
        let t = Tokenizer::default();
        assert_eq!(
            t.words("version 3.14 has 42 improvements"),
            vec!["version", "has", "improvements"]
        );
    }

    #[test]
    fn test_unicode_letters() {
        let t = Tokenizer::default();
        assert_eq!(t.words("Œuvre café NAÏVE"), vec!["œuvre", "café", "naïve"]);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        let t = Tokenizer::default();
        assert!(t.words("").is_empty());
        assert!(t.words("... !!! ???").is_empty());
    }
}
