// Lexicon sets — the three word categories every token is checked against.
//
// Membership is exact and case-normalized: no stemming, no fuzzy matching.
// Lookups happen once per token while the corpus is built; the resulting
// flags are cached on the token so the window scan never touches a set.

pub mod defaults;

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::AnalysisError;

/// Upper bound on distinct words in one lexicon set.
pub const MAX_LEXICON_WORDS: usize = 65_536;

/// Which semantic category a lexicon set describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LexiconKind {
    /// The target semantic cluster being measured
    Cluster,
    /// Stylistic confound markers
    Personality,
    /// Domain-technical register markers
    Technical,
}

impl LexiconKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LexiconKind::Cluster => "cluster",
            LexiconKind::Personality => "personality",
            LexiconKind::Technical => "technical",
        }
    }

    fn builtin_words(&self) -> &'static [&'static str] {
        match self {
            LexiconKind::Cluster => defaults::CLUSTER,
            LexiconKind::Personality => defaults::PERSONALITY,
            LexiconKind::Technical => defaults::TECHNICAL,
        }
    }
}

impl fmt::Display for LexiconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable set of normalized words for one category.
#[derive(Debug, Clone)]
pub struct LexiconSet {
    words: HashSet<String>,
}

impl LexiconSet {
    /// The built-in default list for `kind`.
    pub fn builtin(kind: LexiconKind) -> Self {
        let words = kind
            .builtin_words()
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self { words }
    }

    /// Parse a word list: one word per line, `#` comments and blank lines
    /// ignored, surrounding whitespace trimmed, words lowercased.
    pub fn parse(kind: LexiconKind, text: &str) -> Result<Self, AnalysisError> {
        let mut words = HashSet::new();
        for line in text.lines() {
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.insert(word.to_lowercase());
            if words.len() > MAX_LEXICON_WORDS {
                return Err(AnalysisError::LexiconTooLarge {
                    kind: kind.as_str(),
                    limit: MAX_LEXICON_WORDS,
                });
            }
        }
        Ok(Self { words })
    }

    /// Load a word list from a file. The file is a required input, so an
    /// unreadable path is an error rather than a skipped source.
    pub fn from_file(kind: LexiconKind, path: &Path) -> Result<Self, AnalysisError> {
        let text = std::fs::read_to_string(path).map_err(|source| AnalysisError::Lexicon {
            kind: kind.as_str(),
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::parse(kind, &text)?;
        debug!(kind = %kind, path = %path.display(), words = set.len(), "Loaded word list");
        Ok(set)
    }

    /// Use the override file when given, otherwise the built-in list.
    pub fn load(kind: LexiconKind, path: Option<&Path>) -> Result<Self, AnalysisError> {
        match path {
            Some(p) => Self::from_file(kind, p),
            None => Ok(Self::builtin(kind)),
        }
    }

    /// Exact membership test. `word` must already be lowercased.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Per-token membership flags, computed once at annotation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenFlags {
    pub cluster: bool,
    pub personality: bool,
    pub technical: bool,
}

/// The three lexicon sets used together during annotation.
#[derive(Debug, Clone)]
pub struct Lexicons {
    pub cluster: LexiconSet,
    pub personality: LexiconSet,
    pub technical: LexiconSet,
}

impl Lexicons {
    /// Load all three sets, each from its override file or the built-in list.
    pub fn load(
        cluster: Option<&Path>,
        personality: Option<&Path>,
        technical: Option<&Path>,
    ) -> Result<Self, AnalysisError> {
        Ok(Self {
            cluster: LexiconSet::load(LexiconKind::Cluster, cluster)?,
            personality: LexiconSet::load(LexiconKind::Personality, personality)?,
            technical: LexiconSet::load(LexiconKind::Technical, technical)?,
        })
    }

    /// Look `word` up in every set. Each membership is independent, so a
    /// cluster term can also be a personality or technical marker.
    pub fn flags(&self, word: &str) -> TokenFlags {
        TokenFlags {
            cluster: self.cluster.contains(word),
            personality: self.personality.contains(word),
            technical: self.technical.contains(word),
        }
    }
}

impl Default for Lexicons {
    fn default() -> Self {
        Self {
            cluster: LexiconSet::builtin(LexiconKind::Cluster),
            personality: LexiconSet::builtin(LexiconKind::Personality),
            technical: LexiconSet::builtin(LexiconKind::Technical),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let set = LexiconSet::parse(
            LexiconKind::Cluster,
            "# header\nVoid\n\n  abyss  \n#void-ish\nvoid\n",
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("void"));
        assert!(set.contains("abyss"));
        assert!(!set.contains("void-ish"));
    }

    #[test]
    fn test_parse_handles_crlf() {
        let set = LexiconSet::parse(LexiconKind::Technical, "kernel\r\nmutex\r\n").unwrap();
        assert!(set.contains("kernel"));
        assert!(set.contains("mutex"));
    }

    #[test]
    fn test_builtin_sets_are_lowercase_and_populated() {
        for kind in [
            LexiconKind::Cluster,
            LexiconKind::Personality,
            LexiconKind::Technical,
        ] {
            let set = LexiconSet::builtin(kind);
            assert!(!set.is_empty(), "{kind} list is empty");
            for word in kind.builtin_words() {
                assert_eq!(*word, word.to_lowercase());
                assert!(set.contains(word));
            }
        }
    }

    #[test]
    fn test_flags_are_independent() {
        // "matrix" is both a personality (pop culture) and technical marker
        let lex = Lexicons::default();
        let flags = lex.flags("matrix");
        assert!(flags.personality);
        assert!(flags.technical);
        assert!(!flags.cluster);
    }

    #[test]
    fn test_no_stemming() {
        let lex = Lexicons::default();
        assert!(lex.flags("void").cluster);
        assert!(!lex.flags("voids").cluster);
        assert!(!lex.flags("Void").cluster);
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = LexiconSet::from_file(
            LexiconKind::Personality,
            Path::new("/nonexistent/residue/personality.txt"),
        )
        .unwrap_err();
        assert!(matches!(err, AnalysisError::Lexicon { kind: "personality", .. }));
    }
}
