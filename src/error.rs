// Error taxonomy for the analysis engine.
//
// Input errors (an unreadable corpus source) are not represented here: they
// are recovered where they happen by skipping the source with a warning.
// Everything in this enum stops the run.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while building or analyzing a corpus.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Tokenization produced no tokens at all, so no density can be computed.
    #[error("empty corpus: no tokens found in input")]
    EmptyCorpus,

    /// The corpus grew past the configured token capacity.
    #[error("token limit exceeded: corpus holds more than {limit} tokens (raise RESIDUE_MAX_TOKENS)")]
    TokenLimit { limit: usize },

    /// A lexicon override file could not be read.
    #[error("cannot read {kind} word list {path}: {source}")]
    Lexicon {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A lexicon has more distinct words than a set may hold.
    #[error("{kind} word list has more than {limit} distinct words")]
    LexiconTooLarge { kind: &'static str, limit: usize },

    /// A `LABEL:PROPORTION` baseline could not be parsed.
    #[error("malformed baseline '{input}': expected LABEL:PROPORTION")]
    MalformedBaseline { input: String },

    /// A baseline proportion outside [0, 1].
    #[error("baseline '{label}' must be a proportion in [0, 1], got {value}")]
    BaselineOutOfRange { label: String, value: f64 },
}
