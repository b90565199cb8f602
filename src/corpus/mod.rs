// Corpus construction — merges every input source into one annotated token
// sequence split into blank-line sections.
//
// Tokens are created exactly once, already carrying their lexicon flags, and
// are never mutated afterwards.

pub mod tokenizer;

use std::fmt;
use std::io::Read;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::AnalysisError;
use crate::lexicon::Lexicons;
use tokenizer::{TokenSink, Tokenizer};

/// Default token capacity of a corpus.
pub const DEFAULT_MAX_TOKENS: usize = 2_000_000;

/// One normalized word of the corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Lowercased word
    pub word: String,
    /// Corpus-wide position, starting at 0
    pub index: usize,
    /// Owning section
    pub section: usize,
    /// Which input source the token came from
    pub source: usize,
    /// Byte offset of the token start within its source
    pub offset: usize,
    pub is_cluster: bool,
    pub is_personality: bool,
    pub is_technical: bool,
}

/// A contiguous, non-empty token range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: usize,
    pub start: usize,
    pub end: usize,
}

impl SectionSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Where corpus text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Interpret a command-line argument; `-` means standard input.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Source::Stdin
        } else {
            Source::File(PathBuf::from(arg))
        }
    }

    fn read(&self) -> std::io::Result<String> {
        let bytes = match self {
            Source::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin().lock().read_to_end(&mut buf)?;
                buf
            }
            Source::File(path) => std::fs::read(path)?,
        };
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The full annotated token sequence and its sections.
#[derive(Debug, Clone)]
pub struct Corpus {
    tokens: Vec<Token>,
    sections: Vec<SectionSpan>,
    skipped: Vec<String>,
}

impl Corpus {
    /// Build a corpus from a single in-memory text.
    pub fn from_text(
        text: &str,
        lexicons: &Lexicons,
        tokenizer: &Tokenizer,
        max_tokens: usize,
    ) -> Result<Self, AnalysisError> {
        let mut builder = CorpusBuilder::new(lexicons, max_tokens);
        tokenizer.feed(text, &mut builder)?;
        builder.finish()
    }

    /// Read and merge every source in order. Unreadable sources are skipped
    /// with a warning; the corpus must still end up non-empty.
    pub fn from_sources(
        sources: &[Source],
        lexicons: &Lexicons,
        tokenizer: &Tokenizer,
        max_tokens: usize,
    ) -> Result<Self, AnalysisError> {
        let mut builder = CorpusBuilder::new(lexicons, max_tokens);

        for (idx, source) in sources.iter().enumerate() {
            let text = match source.read() {
                Ok(text) => text,
                Err(e) => {
                    warn!(source = %source, error = %e, "Skipping unreadable source");
                    builder.skipped.push(source.to_string());
                    continue;
                }
            };
            builder.begin_source(idx);
            tokenizer.feed(&text, &mut builder)?;
            debug!(source = %source, tokens = builder.tokens.len(), "Read source");
        }

        builder.finish()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn sections(&self) -> &[SectionSpan] {
        &self.sections
    }

    /// Display names of sources that could not be read.
    pub fn skipped_sources(&self) -> &[String] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Incremental corpus builder fed by the tokenizer.
///
/// The line-break counter persists across sources, so a file ending in a
/// newline followed by a file starting with one forms a section boundary.
pub struct CorpusBuilder<'a> {
    lexicons: &'a Lexicons,
    max_tokens: usize,
    tokens: Vec<Token>,
    sections: Vec<SectionSpan>,
    skipped: Vec<String>,
    section_start: usize,
    line_breaks: u32,
    source: usize,
}

impl<'a> CorpusBuilder<'a> {
    pub fn new(lexicons: &'a Lexicons, max_tokens: usize) -> Self {
        Self {
            lexicons,
            max_tokens,
            tokens: Vec::new(),
            sections: Vec::new(),
            skipped: Vec::new(),
            section_start: 0,
            line_breaks: 0,
            source: 0,
        }
    }

    /// Mark the start of the next input source.
    pub fn begin_source(&mut self, source: usize) {
        self.source = source;
    }

    fn close_section(&mut self) {
        let end = self.tokens.len();
        if end > self.section_start {
            self.sections.push(SectionSpan {
                id: self.sections.len(),
                start: self.section_start,
                end,
            });
            self.section_start = end;
        }
    }

    /// Close the last section and hand over the corpus.
    pub fn finish(mut self) -> Result<Corpus, AnalysisError> {
        self.close_section();
        if self.tokens.is_empty() {
            return Err(AnalysisError::EmptyCorpus);
        }
        debug!(
            tokens = self.tokens.len(),
            sections = self.sections.len(),
            "Corpus built"
        );
        Ok(Corpus {
            tokens: self.tokens,
            sections: self.sections,
            skipped: self.skipped,
        })
    }
}

impl TokenSink for CorpusBuilder<'_> {
    fn word(&mut self, word: String, offset: usize) -> Result<(), AnalysisError> {
        if self.tokens.len() >= self.max_tokens {
            return Err(AnalysisError::TokenLimit {
                limit: self.max_tokens,
            });
        }
        let flags = self.lexicons.flags(&word);
        self.tokens.push(Token {
            index: self.tokens.len(),
            section: self.sections.len(),
            source: self.source,
            offset,
            is_cluster: flags.cluster,
            is_personality: flags.personality,
            is_technical: flags.technical,
            word,
        });
        Ok(())
    }

    fn newline(&mut self) {
        self.line_breaks += 1;
        if self.line_breaks >= 2 && self.tokens.len() > self.section_start {
            self.close_section();
            self.line_breaks = 0;
        }
    }

    fn content(&mut self) {
        self.line_breaks = 0;
    }
}
