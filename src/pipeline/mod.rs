// Analysis pipeline — corpus → annotated tokens → hits → sections → tests.
//
// Each stage is a plain function over the previous stage's output; nothing
// is mutated after it is produced. The CLI and the tests both go through
// `run` / `run_text`, so there is a single computation path and the
// renderers only ever read an `Analysis`.

use serde::Serialize;
use tracing::{debug, info};

use crate::analysis::aggregate::{aggregate, Summary};
use crate::analysis::classifier::{
    classify, Hit, HitLog, DEFAULT_HIT_LOG_CAPACITY, DEFAULT_WINDOW, MAX_WINDOW, MIN_WINDOW,
};
use crate::analysis::verdict::Interpretation;
use crate::corpus::tokenizer::Tokenizer;
use crate::corpus::{Corpus, Source, DEFAULT_MAX_TOKENS};
use crate::error::AnalysisError;
use crate::lexicon::Lexicons;
use crate::stats::{self, Baseline, BaselineReport, DEFAULT_BASELINE};

/// Knobs for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Co-occurrence window radius in tokens
    pub window: usize,
    /// Baselines to test against; the first is the primary one
    pub baselines: Vec<Baseline>,
    pub max_tokens: usize,
    pub hit_log_capacity: usize,
    pub tokenizer: Tokenizer,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            baselines: vec![Baseline {
                label: stats::PRIMARY_LABEL.to_string(),
                proportion: DEFAULT_BASELINE,
            }],
            max_tokens: DEFAULT_MAX_TOKENS,
            hit_log_capacity: DEFAULT_HIT_LOG_CAPACITY,
            tokenizer: Tokenizer::default(),
        }
    }
}

/// Sizes of the lexicon sets used for a run, for reporting.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LexiconSizes {
    pub cluster: usize,
    pub personality: usize,
    pub technical: usize,
}

/// The complete result of one run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub corpus: Corpus,
    pub window: usize,
    /// One entry per cluster-term token, in corpus order
    pub hits: Vec<Hit>,
    /// Bounded copy of `hits` for diagnostic listings
    pub hit_log: HitLog,
    pub summary: Summary,
    /// One report per baseline, in configuration order
    pub tests: Vec<BaselineReport>,
    pub interpretation: Interpretation,
    pub lexicons: LexiconSizes,
}

impl Analysis {
    /// Results against the primary (first) baseline.
    pub fn primary(&self) -> &BaselineReport {
        // analyze_corpus always produces at least one report
        &self.tests[0]
    }
}

/// Read every source and analyze the merged corpus.
pub fn run(
    sources: &[Source],
    lexicons: &Lexicons,
    options: &AnalysisOptions,
) -> Result<Analysis, AnalysisError> {
    let corpus = Corpus::from_sources(sources, lexicons, &options.tokenizer, options.max_tokens)?;
    analyze_corpus(corpus, lexicons, options)
}

/// Analyze an in-memory text.
pub fn run_text(
    text: &str,
    lexicons: &Lexicons,
    options: &AnalysisOptions,
) -> Result<Analysis, AnalysisError> {
    let corpus = Corpus::from_text(text, lexicons, &options.tokenizer, options.max_tokens)?;
    analyze_corpus(corpus, lexicons, options)
}

/// Classify, aggregate and test an already-built corpus.
pub fn analyze_corpus(
    corpus: Corpus,
    lexicons: &Lexicons,
    options: &AnalysisOptions,
) -> Result<Analysis, AnalysisError> {
    if corpus.is_empty() {
        return Err(AnalysisError::EmptyCorpus);
    }
    let window = options.window.clamp(MIN_WINDOW, MAX_WINDOW);

    let hits = classify(corpus.tokens(), window);
    let hit_log = HitLog::from_hits(&hits, options.hit_log_capacity);
    let summary = aggregate(&corpus, &hits);

    info!(
        tokens = summary.totals.tokens,
        sections = summary.sections.len(),
        hits = summary.totals.cluster_hits,
        personality = summary.totals.labels.personality,
        anomalous = summary.totals.labels.anomalous,
        residual = summary.totals.labels.residual,
        "Classified cluster hits"
    );
    if hit_log.is_truncated() {
        debug!(
            kept = hit_log.entries().len(),
            dropped = hit_log.dropped(),
            "Hit log is full"
        );
    }

    let baselines = if options.baselines.is_empty() {
        vec![Baseline::primary(DEFAULT_BASELINE)?]
    } else {
        options.baselines.clone()
    };
    let tests = stats::test_all(&baselines, &summary.totals);
    let interpretation = Interpretation::assess(&summary.totals, &tests[0]);

    Ok(Analysis {
        corpus,
        window,
        hits,
        hit_log,
        summary,
        tests,
        interpretation,
        lexicons: LexiconSizes {
            cluster: lexicons.cluster.len(),
            personality: lexicons.personality.len(),
            technical: lexicons.technical.len(),
        },
    })
}
