// JSON rendering of a full analysis.

use serde::Serialize;

use crate::analysis::aggregate::{SectionStats, TermCount, Totals};
use crate::analysis::classifier::Hit;
use crate::analysis::verdict::Interpretation;
use crate::pipeline::{Analysis, LexiconSizes};
use crate::stats::BaselineReport;

/// Serializable view of an `Analysis`. Tokens themselves are left out.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub window: usize,
    pub lexicons: LexiconSizes,
    pub totals: &'a Totals,
    pub tests: &'a [BaselineReport],
    pub interpretation: Interpretation,
    pub terms: &'a [TermCount],
    pub sections: &'a [SectionStats],
    pub hits: &'a [Hit],
    /// Hits classified but not retained in the hit log
    pub hits_dropped: usize,
    pub skipped_sources: &'a [String],
}

impl<'a> Report<'a> {
    pub fn new(analysis: &'a Analysis) -> Self {
        Self {
            window: analysis.window,
            lexicons: analysis.lexicons,
            totals: &analysis.summary.totals,
            tests: &analysis.tests,
            interpretation: analysis.interpretation,
            terms: &analysis.summary.terms,
            sections: &analysis.summary.sections,
            hits: analysis.hit_log.entries(),
            hits_dropped: analysis.hit_log.dropped(),
            skipped_sources: analysis.corpus.skipped_sources(),
        }
    }
}

/// Pretty-printed JSON document for `analysis`.
pub fn render(analysis: &Analysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report::new(analysis))
}
