// Section and corpus roll-ups.
//
// One pass over the token stream adds every token to its owning section and
// to the corpus totals; every hit lands in exactly one section and exactly
// one label bucket, so the label counts always sum to the hit count.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::classifier::{Hit, Label};
use crate::corpus::Corpus;

/// Hit counts per classification label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    pub personality: usize,
    pub anomalous: usize,
    pub residual: usize,
}

impl LabelCounts {
    pub fn add(&mut self, label: Label) {
        match label {
            Label::Personality => self.personality += 1,
            Label::Anomalous => self.anomalous += 1,
            Label::Residual => self.residual += 1,
        }
    }

    pub fn get(&self, label: Label) -> usize {
        match label {
            Label::Personality => self.personality,
            Label::Anomalous => self.anomalous,
            Label::Residual => self.residual,
        }
    }

    pub fn total(&self) -> usize {
        self.personality + self.anomalous + self.residual
    }

    /// Hits with no stylistic explanation (Residual + Anomalous).
    pub fn unexplained(&self) -> usize {
        self.anomalous + self.residual
    }
}

/// Attention marker for a section in the breakdown table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionFlag {
    /// Unexplained hits in a section that also carries technical markers
    TechnicalResidue,
    /// Unexplained hits elsewhere
    Residue,
    None,
}

/// Counts for one section.
#[derive(Debug, Clone, Serialize)]
pub struct SectionStats {
    pub id: usize,
    /// First token index
    pub start: usize,
    /// One past the last token index
    pub end: usize,
    pub tokens: usize,
    pub cluster_hits: usize,
    pub personality_markers: usize,
    pub technical_markers: usize,
    pub labels: LabelCounts,
}

impl SectionStats {
    /// Cluster hits per token in this section.
    pub fn density(&self) -> f64 {
        if self.tokens == 0 {
            return 0.0;
        }
        self.cluster_hits as f64 / self.tokens as f64
    }

    pub fn flag(&self) -> SectionFlag {
        if self.labels.unexplained() == 0 {
            SectionFlag::None
        } else if self.technical_markers > 0 {
            SectionFlag::TechnicalResidue
        } else {
            SectionFlag::Residue
        }
    }
}

/// Corpus-wide counts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Totals {
    pub tokens: usize,
    /// Distinct word types
    pub unique_words: usize,
    pub cluster_hits: usize,
    pub personality_markers: usize,
    pub technical_markers: usize,
    pub labels: LabelCounts,
}

impl Totals {
    /// `count` as a proportion of all tokens.
    pub fn proportion(&self, count: usize) -> f64 {
        if self.tokens == 0 {
            return 0.0;
        }
        count as f64 / self.tokens as f64
    }

    /// Share of cluster hits with the given count, 0.0 when there are none.
    pub fn share_of_hits(&self, count: usize) -> f64 {
        if self.cluster_hits == 0 {
            return 0.0;
        }
        count as f64 / self.cluster_hits as f64
    }
}

/// Occurrence count of one cluster term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// Everything the aggregation pass produces.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub totals: Totals,
    pub sections: Vec<SectionStats>,
    /// Cluster terms by count descending, ties broken alphabetically
    pub terms: Vec<TermCount>,
}

/// Roll tokens and hits up into sections and corpus totals.
///
/// `hits` must be in corpus order, as produced by `classifier::classify`.
pub fn aggregate(corpus: &Corpus, hits: &[Hit]) -> Summary {
    let mut sections: Vec<SectionStats> = corpus
        .sections()
        .iter()
        .map(|span| SectionStats {
            id: span.id,
            start: span.start,
            end: span.end,
            tokens: span.len(),
            cluster_hits: 0,
            personality_markers: 0,
            technical_markers: 0,
            labels: LabelCounts::default(),
        })
        .collect();

    let mut totals = Totals::default();
    let mut frequencies: HashMap<&str, usize> = HashMap::new();
    let mut vocabulary: HashSet<&str> = HashSet::new();
    let mut pending = hits.iter().peekable();

    for token in corpus.tokens() {
        let section = &mut sections[token.section];
        totals.tokens += 1;
        vocabulary.insert(token.word.as_str());

        if token.is_personality {
            section.personality_markers += 1;
            totals.personality_markers += 1;
        }
        if token.is_technical {
            section.technical_markers += 1;
            totals.technical_markers += 1;
        }

        if let Some(hit) = pending.next_if(|h| h.token_index == token.index) {
            section.cluster_hits += 1;
            section.labels.add(hit.label);
            totals.cluster_hits += 1;
            totals.labels.add(hit.label);
            *frequencies.entry(token.word.as_str()).or_insert(0) += 1;
        }
    }
    totals.unique_words = vocabulary.len();

    let mut terms: Vec<TermCount> = frequencies
        .into_iter()
        .map(|(term, count)| TermCount {
            term: term.to_string(),
            count,
        })
        .collect();
    terms.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));

    Summary {
        totals,
        sections,
        terms,
    }
}
