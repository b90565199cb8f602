// Windowed co-occurrence classification of cluster-term hits.
//
// Every cluster-term token looks at the ±W tokens around it (clipped at the
// corpus edges, never wrapping) and is labelled in strict priority order:
//
//   1. any personality marker in the window  -> Personality
//   2. else any technical marker             -> Anomalous
//   3. else                                  -> Residual
//
// Personality context always wins, so one occurrence is never flagged both
// as explained and as anomalous.

use std::fmt;

use serde::Serialize;

use crate::corpus::Token;

pub const DEFAULT_WINDOW: usize = 15;
pub const MIN_WINDOW: usize = 1;
pub const MAX_WINDOW: usize = 100;

/// Default number of hits retained for the debug listing.
pub const DEFAULT_HIT_LOG_CAPACITY: usize = 8192;

/// Classification of one cluster-term occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Explained by a nearby stylistic marker
    Personality,
    /// Technical context with no stylistic explanation
    Anomalous,
    /// Neutral context
    Residual,
}

impl Label {
    /// Decide the label from window counts.
    pub fn from_counts(personality: usize, technical: usize) -> Self {
        if personality > 0 {
            Label::Personality
        } else if technical > 0 {
            Label::Anomalous
        } else {
            Label::Residual
        }
    }

    /// Single-letter code used in the debug listing.
    pub fn code(&self) -> char {
        match self {
            Label::Personality => 'P',
            Label::Anomalous => 'A',
            Label::Residual => 'R',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Personality => "Personality",
            Label::Anomalous => "Anomalous",
            Label::Residual => "Residual",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified cluster-term occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hit {
    pub token_index: usize,
    pub personality_count: usize,
    pub technical_count: usize,
    pub label: Label,
}

/// Clamp a requested window radius into the supported range.
pub fn clamp_window(radius: i64) -> usize {
    radius.clamp(MIN_WINDOW as i64, MAX_WINDOW as i64) as usize
}

/// Inclusive index bounds of the window around `index`.
pub fn window_bounds(index: usize, radius: usize, len: usize) -> (usize, usize) {
    let lo = index.saturating_sub(radius);
    let hi = (index + radius).min(len.saturating_sub(1));
    (lo, hi)
}

/// Classify a single token position. Returns None if it is not a cluster term.
pub fn classify_at(tokens: &[Token], index: usize, radius: usize) -> Option<Hit> {
    let token = tokens.get(index)?;
    if !token.is_cluster {
        return None;
    }

    let (lo, hi) = window_bounds(index, radius, tokens.len());
    let mut personality_count = 0;
    let mut technical_count = 0;
    for (j, neighbor) in tokens.iter().enumerate().take(hi + 1).skip(lo) {
        if j == index {
            continue;
        }
        if neighbor.is_personality {
            personality_count += 1;
        }
        if neighbor.is_technical {
            technical_count += 1;
        }
    }

    Some(Hit {
        token_index: index,
        personality_count,
        technical_count,
        label: Label::from_counts(personality_count, technical_count),
    })
}

/// Classify every cluster-term token, in corpus order.
pub fn classify(tokens: &[Token], radius: usize) -> Vec<Hit> {
    (0..tokens.len())
        .filter_map(|i| classify_at(tokens, i, radius))
        .collect()
}

/// Bounded record of hits kept for diagnostic output.
///
/// Retains the earliest `capacity` hits and counts how many were left out,
/// so renderers can say the listing is incomplete.
#[derive(Debug, Clone, Serialize)]
pub struct HitLog {
    entries: Vec<Hit>,
    dropped: usize,
    capacity: usize,
}

impl HitLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            dropped: 0,
            capacity,
        }
    }

    pub fn from_hits(hits: &[Hit], capacity: usize) -> Self {
        let mut log = Self::new(capacity);
        for hit in hits {
            log.record(*hit);
        }
        log
    }

    /// Store `hit` if there is room, otherwise count it as dropped.
    pub fn record(&mut self, hit: Hit) {
        if self.entries.len() < self.capacity {
            self.entries.push(hit);
        } else {
            self.dropped += 1;
        }
    }

    pub fn entries(&self) -> &[Hit] {
        &self.entries
    }

    /// Hits that did not fit in the log.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn is_truncated(&self) -> bool {
        self.dropped > 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
