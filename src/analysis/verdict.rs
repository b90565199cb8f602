// Qualitative reading of the primary-baseline results.

use serde::Serialize;

use super::aggregate::Totals;
use crate::stats::{BaselineReport, EffectSize};

/// Overall interpretation of the residual (unexplained) density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// No cluster language at all
    Clean,
    /// Every hit sits next to a personality marker
    FullyExplained,
    /// Residual density not above baseline (p > 0.05)
    WithinBaseline,
    /// 0.001 < p <= 0.05
    Marginal,
    /// p <= 0.001 but the effect size is negligible
    Negligible,
    /// p <= 0.001 with at least a small effect
    Significant,
}

impl Verdict {
    pub fn assess(totals: &Totals, primary: &BaselineReport) -> Self {
        let residual = &primary.residual;
        if totals.cluster_hits == 0 {
            Verdict::Clean
        } else if totals.labels.unexplained() == 0 {
            Verdict::FullyExplained
        } else if residual.p_value > 0.05 {
            Verdict::WithinBaseline
        } else if residual.p_value > 0.001 {
            Verdict::Marginal
        } else if residual.effect == EffectSize::Negligible {
            Verdict::Negligible
        } else {
            Verdict::Significant
        }
    }

    pub fn describe(&self) -> &'static [&'static str] {
        match self {
            Verdict::Clean => &["No cluster language detected. Corpus is clean."],
            Verdict::FullyExplained => &[
                "All cluster language sits next to personality markers.",
                "No unexplained signal.",
            ],
            Verdict::WithinBaseline => &[
                "Residual cluster density is within baseline expectations.",
                "Personality context explains the cluster language seen.",
            ],
            Verdict::Marginal => &[
                "Marginally elevated residual cluster density.",
                "Some cluster language appears outside personality context.",
                "Inspect individual hits with --debug.",
            ],
            Verdict::Negligible => &[
                "Residual density is statistically above baseline,",
                "but the effect size is negligible.",
            ],
            Verdict::Significant => &[
                "SIGNIFICANTLY elevated residual cluster density.",
                "Cluster language appears in neutral or technical context at",
                "rates exceeding baseline even after personality control.",
                "This warrants detailed investigation.",
            ],
        }
    }

    /// Whether this verdict calls for attention.
    pub fn is_alert(&self) -> bool {
        matches!(self, Verdict::Marginal | Verdict::Significant)
    }
}

/// Verdict plus the technical-context notice.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Interpretation {
    pub verdict: Verdict,
    /// Anomalous hits are present and significantly above baseline (p < 0.05)
    pub tech_anomaly: bool,
}

impl Interpretation {
    pub fn assess(totals: &Totals, primary: &BaselineReport) -> Self {
        Self {
            verdict: Verdict::assess(totals, primary),
            tech_anomaly: totals.labels.anomalous > 0 && primary.anomalous.p_value < 0.05,
        }
    }
}
