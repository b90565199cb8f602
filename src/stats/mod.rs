// Statistics engine — baselines and the proportion tests run against them.

pub mod proportion;

use std::str::FromStr;

use serde::Serialize;

use crate::analysis::aggregate::Totals;
use crate::error::AnalysisError;
pub use proportion::{
    chi_squared, chi_squared_p, cohens_h, is_degenerate, is_degenerate_proportion, norm_cdf,
    p_value, z_test, EffectSize, ProportionTest, Significance,
};

/// Primary baseline density when none is configured.
pub const DEFAULT_BASELINE: f64 = 0.03;
pub const PRIMARY_LABEL: &str = "primary";

/// Reference densities of void-cluster vocabulary in song lyrics by genre.
const GENRE_PRESETS: &[(&str, f64)] = &[
    ("general_rock", 0.02),
    ("general_prog", 0.03),
    ("dark_prog", 0.05),
    ("metal", 0.06),
    ("doom_metal", 0.08),
    ("dark_ambient", 0.10),
];

/// A labelled null-hypothesis density.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Baseline {
    pub label: String,
    pub proportion: f64,
}

impl Baseline {
    /// Validate and build a baseline. The proportion must lie in [0, 1].
    pub fn new(label: impl Into<String>, proportion: f64) -> Result<Self, AnalysisError> {
        let label = label.into();
        if !(0.0..=1.0).contains(&proportion) {
            return Err(AnalysisError::BaselineOutOfRange {
                label,
                value: proportion,
            });
        }
        Ok(Self { label, proportion })
    }

    /// The default primary baseline.
    pub fn primary(proportion: f64) -> Result<Self, AnalysisError> {
        Self::new(PRIMARY_LABEL, proportion)
    }

    /// Whether this proportion sits at 0 or 1, where the z-test has no
    /// spread and reports a neutral z of 0.
    pub fn is_degenerate(&self) -> bool {
        proportion::is_degenerate_proportion(self.proportion)
    }

    /// The built-in genre reference baselines.
    pub fn genre_presets() -> Vec<Baseline> {
        GENRE_PRESETS
            .iter()
            .map(|(label, proportion)| Baseline {
                label: (*label).to_string(),
                proportion: *proportion,
            })
            .collect()
    }
}

impl FromStr for Baseline {
    type Err = AnalysisError;

    /// Parse `LABEL:PROPORTION`, e.g. `rock:0.02`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || AnalysisError::MalformedBaseline {
            input: input.to_string(),
        };
        let (label, value) = input.split_once(':').ok_or_else(malformed)?;
        let label = label.trim();
        if label.is_empty() {
            return Err(malformed());
        }
        let proportion: f64 = value.trim().parse().map_err(|_| malformed())?;
        if proportion.is_nan() {
            return Err(malformed());
        }
        Baseline::new(label, proportion)
    }
}

/// Raw, residual and anomalous density tests against one baseline.
#[derive(Debug, Clone, Serialize)]
pub struct BaselineReport {
    pub baseline: Baseline,
    /// All cluster hits
    pub raw: ProportionTest,
    /// Residual + Anomalous hits (everything not explained by personality)
    pub residual: ProportionTest,
    /// Anomalous hits only
    pub anomalous: ProportionTest,
}

impl BaselineReport {
    pub fn compute(baseline: &Baseline, totals: &Totals) -> Self {
        let p0 = baseline.proportion;
        let n = totals.tokens;
        Self {
            baseline: baseline.clone(),
            raw: ProportionTest::compute(totals.cluster_hits, n, p0),
            residual: ProportionTest::compute(totals.labels.unexplained(), n, p0),
            anomalous: ProportionTest::compute(totals.labels.anomalous, n, p0),
        }
    }
}

/// Run every test against every baseline, in baseline order.
pub fn test_all(baselines: &[Baseline], totals: &Totals) -> Vec<BaselineReport> {
    baselines
        .iter()
        .map(|b| BaselineReport::compute(b, totals))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labelled_baseline() {
        let b: Baseline = "rock:0.02".parse().unwrap();
        assert_eq!(b.label, "rock");
        assert!((b.proportion - 0.02).abs() < 1e-12);

        let b: Baseline = " dark prog : 0.05 ".parse().unwrap();
        assert_eq!(b.label, "dark prog");
    }

    #[test]
    fn test_missing_separator_is_rejected() {
        let err = "rock0.02".parse::<Baseline>().unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedBaseline { .. }));
    }

    #[test]
    fn test_bad_number_and_empty_label_rejected() {
        assert!(matches!(
            "rock:abc".parse::<Baseline>(),
            Err(AnalysisError::MalformedBaseline { .. })
        ));
        assert!(matches!(
            ":0.02".parse::<Baseline>(),
            Err(AnalysisError::MalformedBaseline { .. })
        ));
        assert!(matches!(
            "rock:NaN".parse::<Baseline>(),
            Err(AnalysisError::MalformedBaseline { .. })
        ));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(
            "rock:1.5".parse::<Baseline>(),
            Err(AnalysisError::BaselineOutOfRange { .. })
        ));
        assert!(matches!(
            Baseline::primary(-0.1),
            Err(AnalysisError::BaselineOutOfRange { .. })
        ));
    }

    #[test]
    fn test_boundary_values_are_degenerate_but_allowed() {
        let zero = Baseline::primary(0.0).unwrap();
        let one = Baseline::primary(1.0).unwrap();
        assert!(zero.is_degenerate());
        assert!(one.is_degenerate());
        assert!(!Baseline::primary(0.03).unwrap().is_degenerate());
    }

    #[test]
    fn test_genre_presets_valid() {
        let presets = Baseline::genre_presets();
        assert_eq!(presets.len(), 6);
        assert!(presets
            .iter()
            .all(|b| b.proportion > 0.0 && b.proportion < 1.0));
    }
}
