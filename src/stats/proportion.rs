// Proportion tests against a baseline density.
//
// All tests are one-sample: an observed count of hits out of `total` tokens
// compared with the proportion p0 expected under the null hypothesis. The
// question asked is always "is there an excess over baseline?", so the
// z-test p-value is one-tailed.

use serde::Serialize;

/// Standard errors and expected cell counts below this are treated as zero.
const NEGLIGIBLE: f64 = 1e-15;

/// Standard normal CDF, Abramowitz & Stegun 26.2.17 (|error| < 7.5e-8).
pub fn norm_cdf(x: f64) -> f64 {
    if x < -8.0 {
        return 0.0;
    }
    if x > 8.0 {
        return 1.0;
    }
    let ax = x.abs();
    let t = 1.0 / (1.0 + 0.231_641_9 * ax);
    let poly = t
        * (0.319_381_530
            + t * (-0.356_563_782 + t * (1.781_477_937 + t * (-1.821_255_978 + t * 1.330_274_429))));
    let tail = poly * (-0.5 * ax * ax).exp() * 0.398_942_280_401_432_7;
    if x < 0.0 {
        tail
    } else {
        1.0 - tail
    }
}

/// One-sample z statistic for a proportion.
///
/// Returns 0.0 whenever `is_degenerate` holds. Callers that need to tell
/// this apart from a genuine zero check `is_degenerate` themselves.
pub fn z_test(hits: usize, total: usize, p0: f64) -> f64 {
    if is_degenerate(total, p0) {
        return 0.0;
    }
    let n = total as f64;
    let p_hat = hits as f64 / n;
    let se = (p0 * (1.0 - p0) / n).sqrt();
    (p_hat - p0) / se
}

/// True when `p0` is within 1e-15 of 0 or 1 (or NaN).
pub fn is_degenerate_proportion(p0: f64) -> bool {
    p0.is_nan() || p0 <= NEGLIGIBLE || p0 >= 1.0 - NEGLIGIBLE
}

/// True when the z-test has no usable spread: no tokens, a degenerate
/// baseline, or a standard error below 1e-15.
pub fn is_degenerate(total: usize, p0: f64) -> bool {
    if total == 0 || is_degenerate_proportion(p0) {
        return true;
    }
    let se = (p0 * (1.0 - p0) / total as f64).sqrt();
    se.is_nan() || se < NEGLIGIBLE
}

/// One-tailed p-value for an excess over baseline: `1 − Φ(z)`.
pub fn p_value(z: f64) -> f64 {
    1.0 - norm_cdf(z)
}

/// Chi-squared goodness of fit with one degree of freedom over the
/// hit / non-hit cells. Returns 0.0 for a degenerate baseline or if either
/// expected cell is negligible.
pub fn chi_squared(hits: usize, total: usize, p0: f64) -> f64 {
    if is_degenerate_proportion(p0) {
        return 0.0;
    }
    let n = total as f64;
    let e_hit = n * p0;
    let e_non = n * (1.0 - p0);
    if e_hit < NEGLIGIBLE || e_non < NEGLIGIBLE {
        return 0.0;
    }
    let o_hit = hits as f64;
    let o_non = n - o_hit;
    (o_hit - e_hit).powi(2) / e_hit + (o_non - e_non).powi(2) / e_non
}

/// Upper-tail p-value of a df=1 chi-squared statistic.
///
/// With one degree of freedom χ² is the square of a standard normal, so the
/// tail is `2·(1 − Φ(√χ²))`.
pub fn chi_squared_p(chi2: f64) -> f64 {
    if chi2 <= 0.0 {
        return 1.0;
    }
    (2.0 * (1.0 - norm_cdf(chi2.sqrt()))).clamp(0.0, 1.0)
}

/// Cohen's h between two proportions (absolute value).
pub fn cohens_h(p1: f64, p2: f64) -> f64 {
    let p1 = p1.clamp(0.0, 1.0);
    let p2 = p2.clamp(0.0, 1.0);
    (2.0 * p1.sqrt().asin() - 2.0 * p2.sqrt().asin()).abs()
}

/// Conventional effect-size bands for Cohen's h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectSize {
    Negligible,
    Small,
    Medium,
    Large,
}

impl EffectSize {
    /// 0.2 / 0.5 / 0.8 thresholds, inclusive at the lower edge.
    pub fn from_h(h: f64) -> Self {
        if h >= 0.8 {
            EffectSize::Large
        } else if h >= 0.5 {
            EffectSize::Medium
        } else if h >= 0.2 {
            EffectSize::Small
        } else {
            EffectSize::Negligible
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EffectSize::Negligible => "negligible",
            EffectSize::Small => "small",
            EffectSize::Medium => "medium",
            EffectSize::Large => "large",
        }
    }
}

/// Star rating for a p-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Significance {
    NotSignificant,
    /// p < 0.05
    Weak,
    /// p < 0.01
    Moderate,
    /// p < 0.001
    Strong,
}

impl Significance {
    pub fn from_p(p: f64) -> Self {
        if p < 0.001 {
            Significance::Strong
        } else if p < 0.01 {
            Significance::Moderate
        } else if p < 0.05 {
            Significance::Weak
        } else {
            Significance::NotSignificant
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Significance::Strong => "***",
            Significance::Moderate => "**",
            Significance::Weak => "*",
            Significance::NotSignificant => "",
        }
    }
}

/// Every statistic for one observed count against one baseline proportion.
#[derive(Debug, Clone, Serialize)]
pub struct ProportionTest {
    pub hits: usize,
    pub total: usize,
    pub baseline: f64,
    /// hits / total
    pub density: f64,
    pub z: f64,
    /// One-tailed, excess over baseline
    pub p_value: f64,
    pub chi_squared: f64,
    pub chi_squared_p: f64,
    pub cohens_h: f64,
    pub effect: EffectSize,
    pub significance: Significance,
    /// density / baseline; None for a degenerate baseline
    pub ratio: Option<f64>,
    /// The baseline collapses the z-test, so z was forced to 0
    pub degenerate: bool,
}

impl ProportionTest {
    pub fn compute(hits: usize, total: usize, p0: f64) -> Self {
        let density = if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        };
        let degenerate = is_degenerate(total, p0);
        let z = z_test(hits, total, p0);
        let p = p_value(z);
        let chi2 = chi_squared(hits, total, p0);
        let h = cohens_h(density, p0);
        Self {
            hits,
            total,
            baseline: p0,
            density,
            z,
            p_value: p,
            chi_squared: chi2,
            chi_squared_p: chi_squared_p(chi2),
            cohens_h: h,
            effect: EffectSize::from_h(h),
            significance: Significance::from_p(p),
            ratio: (!is_degenerate_proportion(p0)).then(|| density / p0),
            degenerate,
        }
    }
}
