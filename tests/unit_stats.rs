// Unit tests for the statistics engine.
//
// Tests isolated pure functions: z_test reference values and degenerate
// baselines, the one-tailed p-value, chi-squared, Cohen's h bands, and
// BaselineReport density selection.

use residue::analysis::aggregate::{LabelCounts, Totals};
use residue::stats::{
    chi_squared, cohens_h, norm_cdf, p_value, z_test, Baseline, BaselineReport, EffectSize,
    ProportionTest, Significance,
};

// ============================================================
// z-test and p-value — reference scenarios
// ============================================================

#[test]
fn zero_hits_small_corpus_not_significant() {
    // p0 = 0.01, 141 tokens, no hits
    let z = z_test(0, 141, 0.01);
    assert!((z - (-1.19)).abs() < 0.01, "Expected z ≈ -1.19, got {z}");
    let p = p_value(z);
    assert!((p - 0.883).abs() < 0.001, "Expected p ≈ 0.883, got {p}");
    assert_eq!(Significance::from_p(p), Significance::NotSignificant);
}

#[test]
fn density_equal_to_baseline_gives_zero_z() {
    let z = z_test(30, 1000, 0.03);
    assert!(z.abs() < 1e-9);
    assert!((p_value(z) - 0.5).abs() < 1e-6);
}

#[test]
fn excess_density_is_strongly_significant() {
    // 10% observed vs 3% expected over 1000 tokens
    let z = z_test(100, 1000, 0.03);
    assert!(z > 12.0, "Expected large positive z, got {z}");
    assert_eq!(Significance::from_p(p_value(z)), Significance::Strong);
}

#[test]
fn p_value_is_one_tailed() {
    // A deficit is never significant for an excess test
    let z = z_test(0, 10_000, 0.05);
    assert!(z < -20.0);
    assert!(p_value(z) > 0.999);
}

#[test]
fn degenerate_baselines_return_zero() {
    assert_eq!(z_test(10, 100, 0.0), 0.0);
    assert_eq!(z_test(10, 100, 1.0), 0.0);
    assert_eq!(z_test(10, 100, 1e-40), 0.0);
    assert_eq!(chi_squared(10, 100, 0.0), 0.0);
    assert_eq!(chi_squared(10, 100, 1.0), 0.0);
}

#[test]
fn near_zero_baseline_agrees_with_report_flag() {
    let baseline = Baseline::primary(1e-20).unwrap();
    let test = ProportionTest::compute(10, 100, baseline.proportion);
    assert!(baseline.is_degenerate());
    assert_eq!(test.degenerate, baseline.is_degenerate());
    assert_eq!(test.z, 0.0);
    assert_eq!(test.chi_squared, 0.0);
    assert!(test.ratio.is_none());
    assert_eq!(test.significance, Significance::NotSignificant);
}

#[test]
fn norm_cdf_monotonic() {
    let mut prev = 0.0;
    for i in -80..=80 {
        let x = i as f64 / 10.0;
        let v = norm_cdf(x);
        assert!(v >= prev, "norm_cdf not monotonic at {x}");
        prev = v;
    }
}

// ============================================================
// Chi-squared and Cohen's h
// ============================================================

#[test]
fn chi_squared_hand_computed() {
    // 20 hits of 100 at p0 = 0.1: expected 10 / 90
    // (20-10)^2/10 + (80-90)^2/90 = 10 + 1.111...
    let chi2 = chi_squared(20, 100, 0.1);
    assert!((chi2 - 11.111).abs() < 0.001, "got {chi2}");
}

#[test]
fn cohens_h_is_symmetric_and_zero_on_equal() {
    assert!(cohens_h(0.2, 0.2).abs() < 1e-12);
    assert!((cohens_h(0.1, 0.3) - cohens_h(0.3, 0.1)).abs() < 1e-12);
}

#[test]
fn cohens_h_known_value() {
    // 2·asin(√0.5) − 2·asin(√0.25) = π/2 − π/3 = π/6
    let h = cohens_h(0.5, 0.25);
    assert!((h - std::f64::consts::PI / 6.0).abs() < 1e-9);
    assert_eq!(EffectSize::from_h(h), EffectSize::Medium);
}

#[test]
fn proportion_test_fields_consistent() {
    let t = ProportionTest::compute(45, 900, 0.03);
    assert!((t.density - 0.05).abs() < 1e-12);
    assert!((t.p_value - p_value(t.z)).abs() < 1e-12);
    assert!((t.chi_squared - t.z * t.z).abs() < 1e-6);
    assert!(!t.degenerate);
    assert_eq!(t.significance, Significance::from_p(t.p_value));
}

// ============================================================
// BaselineReport — which counts drive which row
// ============================================================

#[test]
fn baseline_report_uses_raw_residual_and_anomalous_counts() {
    let totals = Totals {
        tokens: 1000,
        unique_words: 400,
        cluster_hits: 50,
        personality_markers: 12,
        technical_markers: 30,
        labels: LabelCounts {
            personality: 20,
            anomalous: 10,
            residual: 20,
        },
    };
    let report = BaselineReport::compute(&Baseline::primary(0.03).unwrap(), &totals);
    assert_eq!(report.raw.hits, 50);
    // residual row covers everything not explained by personality
    assert_eq!(report.residual.hits, 30);
    assert_eq!(report.anomalous.hits, 10);
    assert!(report.raw.z > report.residual.z);
    assert!(report.residual.z > report.anomalous.z);
}
