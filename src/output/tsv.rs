// Machine-readable single-record output.
//
// Column order is a compatibility contract with downstream scripts:
//
//   raw_hits personality_hits residual_hits anomalous_hits total_tokens
//   z_raw z_residual z_anomalous
//
// `residual_hits` counts every hit without personality context (Residual and
// Anomalous labels together), matching the density behind `z_residual`, so
// `personality_hits + residual_hits == raw_hits`. All z-scores are against
// the primary baseline, two decimals.

use crate::pipeline::Analysis;

/// Column names, in output order.
pub const COLUMNS: [&str; 8] = [
    "raw_hits",
    "personality_hits",
    "residual_hits",
    "anomalous_hits",
    "total_tokens",
    "z_raw",
    "z_residual",
    "z_anomalous",
];

/// The header line, for callers that want one.
pub fn header() -> String {
    COLUMNS.join("\t")
}

/// Format the record for `analysis` (no trailing newline).
pub fn record(analysis: &Analysis) -> String {
    let totals = &analysis.summary.totals;
    let primary = analysis.primary();
    format!(
        "{}\t{}\t{}\t{}\t{}\t{:.2}\t{:.2}\t{:.2}",
        totals.cluster_hits,
        totals.labels.personality,
        totals.labels.unexplained(),
        totals.labels.anomalous,
        totals.tokens,
        primary.raw.z,
        primary.residual.z,
        primary.anomalous.z,
    )
}
