// Colored terminal report.
//
// The main report is always shown in human mode; the hit listing and the
// section table are optional layers the CLI switches on with -d and -s.

use colored::Colorize;

use super::{percent, truncate_chars};
use crate::analysis::aggregate::SectionFlag;
use crate::analysis::classifier::Label;
use crate::pipeline::Analysis;
use crate::stats::{BaselineReport, ProportionTest};

/// Terms shown in the frequency table.
const TOP_TERMS: usize = 20;
/// Hits shown in the debug listing.
const DEBUG_HITS: usize = 100;
/// Tokens of context on each side of a hit in the debug listing.
const CONTEXT_RADIUS: usize = 5;
/// Sections shown in the breakdown table.
const MAX_SECTION_ROWS: usize = 200;

/// Print the full human-readable report.
pub fn display_report(analysis: &Analysis) {
    display_overview(analysis);
    display_breakdown(analysis);
    display_terms(analysis);
    display_tests(analysis);
    display_interpretation(analysis);
}

fn display_overview(analysis: &Analysis) {
    let totals = &analysis.summary.totals;
    title("Semantic Cluster Analysis");
    println!("  Total tokens:          {}", totals.tokens);
    println!("  Unique words:          {}", totals.unique_words);
    println!("  Sections:              {}", analysis.summary.sections.len());
    println!(
        "  Personality markers:   {} ({})",
        totals.personality_markers,
        percent(totals.proportion(totals.personality_markers), 1)
    );
    println!(
        "  Technical markers:     {} ({})",
        totals.technical_markers,
        percent(totals.proportion(totals.technical_markers), 1)
    );
    println!("  Co-occurrence window:  ±{} tokens", analysis.window);

    let skipped = analysis.corpus.skipped_sources();
    if !skipped.is_empty() {
        println!(
            "  {} {} unreadable source(s) skipped: {}",
            "Warning:".yellow(),
            skipped.len(),
            skipped.join(", ")
        );
    }
    println!();
}

fn display_breakdown(analysis: &Analysis) {
    let totals = &analysis.summary.totals;
    let labels = &totals.labels;

    println!(
        "  {:<28} {:>7}  {:>8}  {}",
        "Category".dimmed(),
        "Count".dimmed(),
        "Density".dimmed(),
        "Context".dimmed(),
    );
    rule(66);
    println!(
        "  {:<28} {:>7}  {:>8}",
        "Total cluster hits",
        totals.cluster_hits,
        percent(totals.proportion(totals.cluster_hits), 2),
    );
    for (label, name, context) in [
        (Label::Personality, "  Personality [P]", "explained by register"),
        (Label::Residual, "  Residual [R]", "neutral context"),
        (Label::Anomalous, "  Anomalous [A]", "technical, no personality"),
    ] {
        let count = labels.get(label);
        println!(
            "  {:<28} {:>7}  {:>8}  {}",
            name,
            count,
            percent(totals.proportion(count), 2),
            colorize_label(label, context),
        );
    }
    println!();

    println!(
        "  Personality attribution: {:.0}% of cluster hits explained by personality context",
        100.0 * totals.share_of_hits(labels.personality)
    );
    println!(
        "  Unexplained signal:      {:.0}% of cluster hits",
        100.0 * totals.share_of_hits(labels.unexplained())
    );
    println!(
        "  Anomalous signal:        {:.0}% of cluster hits in technical context",
        100.0 * totals.share_of_hits(labels.anomalous)
    );
}

fn display_terms(analysis: &Analysis) {
    let terms = &analysis.summary.terms;
    let total = analysis.summary.totals.tokens;

    title(&format!(
        "Top Cluster Terms ({} of {} in word list used)",
        terms.len(),
        analysis.lexicons.cluster
    ));
    if terms.is_empty() {
        println!("  (none)");
        return;
    }
    println!(
        "  {:<24} {:>6}  {:>7}",
        "Term".dimmed(),
        "Count".dimmed(),
        "Freq".dimmed()
    );
    rule(41);
    for term in terms.iter().take(TOP_TERMS) {
        println!(
            "  {:<24} {:>6}  {:>7}",
            truncate_chars(&term.term, 24),
            term.count,
            percent(term.count as f64 / total as f64, 2),
        );
    }
    if terms.len() > TOP_TERMS {
        more(&format!("... +{} more terms", terms.len() - TOP_TERMS));
    }
}

fn display_tests(analysis: &Analysis) {
    title("Statistical Tests");
    println!(
        "  {:<16} {:>8}  {:<10} {:>8}  {:>12}  {:>8}  {:>9}  {:>8}  {:>6}",
        "Baseline".dimmed(),
        "Expected".dimmed(),
        "Density".dimmed(),
        "Observed".dimmed(),
        "Z-score".dimmed(),
        "p-value".dimmed(),
        "Chi-sq".dimmed(),
        "Cohen h".dimmed(),
        "Ratio".dimmed(),
    );
    rule(100);

    for report in &analysis.tests {
        display_test_rows(report);
    }

    if analysis.tests.iter().any(|r| r.raw.degenerate) {
        println!(
            "\n  {}",
            "Baselines at 0 or 1 have no spread: z is reported as 0.".dimmed()
        );
    }
}

fn display_test_rows(report: &BaselineReport) {
    let label = truncate_chars(&report.baseline.label, 16);
    let expected = percent(report.baseline.proportion, 1);
    for (i, (kind, test)) in [
        ("raw", &report.raw),
        ("residual", &report.residual),
        ("anomalous", &report.anomalous),
    ]
    .into_iter()
    .enumerate()
    {
        let (name, exp) = if i == 0 {
            (label.as_str(), expected.as_str())
        } else {
            ("", "")
        };
        println!(
            "  {:<16} {:>8}  {:<10} {:>8}  {:>12}  {:>8.4}  {:>9.2}  {:>8.3}  {:>6}",
            name,
            exp,
            kind,
            percent(test.density, 2),
            format_z(test),
            test.p_value,
            test.chi_squared,
            test.cohens_h,
            test.ratio
                .map(|r| format!("{r:.1}x"))
                .unwrap_or_else(|| "-".to_string()),
        );
    }
}

fn format_z(test: &ProportionTest) -> String {
    if test.degenerate {
        return "n/a".to_string();
    }
    let text = format!("{:+.2} {:<3}", test.z, test.significance.marker());
    if test.significance.marker().is_empty() {
        text
    } else {
        text.red().bold().to_string()
    }
}

fn display_interpretation(analysis: &Analysis) {
    let totals = &analysis.summary.totals;
    let primary = analysis.primary();
    let interpretation = &analysis.interpretation;

    title("Interpretation");
    for line in interpretation.verdict.describe() {
        if interpretation.verdict.is_alert() {
            println!("  {} {}", "!".bright_red(), line);
        } else {
            println!("  {line}");
        }
    }
    println!(
        "  Residual vs {}: z={:+.2}, p={:.4}, h={:.2} ({} effect)",
        primary.baseline.label,
        primary.residual.z,
        primary.residual.p_value,
        primary.residual.cohens_h,
        primary.residual.effect.as_str(),
    );

    if interpretation.tech_anomaly {
        println!();
        println!(
            "  {} {} cluster hits in technical passages with no personality markers nearby.",
            "!! TECH-CONTEXT ANOMALY:".red().bold(),
            totals.labels.anomalous
        );
        println!("  These are the highest-priority items for manual review.");
    }

    let per = totals.tokens as f64 / totals.cluster_hits.max(1) as f64;
    println!(
        "\n  1 in every {:.1} words belongs to this semantic cluster.",
        per
    );
    println!();
}

/// Print each logged hit with its surrounding tokens and window counts.
///
/// In the context line the hit is [bracketed], personality markers are
/// (parenthesized) and technical markers are {braced}.
pub fn display_hit_details(analysis: &Analysis) {
    let log = &analysis.hit_log;
    let tokens = analysis.corpus.tokens();

    title(&format!("Cluster Hit Details ({} hits)", analysis.hits.len()));
    if log.entries().is_empty() {
        println!("  (no hits)");
        return;
    }

    for hit in log.entries().iter().take(DEBUG_HITS) {
        let token = &tokens[hit.token_index];
        println!(
            "  [{}] \"{}\" @ token {} (byte {}, source {}, section {})",
            colorize_label(hit.label, &hit.label.code().to_string()),
            token.word,
            token.index,
            token.offset,
            token.source,
            token.section + 1,
        );

        let lo = hit.token_index.saturating_sub(CONTEXT_RADIUS);
        let hi = (hit.token_index + CONTEXT_RADIUS).min(tokens.len() - 1);
        let context: Vec<String> = tokens[lo..=hi]
            .iter()
            .map(|t| {
                if t.index == hit.token_index {
                    format!("[{}]", t.word).bold().to_string()
                } else if t.is_personality {
                    format!("({})", t.word).green().to_string()
                } else if t.is_technical {
                    format!("{{{}}}", t.word).cyan().to_string()
                } else {
                    t.word.clone()
                }
            })
            .collect();
        println!("      context: {}", context.join(" "));

        if hit.personality_count > 0 {
            println!(
                "      personality markers in window: {}",
                hit.personality_count
            );
        }
        if hit.technical_count > 0 {
            println!("      technical markers in window: {}", hit.technical_count);
        }
        println!();
    }

    if log.entries().len() > DEBUG_HITS {
        more(&format!(
            "... {} more logged hits (showing first {DEBUG_HITS})",
            log.entries().len() - DEBUG_HITS
        ));
    }
    if log.is_truncated() {
        println!(
            "  {} hit log holds {} entries; {} later hits were classified but not logged",
            "Note:".yellow(),
            log.capacity(),
            log.dropped()
        );
    }
}

/// Print the per-section breakdown table.
pub fn display_sections(analysis: &Analysis) {
    let sections = &analysis.summary.sections;

    title(&format!("Per-Section Breakdown ({} sections)", sections.len()));
    println!(
        "  {:>5}  {:>7}  {:>5}  {:>5}  {:>5}  {:>5}  {:>5}  {:>7}",
        "#".dimmed(),
        "Tokens".dimmed(),
        "Hits".dimmed(),
        "Pers".dimmed(),
        "Resid".dimmed(),
        "Anom".dimmed(),
        "Tech".dimmed(),
        "Hit%".dimmed(),
    );
    rule(64);

    for section in sections.iter().take(MAX_SECTION_ROWS) {
        let flag = match section.flag() {
            SectionFlag::TechnicalResidue => "!".red().bold(),
            SectionFlag::Residue => "?".yellow(),
            SectionFlag::None => " ".normal(),
        };
        println!(
            "  {:>5}  {:>7}  {:>5}  {:>5}  {:>5}  {:>5}  {:>5}  {:>7}  {}",
            section.id + 1,
            section.tokens,
            section.cluster_hits,
            section.labels.personality,
            section.labels.residual,
            section.labels.anomalous,
            section.technical_markers,
            percent(section.density(), 1),
            flag,
        );
    }
    if sections.len() > MAX_SECTION_ROWS {
        more(&format!(
            "... {} more sections (showing first {MAX_SECTION_ROWS})",
            sections.len() - MAX_SECTION_ROWS
        ));
    }
    println!(
        "\n  Legend: {} unexplained hits in a technical section, {} unexplained hits",
        "!".red().bold(),
        "?".yellow()
    );
}

fn title(text: &str) {
    println!("\n{}\n", format!("=== {text} ===").bold());
}

fn rule(width: usize) {
    println!("  {}", "-".repeat(width).dimmed());
}

fn more(text: &str) {
    println!("  {}", text.dimmed());
}

/// Colorize text by hit label.
fn colorize_label(label: Label, text: &str) -> colored::ColoredString {
    match label {
        Label::Personality => text.green(),
        Label::Residual => text.yellow(),
        Label::Anomalous => text.red().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicons;
    use crate::pipeline::{run_text, AnalysisOptions};
    use crate::stats::Baseline;

    #[test]
    fn test_all_views_render_with_edge_hits_and_degenerate_baseline() {
        let options = AnalysisOptions {
            baselines: vec![
                Baseline::primary(0.03).unwrap(),
                Baseline::new("flat", 1e-20).unwrap(),
            ],
            hit_log_capacity: 1,
            ..AnalysisOptions::default()
        };
        // Hits on the first and last token exercise the context clipping
        let analysis = run_text("void kernel\n\nlol abyss", &Lexicons::default(), &options).unwrap();
        assert!(analysis.hit_log.is_truncated());
        display_report(&analysis);
        display_hit_details(&analysis);
        display_sections(&analysis);
    }

    #[test]
    fn test_clean_corpus_renders() {
        let analysis = run_text(
            "nothing here but tea",
            &Lexicons::default(),
            &AnalysisOptions::default(),
        )
        .unwrap();
        display_report(&analysis);
        display_hit_details(&analysis);
    }
}
