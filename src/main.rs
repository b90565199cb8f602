use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use residue::config::Config;
use residue::corpus::Source;
use residue::output::{self, OutputMode};
use residue::stats::Baseline;

/// Residue: measure a semantic word cluster in text and separate the
/// occurrences a known stylistic register explains from the ones it doesn't.
///
/// Every cluster-term hit is checked for personality markers (humor, sarcasm,
/// casual register, memes) and technical markers within ±N tokens. Hits near
/// personality markers are explained; hits in technical context without them
/// are anomalous; the rest are residual. Reads standard input when no files
/// are given.
#[derive(Parser, Debug)]
#[command(name = "residue", version, about)]
struct Cli {
    /// Co-occurrence window radius in tokens (clamped to 1-100) [default: 15]
    #[arg(short = 'w', long, allow_negative_numbers = true)]
    window: Option<i64>,

    /// Cluster word list, one word per line (# comments allowed)
    #[arg(short = 'v', long, value_name = "FILE")]
    cluster_words: Option<PathBuf>,

    /// Personality-marker word list
    #[arg(short = 'p', long, value_name = "FILE")]
    personality_words: Option<PathBuf>,

    /// Technical-marker word list
    #[arg(short = 't', long, value_name = "FILE")]
    technical_words: Option<PathBuf>,

    /// Primary baseline proportion [default: 0.03]
    #[arg(short = 'b', long, value_name = "FLOAT")]
    baseline: Option<f64>,

    /// Additional named baseline, e.g. -B rock:0.02 (repeatable)
    #[arg(short = 'B', long = "add-baseline", value_name = "LABEL:FLOAT")]
    add_baseline: Vec<String>,

    /// Also test against the genre reference baselines
    #[arg(long)]
    genre_baselines: bool,

    /// Print one TSV record: raw pers resid anom total z_raw z_resid z_anom
    #[arg(short = 'q', long, conflicts_with = "json")]
    quiet: bool,

    /// Print the TSV column names before the record
    #[arg(long, requires = "quiet")]
    header: bool,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// List individual hits with context (the JSON report already has them)
    #[arg(short = 'd', long, conflicts_with_all = ["json", "quiet"])]
    debug: bool,

    /// Show the per-section breakdown
    #[arg(short = 's', long, conflicts_with_all = ["json", "quiet"])]
    sections: bool,

    /// Input files ("-" for standard input)
    files: Vec<String>,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Tsv
        } else if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }

    /// Apply command-line overrides on top of the environment config.
    fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(window) = self.window {
            config.set_window(window);
        }
        if let Some(baseline) = self.baseline {
            config.baseline = baseline;
        }
        for raw in &self.add_baseline {
            let baseline: Baseline = raw
                .parse()
                .with_context(|| format!("invalid --add-baseline value '{raw}'"))?;
            config.extra_baselines.push(baseline);
        }
        config.genre_baselines |= self.genre_baselines;
        if self.cluster_words.is_some() {
            config.cluster_words = self.cluster_words.clone();
        }
        if self.personality_words.is_some() {
            config.personality_words = self.personality_words.clone();
        }
        if self.technical_words.is_some() {
            config.technical_words = self.technical_words.clone();
        }
        Ok(())
    }

    fn sources(&self) -> Vec<Source> {
        if self.files.is_empty() {
            vec![Source::Stdin]
        } else {
            self.files.iter().map(|f| Source::from_arg(f)).collect()
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Diagnostics go to stderr so stdout stays a clean TSV/JSON stream
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("residue=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load().context("failed to load configuration from environment")?;
    cli.apply(&mut config)?;
    debug!(?config, "Configuration resolved");

    let lexicons = config.lexicons()?;
    let options = config.analysis_options()?;
    let sources = cli.sources();

    info!(
        sources = sources.len(),
        window = options.window,
        baselines = options.baselines.len(),
        "Starting analysis"
    );
    let analysis = residue::pipeline::run(&sources, &lexicons, &options)?;

    match cli.output_mode() {
        OutputMode::Tsv => {
            if cli.header {
                println!("{}", output::tsv::header());
            }
            println!("{}", output::tsv::record(&analysis));
        }
        OutputMode::Json => println!("{}", output::json::render(&analysis)?),
        OutputMode::Human => {
            output::terminal::display_report(&analysis);
            if cli.debug {
                output::terminal::display_hit_details(&analysis);
            }
            if cli.sections {
                output::terminal::display_sections(&analysis);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_header_requires_quiet() {
        let err = Cli::try_parse_from(["residue", "--header"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let cli = Cli::try_parse_from(["residue", "-q", "--header", "lyrics.txt"]).unwrap();
        assert!(cli.header);
        assert_eq!(cli.output_mode(), OutputMode::Tsv);
    }

    #[test]
    fn test_listing_flags_conflict_with_machine_output() {
        for args in [
            ["residue", "--json", "-d"],
            ["residue", "--json", "-s"],
            ["residue", "-q", "-d"],
        ] {
            let err = Cli::try_parse_from(args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentConflict, "{args:?}");
        }
    }

    #[test]
    fn test_human_mode_accepts_listings() {
        let cli = Cli::try_parse_from(["residue", "-d", "-s", "-w", "-3"]).unwrap();
        assert_eq!(cli.output_mode(), OutputMode::Human);
        assert_eq!(cli.window, Some(-3));
        assert_eq!(cli.sources(), vec![Source::Stdin]);
    }
}
