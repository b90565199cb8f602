use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::warn;

use crate::analysis::classifier::{clamp_window, DEFAULT_HIT_LOG_CAPACITY, DEFAULT_WINDOW};
use crate::corpus::DEFAULT_MAX_TOKENS;
use crate::lexicon::Lexicons;
use crate::pipeline::AnalysisOptions;
use crate::stats::{Baseline, DEFAULT_BASELINE};

/// Run configuration.
///
/// Defaults come from environment variables (a .env file is loaded at
/// startup via dotenvy); command-line flags override them afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Co-occurrence window radius, already clamped to [1, 100]
    pub window: usize,
    /// Primary baseline proportion
    pub baseline: f64,
    /// Extra named baselines, tested after the primary one
    pub extra_baselines: Vec<Baseline>,
    /// Also test against the genre reference baselines
    pub genre_baselines: bool,
    /// Word list overrides (built-in lists when None)
    pub cluster_words: Option<PathBuf>,
    pub personality_words: Option<PathBuf>,
    pub technical_words: Option<PathBuf>,
    /// Token capacity of the corpus
    pub max_tokens: usize,
    /// Hits retained for the debug listing
    pub hit_log_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            baseline: DEFAULT_BASELINE,
            extra_baselines: Vec::new(),
            genre_baselines: false,
            cluster_words: None,
            personality_words: None,
            technical_words: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            hit_log_capacity: DEFAULT_HIT_LOG_CAPACITY,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional. A variable that is set but does not
    /// parse is an error rather than silently falling back to the default.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(window) = parse_var::<i64, _>(&lookup, "RESIDUE_WINDOW")? {
            config.set_window(window);
        }
        if let Some(baseline) = parse_var::<f64, _>(&lookup, "RESIDUE_BASELINE")? {
            config.baseline = baseline;
        }
        if let Some(max) = parse_var::<usize, _>(&lookup, "RESIDUE_MAX_TOKENS")? {
            config.max_tokens = max;
        }
        if let Some(cap) = parse_var::<usize, _>(&lookup, "RESIDUE_HIT_LOG")? {
            config.hit_log_capacity = cap;
        }
        config.cluster_words = lookup("RESIDUE_CLUSTER_WORDS").map(PathBuf::from);
        config.personality_words = lookup("RESIDUE_PERSONALITY_WORDS").map(PathBuf::from);
        config.technical_words = lookup("RESIDUE_TECHNICAL_WORDS").map(PathBuf::from);

        Ok(config)
    }

    /// Set the window radius, clamping into [1, 100] with a warning.
    pub fn set_window(&mut self, requested: i64) {
        let window = clamp_window(requested);
        if window as i64 != requested {
            warn!(requested, clamped = window, "Window radius out of range, clamped");
        }
        self.window = window;
    }

    /// All baselines in test order: primary, extras, then genre presets.
    pub fn baselines(&self) -> Result<Vec<Baseline>> {
        let mut baselines = vec![Baseline::primary(self.baseline)?];
        baselines.extend(self.extra_baselines.iter().cloned());
        if self.genre_baselines {
            baselines.extend(Baseline::genre_presets());
        }
        for b in baselines.iter().filter(|b| b.is_degenerate()) {
            warn!(
                label = %b.label,
                proportion = b.proportion,
                "Baseline at 0 or 1: z-test degenerates and reports z = 0"
            );
        }
        Ok(baselines)
    }

    /// Load the three word lists, honouring overrides.
    pub fn lexicons(&self) -> Result<Lexicons> {
        let lexicons = Lexicons::load(
            self.cluster_words.as_deref(),
            self.personality_words.as_deref(),
            self.technical_words.as_deref(),
        )?;
        Ok(lexicons)
    }

    /// Pipeline options for this configuration.
    pub fn analysis_options(&self) -> Result<AnalysisOptions> {
        Ok(AnalysisOptions {
            window: self.window,
            baselines: self.baselines()?,
            max_tokens: self.max_tokens,
            hit_log_capacity: self.hit_log_capacity,
            ..AnalysisOptions::default()
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(pairs: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        let config = from_map(&[]).unwrap();
        assert_eq!(config.window, 15);
        assert!((config.baseline - 0.03).abs() < 1e-12);
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
        assert!(config.cluster_words.is_none());
    }

    #[test]
    fn test_env_values_applied_and_window_clamped() {
        let config = from_map(&[
            ("RESIDUE_WINDOW", "250"),
            ("RESIDUE_BASELINE", "0.05"),
            ("RESIDUE_HIT_LOG", "10"),
            ("RESIDUE_CLUSTER_WORDS", "/tmp/cluster.txt"),
        ])
        .unwrap();
        assert_eq!(config.window, 100);
        assert!((config.baseline - 0.05).abs() < 1e-12);
        assert_eq!(config.hit_log_capacity, 10);
        assert_eq!(config.cluster_words, Some(PathBuf::from("/tmp/cluster.txt")));
    }

    #[test]
    fn test_invalid_env_value_is_error() {
        let err = from_map(&[("RESIDUE_MAX_TOKENS", "lots")]).unwrap_err();
        assert!(err.to_string().contains("RESIDUE_MAX_TOKENS"));
    }

    #[test]
    fn test_baseline_order() {
        let config = Config {
            extra_baselines: vec!["rock:0.02".parse().unwrap()],
            genre_baselines: true,
            ..Config::default()
        };
        let baselines = config.baselines().unwrap();
        assert_eq!(baselines[0].label, "primary");
        assert_eq!(baselines[1].label, "rock");
        assert_eq!(baselines.len(), 2 + Baseline::genre_presets().len());
    }

    #[test]
    fn test_out_of_range_primary_rejected() {
        let config = Config {
            baseline: 2.0,
            ..Config::default()
        };
        assert!(config.baselines().is_err());
    }
}
