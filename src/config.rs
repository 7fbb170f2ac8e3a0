use std::time::Duration;

use url::Url;

use crate::domain::services::scoring_service::DEFAULT_BATCH_CONCURRENCY;
use crate::domain::value_objects::scoring_config::ScoringConfig;

/// Runtime configuration for the radar binary
#[derive(Debug, Clone, PartialEq)]
pub struct RadarConfig {
    pub database_url: String,
    pub coverage_provider_url: Option<Url>,
    pub graph_provider_url: Option<Url>,
    pub scene_provider_url: Option<Url>,
    pub creative_provider_url: Option<Url>,
    pub provider_timeout: Duration, // Per-request timeout for provider calls
    pub batch_concurrency: usize,   // Scoring pipelines run at once in a batch
    pub scoring: ScoringConfig,
}

impl Default for RadarConfig {
    fn default() -> Self {
        RadarConfig {
            database_url: "sqlite://data/anr.db".to_string(),
            coverage_provider_url: None,
            graph_provider_url: None,
            scene_provider_url: None,
            creative_provider_url: None,
            provider_timeout: Duration::from_millis(5000),
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
            scoring: ScoringConfig::default(),
        }
    }
}

impl RadarConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> RadarConfig {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup; unset keys keep their
    /// defaults and invalid values are logged and ignored
    pub fn from_lookup<F>(lookup: F) -> RadarConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = RadarConfig::default();

        if let Some(url) = lookup("DATABASE_URL") {
            config.database_url = url;
        }

        config.coverage_provider_url = parse_url(&lookup, "COVERAGE_PROVIDER_URL");
        config.graph_provider_url = parse_url(&lookup, "GRAPH_PROVIDER_URL");
        config.scene_provider_url = parse_url(&lookup, "SCENE_PROVIDER_URL");
        config.creative_provider_url = parse_url(&lookup, "CREATIVE_PROVIDER_URL");

        if let Some(timeout) = lookup("PROVIDER_TIMEOUT_MILLISECONDS") {
            match timeout.parse::<u64>() {
                Ok(value) if value > 0 => {
                    config.provider_timeout = Duration::from_millis(value);
                }
                _ => {
                    tracing::warn!(
                        "Invalid PROVIDER_TIMEOUT_MILLISECONDS '{}', using default: {}ms",
                        timeout,
                        config.provider_timeout.as_millis()
                    );
                }
            }
        }

        if let Some(concurrency) = lookup("BATCH_CONCURRENCY") {
            match concurrency.parse::<usize>() {
                Ok(value) if value > 0 => config.batch_concurrency = value,
                _ => {
                    tracing::warn!(
                        "Invalid BATCH_CONCURRENCY '{}', using default: {}",
                        concurrency,
                        config.batch_concurrency
                    );
                }
            }
        }

        if let Some(version) = lookup("SCORING_MODEL_VERSION") {
            if version.trim().is_empty() {
                tracing::warn!("Empty SCORING_MODEL_VERSION, using default");
            } else {
                config.scoring.model_version = version;
            }
        }

        let weights = &mut config.scoring.weights;
        for (key, weight) in [
            ("SCORING_BREAKOUT_WEIGHT", &mut weights.breakout),
            ("SCORING_MOMENTUM_WEIGHT", &mut weights.momentum),
            (
                "SCORING_CREATIVE_UNIQUENESS_WEIGHT",
                &mut weights.creative_uniqueness,
            ),
            ("SCORING_SCENE_ALIGNMENT_WEIGHT", &mut weights.scene_alignment),
            (
                "SCORING_ENGAGEMENT_QUALITY_WEIGHT",
                &mut weights.engagement_quality,
            ),
            (
                "SCORING_CAMPAIGN_EFFICIENCY_WEIGHT",
                &mut weights.campaign_efficiency,
            ),
        ] {
            if let Some(value) = parse_weight(&lookup, key) {
                *weight = value;
            }
        }

        if let Some(value) = parse_unit_interval(&lookup, "SCORING_RISK_PENALTY") {
            config.scoring.risk_penalty = value;
        }

        config
    }
}

fn parse_url<F>(lookup: &F, key: &str) -> Option<Url>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match Url::parse(&raw) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!("Failed to parse {} '{}': {}, provider disabled", key, raw, e);
            None
        }
    }
}

/// Parse a finite, non-negative weight; weights need not sum to 1
fn parse_weight<F>(lookup: &F, key: &str) -> Option<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        Ok(value) => {
            tracing::warn!(
                "Invalid {} value: {} (must be finite and non-negative), using default",
                key,
                value
            );
            None
        }
        Err(e) => {
            tracing::warn!("Failed to parse {} '{}': {}, using default", key, raw, e);
            None
        }
    }
}

/// Parse a value in [0.0, 1.0]
fn parse_unit_interval<F>(lookup: &F, key: &str) -> Option<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.parse::<f64>() {
        Ok(value) if (0.0..=1.0).contains(&value) => Some(value),
        Ok(value) => {
            tracing::warn!(
                "Invalid {} value: {} (must be between 0.0 and 1.0), using default",
                key,
                value
            );
            None
        }
        Err(e) => {
            tracing::warn!("Failed to parse {} '{}': {}, using default", key, raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::scoring_config::ScoringWeights;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> RadarConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RadarConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_default_config() {
        let config = RadarConfig::default();
        assert_eq!(config.database_url, "sqlite://data/anr.db");
        assert_eq!(config.provider_timeout, Duration::from_millis(5000));
        assert_eq!(config.batch_concurrency, 10);
        assert_eq!(config.scoring, ScoringConfig::default());
        assert!(config.coverage_provider_url.is_none());
    }

    #[test]
    fn test_empty_environment_keeps_defaults() {
        assert_eq!(config_from(&[]), RadarConfig::default());
    }

    #[test]
    fn test_reads_all_values() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("COVERAGE_PROVIDER_URL", "http://coverage.local/api"),
            ("GRAPH_PROVIDER_URL", "http://graph.local"),
            ("PROVIDER_TIMEOUT_MILLISECONDS", "750"),
            ("BATCH_CONCURRENCY", "4"),
            ("SCORING_MODEL_VERSION", "v1.1"),
            ("SCORING_BREAKOUT_WEIGHT", "0.4"),
            ("SCORING_CAMPAIGN_EFFICIENCY_WEIGHT", "0"),
            ("SCORING_RISK_PENALTY", "0.5"),
        ]);

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(
            config.coverage_provider_url.map(|u| u.to_string()),
            Some("http://coverage.local/api".to_string())
        );
        assert!(config.graph_provider_url.is_some());
        assert!(config.scene_provider_url.is_none());
        assert_eq!(config.provider_timeout, Duration::from_millis(750));
        assert_eq!(config.batch_concurrency, 4);
        assert_eq!(config.scoring.model_version, "v1.1");
        assert_eq!(config.scoring.weights.breakout, 0.4);
        assert_eq!(config.scoring.weights.campaign_efficiency, 0.0);
        assert_eq!(
            config.scoring.weights.momentum,
            ScoringWeights::DEFAULT.momentum
        );
        assert_eq!(config.scoring.risk_penalty, 0.5);
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let config = config_from(&[
            ("COVERAGE_PROVIDER_URL", "not a url"),
            ("PROVIDER_TIMEOUT_MILLISECONDS", "0"),
            ("BATCH_CONCURRENCY", "many"),
            ("SCORING_MODEL_VERSION", "  "),
            ("SCORING_MOMENTUM_WEIGHT", "-0.2"),
            ("SCORING_BREAKOUT_WEIGHT", "inf"),
            ("SCORING_SCENE_ALIGNMENT_WEIGHT", "abc"),
            ("SCORING_RISK_PENALTY", "-0.1"),
        ]);

        assert_eq!(config, RadarConfig::default());
    }

    #[test]
    fn test_weights_above_one_are_accepted() {
        let config = config_from(&[
            ("SCORING_BREAKOUT_WEIGHT", "2.5"),
            ("SCORING_MOMENTUM_WEIGHT", "1.5"),
            ("SCORING_RISK_PENALTY", "1.5"),
        ]);

        assert_eq!(config.scoring.weights.breakout, 2.5);
        assert_eq!(config.scoring.weights.momentum, 1.5);
        assert_eq!(config.scoring.risk_penalty, ScoringConfig::default().risk_penalty);
    }
}
