use serde::{Deserialize, Serialize};

use crate::domain::errors::RadarError;

/// Model version stamped on snapshots produced with the default policy
pub const DEFAULT_MODEL_VERSION: &str = "v1.0";

/// Default multiplicative risk penalty
pub const DEFAULT_RISK_PENALTY: f64 = 0.3;

/// Coefficients for the six non-risk dimensions
///
/// The engine treats these as opaque coefficients: they are not required
/// to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub breakout: f64,
    pub momentum: f64,
    pub creative_uniqueness: f64,
    pub scene_alignment: f64,
    pub engagement_quality: f64,
    pub campaign_efficiency: f64,
}

impl ScoringWeights {
    /// Default v1.0 policy, sums to 1.0
    pub const DEFAULT: ScoringWeights = ScoringWeights {
        breakout: 0.25,
        momentum: 0.20,
        creative_uniqueness: 0.15,
        scene_alignment: 0.15,
        engagement_quality: 0.15,
        campaign_efficiency: 0.10,
    };

    /// Same weight on every dimension
    pub fn equal() -> Self {
        let share = 1.0 / 6.0;
        ScoringWeights {
            breakout: share,
            momentum: share,
            creative_uniqueness: share,
            scene_alignment: share,
            engagement_quality: share,
            campaign_efficiency: share,
        }
    }

    /// Weights in composite order: breakout, momentum, creative uniqueness,
    /// scene alignment, engagement quality, campaign efficiency
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.breakout,
            self.momentum,
            self.creative_uniqueness,
            self.scene_alignment,
            self.engagement_quality,
            self.campaign_efficiency,
        ]
    }

    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scoring policy supplied by the caller
///
/// Passed explicitly into every scoring call; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub model_version: String,
    pub weights: ScoringWeights,
    /// Fraction of the base score removed at maximum risk, in [0.0, 1.0]
    pub risk_penalty: f64,
}

impl ScoringConfig {
    pub fn new(model_version: impl Into<String>, weights: ScoringWeights, risk_penalty: f64) -> Self {
        ScoringConfig {
            model_version: model_version.into(),
            weights,
            risk_penalty,
        }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_risk_penalty(mut self, risk_penalty: f64) -> Self {
        self.risk_penalty = risk_penalty;
        self
    }

    /// Check the risk penalty lies in [0.0, 1.0]
    ///
    /// Weights are opaque coefficients and are never checked; the composite
    /// formula keeps any weight vector in range.
    pub fn validate(&self) -> Result<(), RadarError> {
        if !(0.0..=1.0).contains(&self.risk_penalty) {
            return Err(RadarError::InvalidConfiguration(format!(
                "risk_penalty must be in [0.0, 1.0], got {}",
                self.risk_penalty
            )));
        }

        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig::new(
            DEFAULT_MODEL_VERSION,
            ScoringWeights::DEFAULT,
            DEFAULT_RISK_PENALTY,
        )
    }
}
