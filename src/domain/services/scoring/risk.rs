use crate::domain::entities::artist_context::ArtistContext;
use crate::domain::services::scoring::dimension_scorer::{finalize_score, DimensionScorer};

/// Volatility and diversity risk, higher is riskier
///
/// Mean of three factors: scene diversity, graph connectivity and creative
/// consistency. Unknown connectivity is scored as fully risky (the factor
/// becomes 1.0), unlike the other dimensions which fall back to neutral.
/// A reported 0.0 connectivity or consistency is kept as 0.0, not treated as
/// absent, so `consistency_score: 0.0` yields a factor of 1.0.
pub struct RiskScorer {
    pub min_scene_count: usize,
    pub low_diversity_risk: f64,
    pub diverse_risk: f64,
    pub default_connectivity: f64,
    pub default_consistency: f64,
}

impl Default for RiskScorer {
    fn default() -> Self {
        RiskScorer {
            min_scene_count: 2,
            low_diversity_risk: 0.7,
            diverse_risk: 0.3,
            default_connectivity: 0.0,
            default_consistency: 0.7,
        }
    }
}

impl RiskScorer {
    fn risk_factors(&self, context: &ArtistContext) -> [f64; 3] {
        let scene_diversity_risk = if context.scene_signals().len() < self.min_scene_count {
            self.low_diversity_risk
        } else {
            self.diverse_risk
        };

        let connectivity = context
            .connectivity_score()
            .unwrap_or(self.default_connectivity);

        let consistency = context
            .creative
            .as_ref()
            .and_then(|creative| creative.consistency_score)
            .unwrap_or(self.default_consistency);

        [scene_diversity_risk, 1.0 - connectivity, 1.0 - consistency]
    }
}

impl DimensionScorer for RiskScorer {
    fn name(&self) -> &str {
        "risk"
    }

    fn score(&self, context: &ArtistContext) -> f64 {
        let factors = self.risk_factors(context);
        finalize_score(factors.iter().sum::<f64>() / factors.len() as f64)
    }
}
