use crate::domain::entities::score_snapshot::ScoreDimensions;
use crate::domain::services::math::{clamp, round, weighted_average};
use crate::domain::value_objects::scoring_config::ScoringConfig;

/// Risk-adjusted composite score
///
/// `weighted_average(non-risk dimensions, weights) * (1 - risk_penalty * risk)`,
/// clamped to [0.0, 1.0] and rounded. The weight vector is used as given.
pub fn compute_composite_score(dimensions: &ScoreDimensions, config: &ScoringConfig) -> f64 {
    let base = weighted_average(&dimensions.non_risk_values(), &config.weights.as_array());
    let risk_adjustment = 1.0 - config.risk_penalty * dimensions.risk;

    round(clamp(base * risk_adjustment, 0.0, 1.0))
}
