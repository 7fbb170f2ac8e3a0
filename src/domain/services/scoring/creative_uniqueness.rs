use crate::domain::entities::artist_context::ArtistContext;
use crate::domain::services::math::weighted_average;
use crate::domain::services::scoring::dimension_scorer::{
    finalize_score, DimensionScorer, NEUTRAL_SCORE,
};

/// Distance of the artist's output from genre and scene norms
#[derive(Default)]
pub struct CreativeUniquenessScorer;

impl CreativeUniquenessScorer {
    const WEIGHTS: [f64; 3] = [0.3, 0.3, 0.4];
}

impl DimensionScorer for CreativeUniquenessScorer {
    fn name(&self) -> &str {
        "creative_uniqueness"
    }

    fn score(&self, context: &ArtistContext) -> f64 {
        let Some(signals) = context
            .creative
            .as_ref()
            .and_then(|creative| creative.uniqueness_signals.as_ref())
        else {
            return NEUTRAL_SCORE;
        };

        finalize_score(weighted_average(
            &[
                signals.genre_distance.unwrap_or(NEUTRAL_SCORE),
                signals.scene_distance.unwrap_or(NEUTRAL_SCORE),
                signals.innovation_score.unwrap_or(NEUTRAL_SCORE),
            ],
            &Self::WEIGHTS,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::artist_context::CreativeSummary;
    use crate::domain::services::scoring::test_fixtures::*;

    #[test]
    fn test_creative_uniqueness_neutral_without_signals() {
        assert_eq!(CreativeUniquenessScorer.score(&empty_context()), 0.5);

        let ctx = context(
            None,
            None,
            None,
            Some(CreativeSummary {
                uniqueness_signals: None,
                consistency_score: Some(0.9),
            }),
        );
        assert_eq!(CreativeUniquenessScorer.score(&ctx), 0.5);
    }

    #[test]
    fn test_creative_uniqueness_weighted_combination() {
        let ctx = context(
            None,
            None,
            None,
            Some(creative(Some(0.8), Some(0.6), Some(1.0), None)),
        );
        // 0.24 + 0.18 + 0.4
        assert_close(CreativeUniquenessScorer.score(&ctx), 0.82);
    }

    #[test]
    fn test_creative_uniqueness_missing_fields_use_neutral() {
        let ctx = context(None, None, None, Some(creative(Some(1.0), None, None, None)));
        // 0.3 + 0.15 + 0.2
        assert_close(CreativeUniquenessScorer.score(&ctx), 0.65);
    }
}
