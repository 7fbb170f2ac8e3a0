use crate::domain::entities::artist_context::ArtistContext;
use crate::domain::services::math::safe_divide;
use crate::domain::services::scoring::dimension_scorer::{
    finalize_score, DimensionScorer, NEUTRAL_SCORE,
};

/// Short-term trend signal: share of the artist's scenes that are rising
#[derive(Default)]
pub struct MomentumScorer;

impl DimensionScorer for MomentumScorer {
    fn name(&self) -> &str {
        "momentum"
    }

    fn score(&self, context: &ArtistContext) -> f64 {
        let scenes = context.scene_signals();
        if scenes.is_empty() {
            return NEUTRAL_SCORE;
        }

        let rising = scenes.iter().filter(|scene| scene.is_rising()).count();
        finalize_score(safe_divide(rising as f64, scenes.len() as f64))
    }
}
