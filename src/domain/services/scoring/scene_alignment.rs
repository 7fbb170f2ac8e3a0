use crate::domain::entities::artist_context::ArtistContext;
use crate::domain::services::math::weighted_average;
use crate::domain::services::scoring::dimension_scorer::{
    finalize_score, DimensionScorer, NEUTRAL_SCORE,
};

/// Fit between the artist's sound and currently booming scenes
#[derive(Default)]
pub struct SceneAlignmentScorer;

impl SceneAlignmentScorer {
    const WEIGHTS: [f64; 2] = [0.6, 0.4];
}

impl DimensionScorer for SceneAlignmentScorer {
    fn name(&self) -> &str {
        "scene_alignment"
    }

    fn score(&self, context: &ArtistContext) -> f64 {
        let scenes = context.scenes.as_ref();
        let scene_fit = scenes
            .and_then(|scenes| scenes.scene_fit_score)
            .unwrap_or(NEUTRAL_SCORE);
        let opportunity = scenes
            .and_then(|scenes| scenes.opportunity_score)
            .unwrap_or(NEUTRAL_SCORE);

        finalize_score(weighted_average(&[scene_fit, opportunity], &Self::WEIGHTS))
    }
}
