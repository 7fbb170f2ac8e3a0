use crate::domain::entities::artist_context::ArtistContext;
use crate::domain::services::math::{normalize, weighted_average};
use crate::domain::services::scoring::dimension_scorer::{
    finalize_score, DimensionScorer, NEUTRAL_SCORE,
};

/// Likelihood an artist is approaching mainstream traction
///
/// `0.4 * coverage_growth + 0.3 * scene_pulse + 0.3 * connectivity`
pub struct BreakoutScorer {
    /// Total coverage (contacts + playlists + blogs) treated as saturation
    pub max_coverage: f64,
}

impl Default for BreakoutScorer {
    fn default() -> Self {
        BreakoutScorer { max_coverage: 100.0 }
    }
}

impl BreakoutScorer {
    const WEIGHTS: [f64; 3] = [0.4, 0.3, 0.3];

    fn coverage_growth(&self, context: &ArtistContext) -> f64 {
        let contacts = context
            .coverage
            .as_ref()
            .and_then(|coverage| coverage.contacts_coverage.as_ref())
            .map_or(0, |contacts| contacts.total_contacts);
        let (playlists, blogs) = context
            .industry_graph
            .as_ref()
            .map_or((0, 0), |graph| (graph.playlists.len(), graph.blogs.len()));

        let total = f64::from(contacts) + playlists as f64 + blogs as f64;
        normalize(total, 0.0, self.max_coverage)
    }

    fn scene_pulse(context: &ArtistContext) -> f64 {
        let scenes = context.scene_signals();
        if scenes.is_empty() {
            return NEUTRAL_SCORE;
        }

        let total: f64 = scenes
            .iter()
            .map(|scene| scene.pulse.unwrap_or(NEUTRAL_SCORE))
            .sum();
        total / scenes.len() as f64
    }
}

impl DimensionScorer for BreakoutScorer {
    fn name(&self) -> &str {
        "breakout"
    }

    fn score(&self, context: &ArtistContext) -> f64 {
        let connectivity = context.connectivity_score().unwrap_or(NEUTRAL_SCORE);

        finalize_score(weighted_average(
            &[
                self.coverage_growth(context),
                Self::scene_pulse(context),
                connectivity,
            ],
            &Self::WEIGHTS,
        ))
    }
}
