use std::cmp::Ordering;

use tracing::debug;

use crate::domain::entities::artist_context::ArtistContext;
use crate::domain::entities::score_snapshot::{ScoreDimensions, ScoreSnapshot};
use crate::domain::services::scoring::{
    BreakoutScorer, CampaignEfficiencyScorer, CreativeUniquenessScorer, DimensionScorer,
    EngagementQualityScorer, MomentumScorer, RiskScorer, SceneAlignmentScorer,
};

/// Runs all seven dimension scorers over a context
#[derive(Default)]
pub struct BreakoutPotentialAggregator {
    breakout: BreakoutScorer,
    momentum: MomentumScorer,
    scene_alignment: SceneAlignmentScorer,
    creative_uniqueness: CreativeUniquenessScorer,
    campaign_efficiency: CampaignEfficiencyScorer,
    engagement_quality: EngagementQualityScorer,
    risk: RiskScorer,
}

impl BreakoutPotentialAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score every dimension for the given context
    pub fn score_dimensions(&self, context: &ArtistContext) -> ScoreDimensions {
        let availability = context.availability();
        debug!(
            artist_slug = %context.artist_slug,
            providers_available = availability.available_count(),
            coverage = availability.coverage,
            industry_graph = availability.industry_graph,
            scenes = availability.scenes,
            creative = availability.creative,
            "Starting dimension scoring"
        );

        let dimensions = ScoreDimensions {
            breakout: self.run(&self.breakout, context),
            momentum: self.run(&self.momentum, context),
            scene_alignment: self.run(&self.scene_alignment, context),
            creative_uniqueness: self.run(&self.creative_uniqueness, context),
            campaign_efficiency: self.run(&self.campaign_efficiency, context),
            engagement_quality: self.run(&self.engagement_quality, context),
            risk: self.run(&self.risk, context),
        };

        debug!(
            artist_slug = %context.artist_slug,
            dimensions = ?dimensions,
            "Completed dimension scoring"
        );

        dimensions
    }

    fn run(&self, scorer: &dyn DimensionScorer, context: &ArtistContext) -> f64 {
        let score = scorer.score(context);
        debug!(
            artist_slug = %context.artist_slug,
            dimension = scorer.name(),
            score = score,
            "Calculated dimension score"
        );
        score
    }

    /// Order snapshots by composite score, highest first
    pub fn rank_snapshots(mut snapshots: Vec<ScoreSnapshot>) -> Vec<ScoreSnapshot> {
        snapshots.sort_by(|a, b| {
            b.composite_score
                .partial_cmp(&a.composite_score)
                .unwrap_or(Ordering::Equal)
        });

        for (rank, snapshot) in snapshots.iter().enumerate() {
            debug!(
                rank = rank + 1,
                candidate_id = snapshot.candidate_id,
                composite_score = snapshot.composite_score,
                "Ranked score snapshot"
            );
        }

        snapshots
    }
}
