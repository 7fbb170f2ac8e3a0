use crate::domain::entities::artist_context::ArtistContext;
use crate::domain::services::math::{normalize, weighted_average};
use crate::domain::services::scoring::dimension_scorer::{
    finalize_score, DimensionScorer, NEUTRAL_SCORE,
};

/// Campaign outcomes relative to outreach effort
pub struct CampaignEfficiencyScorer {
    /// Reply rate considered excellent
    pub excellent_reply_rate: f64,
}

impl Default for CampaignEfficiencyScorer {
    fn default() -> Self {
        CampaignEfficiencyScorer {
            excellent_reply_rate: 0.1,
        }
    }
}

impl CampaignEfficiencyScorer {
    const WEIGHTS: [f64; 2] = [0.6, 0.4];
}

impl DimensionScorer for CampaignEfficiencyScorer {
    fn name(&self) -> &str {
        "campaign_efficiency"
    }

    fn score(&self, context: &ArtistContext) -> f64 {
        let (Some(engagement), Some(history)) =
            (context.engagement_metrics(), context.campaign_history.as_ref())
        else {
            return NEUTRAL_SCORE;
        };

        let reply_rate = normalize(
            engagement.reply_rate.unwrap_or(0.0),
            0.0,
            self.excellent_reply_rate,
        );

        finalize_score(weighted_average(
            &[history.success_rate, reply_rate],
            &Self::WEIGHTS,
        ))
    }
}
