use crate::domain::entities::artist_context::ArtistContext;
use crate::domain::services::math::{normalize, weighted_average};
use crate::domain::services::scoring::dimension_scorer::{
    finalize_score, DimensionScorer, NEUTRAL_SCORE,
};

/// Quality of outreach engagement, reply rate weighted above open rate
pub struct EngagementQualityScorer {
    pub good_open_rate: f64,
    pub good_reply_rate: f64,
}

impl Default for EngagementQualityScorer {
    fn default() -> Self {
        EngagementQualityScorer {
            good_open_rate: 0.2,
            good_reply_rate: 0.05,
        }
    }
}

impl EngagementQualityScorer {
    const WEIGHTS: [f64; 2] = [0.3, 0.7];
}

impl DimensionScorer for EngagementQualityScorer {
    fn name(&self) -> &str {
        "engagement_quality"
    }

    fn score(&self, context: &ArtistContext) -> f64 {
        let Some(engagement) = context.engagement_metrics() else {
            return NEUTRAL_SCORE;
        };

        let open_rate = normalize(engagement.open_rate.unwrap_or(0.0), 0.0, self.good_open_rate);
        let reply_rate = normalize(
            engagement.reply_rate.unwrap_or(0.0),
            0.0,
            self.good_reply_rate,
        );

        finalize_score(weighted_average(&[open_rate, reply_rate], &Self::WEIGHTS))
    }
}
