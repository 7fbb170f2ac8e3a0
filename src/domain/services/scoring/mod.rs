pub mod aggregator;
pub mod breakout;
pub mod campaign_efficiency;
pub mod composite;
pub mod creative_uniqueness;
pub mod dimension_scorer;
pub mod engagement_quality;
pub mod momentum;
pub mod risk;
pub mod scene_alignment;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use aggregator::BreakoutPotentialAggregator;
pub use breakout::BreakoutScorer;
pub use campaign_efficiency::CampaignEfficiencyScorer;
pub use composite::compute_composite_score;
pub use creative_uniqueness::CreativeUniquenessScorer;
pub use dimension_scorer::{finalize_score, DimensionScorer, NEUTRAL_SCORE};
pub use engagement_quality::EngagementQualityScorer;
pub use momentum::MomentumScorer;
pub use risk::RiskScorer;
pub use scene_alignment::SceneAlignmentScorer;
