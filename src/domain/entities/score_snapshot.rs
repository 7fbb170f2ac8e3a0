use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::artist_context::ProviderAvailability;
use crate::domain::value_objects::scoring_config::ScoringWeights;

/// The seven dimension scores, each in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDimensions {
    pub breakout: f64,
    pub momentum: f64,
    pub scene_alignment: f64,
    pub creative_uniqueness: f64,
    pub campaign_efficiency: f64,
    pub engagement_quality: f64,
    pub risk: f64,
}

impl ScoreDimensions {
    /// Non-risk dimensions in composite order: breakout, momentum, creative
    /// uniqueness, scene alignment, engagement quality, campaign efficiency
    pub fn non_risk_values(&self) -> [f64; 6] {
        [
            self.breakout,
            self.momentum,
            self.creative_uniqueness,
            self.scene_alignment,
            self.engagement_quality,
            self.campaign_efficiency,
        ]
    }

    /// True when every dimension lies in [0.0, 1.0]
    pub fn is_in_range(&self) -> bool {
        self.non_risk_values()
            .iter()
            .chain(std::iter::once(&self.risk))
            .all(|value| (0.0..=1.0).contains(value))
    }
}

/// Interpretation data stored with every snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub model_version: String,
    pub weights: ScoringWeights,
    pub risk_penalty: f64,
    pub explanation: String,
    pub context_available: ProviderAvailability,
}

/// A snapshot before the store has assigned its id and creation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDraft {
    pub snapshot_date: NaiveDate,
    pub dimensions: ScoreDimensions,
    pub composite_score: f64,
    pub metadata: SnapshotMetadata,
}

/// Immutable record of one scoring computation for one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub id: i64,
    pub candidate_id: i64,
    pub snapshot_date: NaiveDate,
    pub dimensions: ScoreDimensions,
    pub composite_score: f64,
    pub metadata: SnapshotMetadata,
    pub created_at: DateTime<Utc>,
}

impl ScoreSnapshot {
    pub fn from_draft(
        id: i64,
        candidate_id: i64,
        draft: &SnapshotDraft,
        created_at: DateTime<Utc>,
    ) -> Self {
        ScoreSnapshot {
            id,
            candidate_id,
            snapshot_date: draft.snapshot_date,
            dimensions: draft.dimensions,
            composite_score: draft.composite_score,
            metadata: draft.metadata.clone(),
            created_at,
        }
    }
}
