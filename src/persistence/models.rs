//! Database Models
//!
//! Row types for candidates and score snapshots, and their conversion into
//! domain entities.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::entities::candidate::Candidate;
use crate::domain::entities::score_snapshot::{ScoreDimensions, ScoreSnapshot, SnapshotMetadata};
use crate::domain::errors::StoreError;

/// Candidate record in database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateRecord {
    pub id: i64,
    pub artist_slug: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<CandidateRecord> for Candidate {
    fn from(record: CandidateRecord) -> Self {
        Candidate {
            id: record.id,
            artist_slug: record.artist_slug,
            display_name: record.display_name,
            created_at: record.created_at,
        }
    }
}

/// Score snapshot record in database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScoreRecord {
    pub id: i64,
    pub candidate_id: i64,
    pub snapshot_date: NaiveDate,
    pub breakout_score: f64,
    pub momentum_score: f64,
    pub scene_alignment_score: f64,
    pub creative_uniqueness_score: f64,
    pub campaign_efficiency_score: f64,
    pub engagement_quality_score: f64,
    pub risk_score: f64,
    pub composite_score: f64,
    pub metadata_json: String, // JSON-encoded SnapshotMetadata
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ScoreRecord> for ScoreSnapshot {
    type Error = StoreError;

    fn try_from(record: ScoreRecord) -> Result<Self, Self::Error> {
        let metadata: SnapshotMetadata = serde_json::from_str(&record.metadata_json)?;

        Ok(ScoreSnapshot {
            id: record.id,
            candidate_id: record.candidate_id,
            snapshot_date: record.snapshot_date,
            dimensions: ScoreDimensions {
                breakout: record.breakout_score,
                momentum: record.momentum_score,
                scene_alignment: record.scene_alignment_score,
                creative_uniqueness: record.creative_uniqueness_score,
                campaign_efficiency: record.campaign_efficiency_score,
                engagement_quality: record.engagement_quality_score,
                risk: record.risk_score,
            },
            composite_score: record.composite_score,
            metadata,
            created_at: record.created_at,
        })
    }
}
