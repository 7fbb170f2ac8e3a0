//! SQLite Candidate Store
//!
//! sqlx-backed implementation of [`CandidateStore`].

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error};

use super::models::{CandidateRecord, ScoreRecord};
use super::DbPool;
use crate::domain::entities::candidate::{Candidate, CandidateInput};
use crate::domain::entities::score_snapshot::{ScoreSnapshot, SnapshotDraft};
use crate::domain::errors::StoreError;
use crate::domain::repositories::candidate_store::{CandidateStore, StoreResult};

pub struct SqliteCandidateStore {
    pool: DbPool,
}

impl SqliteCandidateStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn query_failed(operation: &str, e: sqlx::Error) -> StoreError {
    error!(operation = operation, error = %e, "Store query failed");
    StoreError::Database(format!("Failed to {}: {}", operation, e))
}

#[async_trait]
impl CandidateStore for SqliteCandidateStore {
    async fn get_candidate_by_slug(&self, artist_slug: &str) -> StoreResult<Option<Candidate>> {
        let record = sqlx::query_as::<_, CandidateRecord>(
            "SELECT * FROM anr_candidates WHERE artist_slug = ?1",
        )
        .bind(artist_slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_failed("get candidate by slug", e))?;

        Ok(record.map(Candidate::from))
    }

    async fn get_candidate_by_id(&self, candidate_id: i64) -> StoreResult<Option<Candidate>> {
        let record =
            sqlx::query_as::<_, CandidateRecord>("SELECT * FROM anr_candidates WHERE id = ?1")
                .bind(candidate_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| query_failed("get candidate by id", e))?;

        Ok(record.map(Candidate::from))
    }

    async fn list_candidates(&self, limit: i64, offset: i64) -> StoreResult<Vec<Candidate>> {
        let records = sqlx::query_as::<_, CandidateRecord>(
            "SELECT * FROM anr_candidates ORDER BY id DESC LIMIT ?1 OFFSET ?2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_failed("list candidates", e))?;

        Ok(records.into_iter().map(Candidate::from).collect())
    }

    async fn upsert_candidate(&self, input: &CandidateInput) -> StoreResult<Candidate> {
        // An existing display name is kept when the input carries none
        let record = sqlx::query_as::<_, CandidateRecord>(
            r#"
            INSERT INTO anr_candidates (artist_slug, display_name, created_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(artist_slug) DO UPDATE
            SET display_name = COALESCE(?4, anr_candidates.display_name)
            RETURNING *
            "#,
        )
        .bind(&input.artist_slug)
        .bind(input.resolved_display_name())
        .bind(Utc::now())
        .bind(input.display_name.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| query_failed("upsert candidate", e))?;

        debug!(
            artist_slug = %record.artist_slug,
            candidate_id = record.id,
            "Upserted candidate"
        );
        Ok(record.into())
    }

    async fn save_score_snapshot(
        &self,
        candidate_id: i64,
        draft: &SnapshotDraft,
    ) -> StoreResult<ScoreSnapshot> {
        let metadata_json = serde_json::to_string(&draft.metadata)?;
        let dimensions = &draft.dimensions;

        let record = sqlx::query_as::<_, ScoreRecord>(
            r#"
            INSERT INTO anr_scores (
                candidate_id, snapshot_date, breakout_score, momentum_score,
                scene_alignment_score, creative_uniqueness_score,
                campaign_efficiency_score, engagement_quality_score, risk_score,
                composite_score, metadata_json, created_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            RETURNING *
            "#,
        )
        .bind(candidate_id)
        .bind(draft.snapshot_date)
        .bind(dimensions.breakout)
        .bind(dimensions.momentum)
        .bind(dimensions.scene_alignment)
        .bind(dimensions.creative_uniqueness)
        .bind(dimensions.campaign_efficiency)
        .bind(dimensions.engagement_quality)
        .bind(dimensions.risk)
        .bind(draft.composite_score)
        .bind(&metadata_json)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                StoreError::CandidateNotFound(candidate_id)
            }
            e => query_failed("save score snapshot", e),
        })?;

        debug!(
            candidate_id = candidate_id,
            snapshot_id = record.id,
            snapshot_date = %record.snapshot_date,
            "Saved score snapshot"
        );
        ScoreSnapshot::try_from(record)
    }

    async fn get_latest_score(&self, candidate_id: i64) -> StoreResult<Option<ScoreSnapshot>> {
        let record = sqlx::query_as::<_, ScoreRecord>(
            r#"
            SELECT * FROM anr_scores
            WHERE candidate_id = ?1
            ORDER BY snapshot_date DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(candidate_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_failed("get latest score", e))?;

        record.map(ScoreSnapshot::try_from).transpose()
    }

    async fn get_score_history(
        &self,
        candidate_id: i64,
        limit: i64,
    ) -> StoreResult<Vec<ScoreSnapshot>> {
        let records = sqlx::query_as::<_, ScoreRecord>(
            r#"
            SELECT * FROM anr_scores
            WHERE candidate_id = ?1
            ORDER BY snapshot_date DESC, id DESC
            LIMIT ?2
            "#,
        )
        .bind(candidate_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_failed("get score history", e))?;

        records.into_iter().map(ScoreSnapshot::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::artist_context::ProviderAvailability;
    use crate::domain::entities::score_snapshot::{ScoreDimensions, SnapshotMetadata};
    use crate::domain::value_objects::scoring_config::ScoringWeights;
    use crate::persistence::init_database;
    use chrono::NaiveDate;

    async fn store() -> SqliteCandidateStore {
        let pool = init_database("sqlite::memory:").await.unwrap();
        SqliteCandidateStore::new(pool)
    }

    fn draft(day: u32, composite_score: f64) -> SnapshotDraft {
        SnapshotDraft {
            snapshot_date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            dimensions: ScoreDimensions {
                breakout: 0.8,
                momentum: 0.7,
                scene_alignment: 0.6,
                creative_uniqueness: 0.5,
                campaign_efficiency: 0.4,
                engagement_quality: 0.3,
                risk: 0.2,
            },
            composite_score,
            metadata: SnapshotMetadata {
                model_version: "v1.0".to_string(),
                weights: ScoringWeights::DEFAULT,
                risk_penalty: 0.3,
                explanation: "Moderate breakout potential.".to_string(),
                context_available: ProviderAvailability {
                    coverage: true,
                    industry_graph: true,
                    scenes: false,
                    creative: true,
                },
            },
        }
    }

    #[tokio::test]
    async fn test_upsert_keeps_existing_display_name() {
        let store = store().await;

        let created = store
            .upsert_candidate(&CandidateInput::new("nova-lake").with_display_name("Nova Lake"))
            .await
            .unwrap();
        let again = store
            .upsert_candidate(&CandidateInput::new("nova-lake"))
            .await
            .unwrap();
        let renamed = store
            .upsert_candidate(&CandidateInput::new("nova-lake").with_display_name("NOVA LAKE"))
            .await
            .unwrap();

        assert_eq!(created.id, again.id);
        assert_eq!(again.display_name, "Nova Lake");
        assert_eq!(renamed.id, created.id);
        assert_eq!(renamed.display_name, "NOVA LAKE");
    }

    #[tokio::test]
    async fn test_get_candidate_by_slug_and_id() {
        let store = store().await;
        let created = store
            .upsert_candidate(&CandidateInput::new("nova-lake"))
            .await
            .unwrap();

        let by_slug = store.get_candidate_by_slug("nova-lake").await.unwrap();
        let by_id = store.get_candidate_by_id(created.id).await.unwrap();

        assert_eq!(by_slug.as_ref().map(|c| c.id), Some(created.id));
        assert_eq!(by_id.map(|c| c.artist_slug), Some("nova-lake".to_string()));
        assert_eq!(store.get_candidate_by_slug("ghost").await.unwrap(), None);
        assert_eq!(store.get_candidate_by_id(9999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_snapshot_round_trips_metadata() {
        let store = store().await;
        let candidate = store
            .upsert_candidate(&CandidateInput::new("nova-lake"))
            .await
            .unwrap();
        let draft = draft(1, 0.555);

        let saved = store.save_score_snapshot(candidate.id, &draft).await.unwrap();
        let latest = store.get_latest_score(candidate.id).await.unwrap().unwrap();

        assert_eq!(saved.candidate_id, candidate.id);
        assert_eq!(latest.id, saved.id);
        assert_eq!(latest.dimensions, draft.dimensions);
        assert_eq!(latest.composite_score, 0.555);
        assert_eq!(latest.metadata, draft.metadata);
        assert_eq!(latest.snapshot_date, draft.snapshot_date);
    }

    #[tokio::test]
    async fn test_save_snapshot_for_unknown_candidate() {
        let store = store().await;

        let result = store.save_score_snapshot(42, &draft(1, 0.5)).await;

        assert_eq!(result, Err(StoreError::CandidateNotFound(42)));
    }

    #[tokio::test]
    async fn test_history_is_newest_first_and_limited() {
        let store = store().await;
        let candidate = store
            .upsert_candidate(&CandidateInput::new("nova-lake"))
            .await
            .unwrap();

        for (day, score) in [(3, 0.3), (1, 0.1), (2, 0.2)] {
            store
                .save_score_snapshot(candidate.id, &draft(day, score))
                .await
                .unwrap();
        }

        let history = store.get_score_history(candidate.id, 10).await.unwrap();
        let scores: Vec<f64> = history.iter().map(|s| s.composite_score).collect();
        assert_eq!(scores, vec![0.3, 0.2, 0.1]);

        let limited = store.get_score_history(candidate.id, 2).await.unwrap();
        assert_eq!(limited.len(), 2);

        let latest = store.get_latest_score(candidate.id).await.unwrap().unwrap();
        assert_eq!(latest.composite_score, 0.3);
    }

    #[tokio::test]
    async fn test_latest_score_without_snapshots() {
        let store = store().await;
        let candidate = store
            .upsert_candidate(&CandidateInput::new("nova-lake"))
            .await
            .unwrap();

        assert_eq!(store.get_latest_score(candidate.id).await.unwrap(), None);
        assert!(store
            .get_score_history(candidate.id, 10)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_list_candidates_newest_first_with_paging() {
        let store = store().await;
        for slug in ["nova-lake", "drift-cult", "tidal-hex"] {
            store.upsert_candidate(&CandidateInput::new(slug)).await.unwrap();
        }

        let page: Vec<String> = store
            .list_candidates(2, 0)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.artist_slug)
            .collect();
        let rest = store.list_candidates(2, 2).await.unwrap();

        assert_eq!(page, vec!["tidal-hex", "drift-cult"]);
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].artist_slug, "nova-lake");
    }
}
