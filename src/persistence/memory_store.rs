//! In-Memory Candidate Store
//!
//! [`CandidateStore`] backed by process memory. Used by tests and for dry
//! runs where nothing should touch disk.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::candidate::{Candidate, CandidateInput};
use crate::domain::entities::score_snapshot::{ScoreSnapshot, SnapshotDraft};
use crate::domain::errors::StoreError;
use crate::domain::repositories::candidate_store::{CandidateStore, StoreResult};

#[derive(Default)]
struct StoreState {
    candidates: HashMap<String, Candidate>,
    snapshots: Vec<ScoreSnapshot>,
    next_candidate_id: i64,
    next_snapshot_id: i64,
}

#[derive(Default)]
pub struct InMemoryCandidateStore {
    state: RwLock<StoreState>,
}

impl InMemoryCandidateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of snapshots saved across all candidates
    pub async fn snapshot_count(&self) -> usize {
        self.state.read().await.snapshots.len()
    }
}

/// Newest first: snapshot date, then insertion order
fn newest_first(snapshots: &mut [ScoreSnapshot]) {
    snapshots.sort_by(|a, b| {
        b.snapshot_date
            .cmp(&a.snapshot_date)
            .then_with(|| b.id.cmp(&a.id))
    });
}

#[async_trait]
impl CandidateStore for InMemoryCandidateStore {
    async fn get_candidate_by_slug(&self, artist_slug: &str) -> StoreResult<Option<Candidate>> {
        Ok(self.state.read().await.candidates.get(artist_slug).cloned())
    }

    async fn get_candidate_by_id(&self, candidate_id: i64) -> StoreResult<Option<Candidate>> {
        let state = self.state.read().await;
        Ok(state
            .candidates
            .values()
            .find(|candidate| candidate.id == candidate_id)
            .cloned())
    }

    async fn list_candidates(&self, limit: i64, offset: i64) -> StoreResult<Vec<Candidate>> {
        let state = self.state.read().await;
        let mut candidates: Vec<Candidate> = state.candidates.values().cloned().collect();
        candidates.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(candidates
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .collect())
    }

    async fn upsert_candidate(&self, input: &CandidateInput) -> StoreResult<Candidate> {
        let mut state = self.state.write().await;

        if let Some(existing) = state.candidates.get_mut(&input.artist_slug) {
            if let Some(display_name) = &input.display_name {
                existing.display_name = display_name.clone();
            }
            return Ok(existing.clone());
        }

        state.next_candidate_id += 1;
        let candidate = Candidate {
            id: state.next_candidate_id,
            artist_slug: input.artist_slug.clone(),
            display_name: input.resolved_display_name().to_string(),
            created_at: Utc::now(),
        };
        state
            .candidates
            .insert(candidate.artist_slug.clone(), candidate.clone());

        debug!(
            artist_slug = %candidate.artist_slug,
            candidate_id = candidate.id,
            "Created candidate"
        );
        Ok(candidate)
    }

    async fn save_score_snapshot(
        &self,
        candidate_id: i64,
        draft: &SnapshotDraft,
    ) -> StoreResult<ScoreSnapshot> {
        let mut state = self.state.write().await;

        if !state
            .candidates
            .values()
            .any(|candidate| candidate.id == candidate_id)
        {
            return Err(StoreError::CandidateNotFound(candidate_id));
        }

        state.next_snapshot_id += 1;
        let snapshot =
            ScoreSnapshot::from_draft(state.next_snapshot_id, candidate_id, draft, Utc::now());
        state.snapshots.push(snapshot.clone());

        Ok(snapshot)
    }

    async fn get_latest_score(&self, candidate_id: i64) -> StoreResult<Option<ScoreSnapshot>> {
        Ok(self
            .get_score_history(candidate_id, 1)
            .await?
            .into_iter()
            .next())
    }

    async fn get_score_history(
        &self,
        candidate_id: i64,
        limit: i64,
    ) -> StoreResult<Vec<ScoreSnapshot>> {
        let state = self.state.read().await;
        let mut history: Vec<ScoreSnapshot> = state
            .snapshots
            .iter()
            .filter(|snapshot| snapshot.candidate_id == candidate_id)
            .cloned()
            .collect();
        newest_first(&mut history);
        history.truncate(usize::try_from(limit).unwrap_or(0));

        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::artist_context::ProviderAvailability;
    use crate::domain::entities::score_snapshot::{ScoreDimensions, SnapshotMetadata};
    use crate::domain::value_objects::scoring_config::ScoringWeights;
    use chrono::NaiveDate;

    fn draft(day: u32, composite_score: f64) -> SnapshotDraft {
        SnapshotDraft {
            snapshot_date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            dimensions: ScoreDimensions {
                breakout: 0.5,
                momentum: 0.5,
                scene_alignment: 0.5,
                creative_uniqueness: 0.5,
                campaign_efficiency: 0.5,
                engagement_quality: 0.5,
                risk: 0.5,
            },
            composite_score,
            metadata: SnapshotMetadata {
                model_version: "v1.0".to_string(),
                weights: ScoringWeights::DEFAULT,
                risk_penalty: 0.3,
                explanation: String::new(),
                context_available: ProviderAvailability::default(),
            },
        }
    }

    #[tokio::test]
    async fn test_upsert_assigns_ids_once() {
        let store = InMemoryCandidateStore::new();

        let first = store
            .upsert_candidate(&CandidateInput::new("nova-lake"))
            .await
            .unwrap();
        let second = store
            .upsert_candidate(&CandidateInput::new("drift-cult"))
            .await
            .unwrap();
        let renamed = store
            .upsert_candidate(&CandidateInput::new("nova-lake").with_display_name("Nova Lake"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(renamed.id, 1);
        assert_eq!(first.display_name, "nova-lake");
        assert_eq!(renamed.display_name, "Nova Lake");
        assert_eq!(
            store.get_candidate_by_id(2).await.unwrap().map(|c| c.artist_slug),
            Some("drift-cult".to_string())
        );
    }

    #[tokio::test]
    async fn test_save_snapshot_requires_candidate() {
        let store = InMemoryCandidateStore::new();

        let result = store.save_score_snapshot(7, &draft(1, 0.4)).await;

        assert_eq!(result, Err(StoreError::CandidateNotFound(7)));
        assert_eq!(store.snapshot_count().await, 0);
    }

    #[tokio::test]
    async fn test_history_newest_first() {
        let store = InMemoryCandidateStore::new();
        let candidate = store
            .upsert_candidate(&CandidateInput::new("nova-lake"))
            .await
            .unwrap();

        for (day, score) in [(2, 0.2), (3, 0.3), (1, 0.1), (3, 0.35)] {
            store
                .save_score_snapshot(candidate.id, &draft(day, score))
                .await
                .unwrap();
        }

        let history = store.get_score_history(candidate.id, 10).await.unwrap();
        let scores: Vec<f64> = history.iter().map(|s| s.composite_score).collect();
        assert_eq!(scores, vec![0.35, 0.3, 0.2, 0.1]);

        let latest = store.get_latest_score(candidate.id).await.unwrap().unwrap();
        assert_eq!(latest.composite_score, 0.35);

        assert_eq!(store.get_score_history(candidate.id, 2).await.unwrap().len(), 2);
        assert!(store.get_score_history(candidate.id, -1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_candidates_newest_first_with_paging() {
        let store = InMemoryCandidateStore::new();
        for slug in ["nova-lake", "drift-cult", "tidal-hex"] {
            store.upsert_candidate(&CandidateInput::new(slug)).await.unwrap();
        }

        let slugs = |candidates: Vec<Candidate>| -> Vec<String> {
            candidates.into_iter().map(|c| c.artist_slug).collect()
        };

        assert_eq!(
            slugs(store.list_candidates(10, 0).await.unwrap()),
            vec!["tidal-hex", "drift-cult", "nova-lake"]
        );
        assert_eq!(
            slugs(store.list_candidates(1, 1).await.unwrap()),
            vec!["drift-cult"]
        );
        assert!(store.list_candidates(10, 3).await.unwrap().is_empty());
    }
}
