use async_trait::async_trait;

use crate::domain::entities::candidate::{Candidate, CandidateInput};
use crate::domain::entities::score_snapshot::{ScoreSnapshot, SnapshotDraft};
use crate::domain::errors::StoreError;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Number of snapshots returned by history queries when no limit is given
pub const DEFAULT_HISTORY_LIMIT: i64 = 30;

/// Page size for candidate listings when no limit is given
pub const DEFAULT_CANDIDATE_PAGE_SIZE: i64 = 50;

/// Candidate and snapshot store
///
/// Snapshots are append-only: implementations insert and never update or
/// delete them.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    async fn get_candidate_by_slug(&self, artist_slug: &str) -> StoreResult<Option<Candidate>>;

    async fn get_candidate_by_id(&self, candidate_id: i64) -> StoreResult<Option<Candidate>>;

    /// Registered candidates, most recently registered first
    async fn list_candidates(&self, limit: i64, offset: i64) -> StoreResult<Vec<Candidate>>;

    /// Insert a candidate, or update the display name of an existing one
    async fn upsert_candidate(&self, input: &CandidateInput) -> StoreResult<Candidate>;

    /// Persist a new snapshot, assigning its id and creation time
    async fn save_score_snapshot(
        &self,
        candidate_id: i64,
        draft: &SnapshotDraft,
    ) -> StoreResult<ScoreSnapshot>;

    /// Most recent snapshot by snapshot date
    async fn get_latest_score(&self, candidate_id: i64) -> StoreResult<Option<ScoreSnapshot>>;

    /// Snapshots newest first
    async fn get_score_history(
        &self,
        candidate_id: i64,
        limit: i64,
    ) -> StoreResult<Vec<ScoreSnapshot>>;
}
