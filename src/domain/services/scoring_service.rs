use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use futures_util::stream::{self, StreamExt};
use tracing::{debug, error, info, warn};

use crate::domain::entities::score_snapshot::{ScoreSnapshot, SnapshotDraft, SnapshotMetadata};
use crate::domain::errors::RadarError;
use crate::domain::repositories::candidate_store::CandidateStore;
use crate::domain::services::context_builder::ContextBuilder;
use crate::domain::services::explanation::ExplanationGenerator;
use crate::domain::services::scoring::{compute_composite_score, BreakoutPotentialAggregator};
use crate::domain::value_objects::scoring_config::ScoringConfig;

/// Maximum number of scoring pipelines a batch runs at once
pub const DEFAULT_BATCH_CONCURRENCY: usize = 10;

/// Batch progress is logged after this many completions
const PROGRESS_LOG_INTERVAL: usize = 10;

/// Lifecycle of a single scoring call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringStage {
    Pending,
    ContextBuilt,
    Scored,
    Persisted,
    NotFound,
    Failed,
}

impl fmt::Display for ScoringStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScoringStage::Pending => "pending",
            ScoringStage::ContextBuilt => "context_built",
            ScoringStage::Scored => "scored",
            ScoringStage::Persisted => "persisted",
            ScoringStage::NotFound => "not_found",
            ScoringStage::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// Produces and persists breakout-potential snapshots
///
/// One call runs the whole pipeline for one artist: candidate lookup,
/// concurrent context assembly, dimension scoring, composite, explanation
/// and persistence. Batch calls run many pipelines with bounded
/// concurrency.
pub struct ScoringService {
    context_builder: ContextBuilder,
    store: Arc<dyn CandidateStore>,
    aggregator: BreakoutPotentialAggregator,
    explanation: ExplanationGenerator,
    default_config: ScoringConfig,
    batch_concurrency: usize,
}

impl ScoringService {
    pub fn new(context_builder: ContextBuilder, store: Arc<dyn CandidateStore>) -> Self {
        ScoringService {
            context_builder,
            store,
            aggregator: BreakoutPotentialAggregator::new(),
            explanation: ExplanationGenerator::new(),
            default_config: ScoringConfig::default(),
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
        }
    }

    /// Policy used when a call does not pass its own
    pub fn with_default_config(mut self, config: ScoringConfig) -> Self {
        self.default_config = config;
        self
    }

    /// Values below 1 are raised to 1
    pub fn with_batch_concurrency(mut self, batch_concurrency: usize) -> Self {
        self.batch_concurrency = batch_concurrency.max(1);
        self
    }

    pub fn with_explanation(mut self, explanation: ExplanationGenerator) -> Self {
        self.explanation = explanation;
        self
    }

    pub fn default_config(&self) -> &ScoringConfig {
        &self.default_config
    }

    pub fn batch_concurrency(&self) -> usize {
        self.batch_concurrency
    }

    /// Score one artist and persist the snapshot
    ///
    /// Returns `Ok(None)` when the slug has no candidate record and `Err`
    /// only when the store fails. The config is used as given. The snapshot
    /// date and the context lookback both end at `as_of`, or today (UTC)
    /// when not given.
    pub async fn score_artist(
        &self,
        artist_slug: &str,
        as_of: Option<NaiveDate>,
        config: Option<&ScoringConfig>,
    ) -> Result<Option<ScoreSnapshot>, RadarError> {
        let config = config.unwrap_or(&self.default_config);
        let as_of = as_of.unwrap_or_else(|| Utc::now().date_naive());
        debug!(
            artist_slug = %artist_slug,
            stage = %ScoringStage::Pending,
            model_version = %config.model_version,
            "Scoring artist"
        );

        let candidate = match self.store.get_candidate_by_slug(artist_slug).await {
            Ok(Some(candidate)) => candidate,
            Ok(None) => {
                warn!(
                    artist_slug = %artist_slug,
                    stage = %ScoringStage::NotFound,
                    "No candidate record for artist"
                );
                return Ok(None);
            }
            Err(e) => {
                error!(
                    artist_slug = %artist_slug,
                    stage = %ScoringStage::Failed,
                    error = %e,
                    "Candidate lookup failed"
                );
                return Err(e.into());
            }
        };

        let context = self.context_builder.build(artist_slug, as_of).await;
        debug!(
            artist_slug = %artist_slug,
            stage = %ScoringStage::ContextBuilt,
            providers_available = context.availability().available_count(),
            "Context ready"
        );

        let dimensions = self.aggregator.score_dimensions(&context);
        let composite_score = compute_composite_score(&dimensions, config);
        let explanation = self.explanation.explain(&dimensions, composite_score);
        debug!(
            artist_slug = %artist_slug,
            stage = %ScoringStage::Scored,
            composite_score = composite_score,
            "Composite score computed"
        );

        let draft = SnapshotDraft {
            snapshot_date: as_of,
            dimensions,
            composite_score,
            metadata: SnapshotMetadata {
                model_version: config.model_version.clone(),
                weights: config.weights,
                risk_penalty: config.risk_penalty,
                explanation,
                context_available: context.availability(),
            },
        };

        let snapshot = self
            .store
            .save_score_snapshot(candidate.id, &draft)
            .await
            .map_err(|e| {
                error!(
                    artist_slug = %artist_slug,
                    candidate_id = candidate.id,
                    stage = %ScoringStage::Failed,
                    error = %e,
                    "Failed to persist score snapshot"
                );
                RadarError::from(e)
            })?;

        info!(
            artist_slug = %artist_slug,
            candidate_id = candidate.id,
            snapshot_id = snapshot.id,
            stage = %ScoringStage::Persisted,
            composite_score = snapshot.composite_score,
            "Score snapshot saved"
        );

        Ok(Some(snapshot))
    }

    /// Score many artists, at most `batch_concurrency` at a time
    ///
    /// Every input slug appears in the result. Unknown artists and failed
    /// pipelines map to `None`. Snapshots are dated today (UTC).
    pub async fn score_artists(
        &self,
        artist_slugs: &[String],
        config: Option<&ScoringConfig>,
    ) -> HashMap<String, Option<ScoreSnapshot>> {
        if artist_slugs.is_empty() {
            return HashMap::new();
        }

        let total = artist_slugs.len();
        info!(
            artists = total,
            concurrency = self.batch_concurrency,
            "Starting batch scoring"
        );

        let mut pipelines = stream::iter(artist_slugs)
            .map(|slug| async move {
                let outcome = self.score_artist(slug, None, config).await;
                (slug.clone(), outcome)
            })
            .buffer_unordered(self.batch_concurrency);

        let mut results = HashMap::with_capacity(total);
        let mut completed = 0;
        let mut failed = 0;

        while let Some((slug, outcome)) = pipelines.next().await {
            let snapshot = match outcome {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    failed += 1;
                    warn!(artist_slug = %slug, error = %e, "Batch scoring failed for artist");
                    None
                }
            };
            results.insert(slug, snapshot);

            completed += 1;
            if completed % PROGRESS_LOG_INTERVAL == 0 {
                info!(completed = completed, total = total, "Batch scoring progress");
            }
        }

        let scored = results.values().filter(|snapshot| snapshot.is_some()).count();
        info!(
            total = total,
            scored = scored,
            failed = failed,
            "Batch scoring complete"
        );

        results
    }
}
