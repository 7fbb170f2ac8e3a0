//! Context Provider Traits
//!
//! Interfaces to the four upstream services that feed an artist's scoring
//! context. Every provider is keyed by artist slug and may legitimately have
//! nothing to say about an artist, which is reported as `Ok(None)`.
//!
//! ## Providers
//! - `CoverageProvider`: contact coverage, engagement rates, campaigns
//! - `IndustryGraphProvider`: playlists, blogs and graph connectivity
//! - `SceneTrendProvider`: associated scenes with pulse and trend
//! - `CreativeSummaryProvider`: uniqueness signals and consistency
//!
//! Cancellation and timeouts belong to the implementations; callers never
//! retry.

use async_trait::async_trait;

use crate::domain::entities::artist_context::{
    CoverageContext, CreativeSummary, GraphNeighborhood, SceneContext,
};
use crate::domain::errors::ProviderError;

/// Common result type for provider lookups
pub type ProviderResult<T> = Result<Option<T>, ProviderError>;

#[async_trait]
pub trait CoverageProvider: Send + Sync {
    async fn fetch_coverage(&self, artist_slug: &str) -> ProviderResult<CoverageContext>;
}

#[async_trait]
pub trait IndustryGraphProvider: Send + Sync {
    async fn fetch_neighborhood(&self, artist_slug: &str) -> ProviderResult<GraphNeighborhood>;
}

#[async_trait]
pub trait SceneTrendProvider: Send + Sync {
    async fn fetch_scenes(&self, artist_slug: &str) -> ProviderResult<SceneContext>;
}

#[async_trait]
pub trait CreativeSummaryProvider: Send + Sync {
    async fn fetch_creative_summary(&self, artist_slug: &str) -> ProviderResult<CreativeSummary>;
}
