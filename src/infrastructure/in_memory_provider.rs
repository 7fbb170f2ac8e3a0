//! In-Memory Context Provider
//!
//! Serves fixed provider records keyed by artist slug. Backs tests and
//! offline scoring runs.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::entities::artist_context::{
    CoverageContext, CreativeSummary, GraphNeighborhood, SceneContext,
};
use crate::domain::repositories::context_provider::{
    CoverageProvider, CreativeSummaryProvider, IndustryGraphProvider, ProviderResult,
    SceneTrendProvider,
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryContextProvider {
    coverage: HashMap<String, CoverageContext>,
    neighborhoods: HashMap<String, GraphNeighborhood>,
    scenes: HashMap<String, SceneContext>,
    creative: HashMap<String, CreativeSummary>,
}

impl InMemoryContextProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coverage(mut self, artist_slug: &str, coverage: CoverageContext) -> Self {
        self.coverage.insert(artist_slug.to_string(), coverage);
        self
    }

    pub fn with_neighborhood(mut self, artist_slug: &str, neighborhood: GraphNeighborhood) -> Self {
        self.neighborhoods
            .insert(artist_slug.to_string(), neighborhood);
        self
    }

    pub fn with_scenes(mut self, artist_slug: &str, scenes: SceneContext) -> Self {
        self.scenes.insert(artist_slug.to_string(), scenes);
        self
    }

    pub fn with_creative_summary(mut self, artist_slug: &str, creative: CreativeSummary) -> Self {
        self.creative.insert(artist_slug.to_string(), creative);
        self
    }
}

#[async_trait]
impl CoverageProvider for InMemoryContextProvider {
    async fn fetch_coverage(&self, artist_slug: &str) -> ProviderResult<CoverageContext> {
        Ok(self.coverage.get(artist_slug).cloned())
    }
}

#[async_trait]
impl IndustryGraphProvider for InMemoryContextProvider {
    async fn fetch_neighborhood(&self, artist_slug: &str) -> ProviderResult<GraphNeighborhood> {
        Ok(self.neighborhoods.get(artist_slug).cloned())
    }
}

#[async_trait]
impl SceneTrendProvider for InMemoryContextProvider {
    async fn fetch_scenes(&self, artist_slug: &str) -> ProviderResult<SceneContext> {
        Ok(self.scenes.get(artist_slug).cloned())
    }
}

#[async_trait]
impl CreativeSummaryProvider for InMemoryContextProvider {
    async fn fetch_creative_summary(&self, artist_slug: &str) -> ProviderResult<CreativeSummary> {
        Ok(self.creative.get(artist_slug).cloned())
    }
}
