use std::sync::Arc;

use chrono::NaiveDate;
use tokio::task::JoinError;
use tracing::{debug, warn};

use crate::domain::entities::artist_context::ArtistContext;
use crate::domain::repositories::context_provider::{
    CoverageProvider, CreativeSummaryProvider, IndustryGraphProvider, ProviderResult,
    SceneTrendProvider,
};

/// The four upstream providers a context is built from
#[derive(Clone)]
pub struct ContextProviders {
    pub coverage: Arc<dyn CoverageProvider>,
    pub industry_graph: Arc<dyn IndustryGraphProvider>,
    pub scenes: Arc<dyn SceneTrendProvider>,
    pub creative: Arc<dyn CreativeSummaryProvider>,
}

/// Builds an [`ArtistContext`] by querying all providers concurrently
///
/// Each provider runs in its own task. A provider that errors, has no data
/// or panics contributes nothing; the remaining providers are unaffected.
#[derive(Clone)]
pub struct ContextBuilder {
    providers: ContextProviders,
}

impl ContextBuilder {
    pub fn new(providers: ContextProviders) -> Self {
        ContextBuilder { providers }
    }

    /// Build the context for `artist_slug` with a lookback window ending at `as_of`
    pub async fn build(&self, artist_slug: &str, as_of: NaiveDate) -> ArtistContext {
        debug!(artist_slug = %artist_slug, as_of = %as_of, "Building artist context");

        let coverage_task = {
            let provider = Arc::clone(&self.providers.coverage);
            let slug = artist_slug.to_string();
            tokio::spawn(async move { provider.fetch_coverage(&slug).await })
        };
        let graph_task = {
            let provider = Arc::clone(&self.providers.industry_graph);
            let slug = artist_slug.to_string();
            tokio::spawn(async move { provider.fetch_neighborhood(&slug).await })
        };
        let scenes_task = {
            let provider = Arc::clone(&self.providers.scenes);
            let slug = artist_slug.to_string();
            tokio::spawn(async move { provider.fetch_scenes(&slug).await })
        };
        let creative_task = {
            let provider = Arc::clone(&self.providers.creative);
            let slug = artist_slug.to_string();
            tokio::spawn(async move { provider.fetch_creative_summary(&slug).await })
        };

        let (coverage, industry_graph, scenes, creative) =
            tokio::join!(coverage_task, graph_task, scenes_task, creative_task);

        let context = ArtistContext::assemble(
            artist_slug,
            as_of,
            settle("coverage", artist_slug, coverage),
            settle("industry_graph", artist_slug, industry_graph),
            settle("scenes", artist_slug, scenes),
            settle("creative", artist_slug, creative),
        );

        debug!(
            artist_slug = %artist_slug,
            providers_available = context.availability().available_count(),
            "Artist context built"
        );

        context
    }
}

/// Collapse a provider task outcome into data or absence
fn settle<T>(
    provider: &str,
    artist_slug: &str,
    outcome: Result<ProviderResult<T>, JoinError>,
) -> Option<T> {
    match outcome {
        Ok(Ok(Some(data))) => Some(data),
        Ok(Ok(None)) => {
            debug!(
                provider = provider,
                artist_slug = %artist_slug,
                "Provider has no data for artist"
            );
            None
        }
        Ok(Err(e)) => {
            warn!(
                provider = provider,
                artist_slug = %artist_slug,
                error = %e,
                "Provider failed, treating as absent"
            );
            None
        }
        Err(e) => {
            warn!(
                provider = provider,
                artist_slug = %artist_slug,
                error = %e,
                "Provider task aborted, treating as absent"
            );
            None
        }
    }
}
