use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anr_radar::config::RadarConfig;
use anr_radar::domain::entities::candidate::CandidateInput;
use anr_radar::domain::errors::ProviderError;
use anr_radar::domain::repositories::candidate_store::{
    CandidateStore, DEFAULT_CANDIDATE_PAGE_SIZE,
};
use anr_radar::domain::repositories::context_provider::{
    CoverageProvider, CreativeSummaryProvider, IndustryGraphProvider, SceneTrendProvider,
};
use anr_radar::domain::services::context_builder::{ContextBuilder, ContextProviders};
use anr_radar::domain::services::scoring::BreakoutPotentialAggregator;
use anr_radar::domain::services::scoring_service::ScoringService;
use anr_radar::infrastructure::http_provider::HttpContextProvider;
use anr_radar::infrastructure::in_memory_provider::InMemoryContextProvider;
use anr_radar::persistence::{init_database, SqliteCandidateStore};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

const USAGE: &str = "usage: anr-radar [--register] [<artist-slug>...]";

/// HTTP provider for a configured URL, or `None` when the URL is unset
fn http_provider(
    name: &str,
    url: Option<&Url>,
    timeout: Duration,
) -> Result<Option<Arc<HttpContextProvider>>, ProviderError> {
    match url {
        Some(url) => {
            info!(provider = name, url = %url, "Using HTTP provider");
            Ok(Some(Arc::new(HttpContextProvider::new(url.clone(), timeout)?)))
        }
        None => {
            warn!(provider = name, "No URL configured, provider data will be absent");
            Ok(None)
        }
    }
}

fn build_providers(config: &RadarConfig) -> Result<ContextProviders, ProviderError> {
    let offline = Arc::new(InMemoryContextProvider::new());
    let timeout = config.provider_timeout;

    let coverage: Arc<dyn CoverageProvider> =
        match http_provider("coverage", config.coverage_provider_url.as_ref(), timeout)? {
            Some(provider) => provider,
            None => offline.clone(),
        };
    let industry_graph: Arc<dyn IndustryGraphProvider> =
        match http_provider("industry_graph", config.graph_provider_url.as_ref(), timeout)? {
            Some(provider) => provider,
            None => offline.clone(),
        };
    let scenes: Arc<dyn SceneTrendProvider> =
        match http_provider("scenes", config.scene_provider_url.as_ref(), timeout)? {
            Some(provider) => provider,
            None => offline.clone(),
        };
    let creative: Arc<dyn CreativeSummaryProvider> =
        match http_provider("creative", config.creative_provider_url.as_ref(), timeout)? {
            Some(provider) => provider,
            None => offline,
        };

    Ok(ContextProviders {
        coverage,
        industry_graph,
        scenes,
        creative,
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "anr_radar=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut register = false;
    let mut slugs = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--register" => register = true,
            _ => slugs.push(arg),
        }
    }

    if register && slugs.is_empty() {
        warn!("{}", USAGE);
        return Ok(());
    }

    let config = RadarConfig::from_env();
    config.scoring.validate()?;
    info!(
        model_version = %config.scoring.model_version,
        batch_concurrency = config.batch_concurrency,
        "A&R radar starting"
    );

    let pool = init_database(&config.database_url).await?;
    let store = Arc::new(SqliteCandidateStore::new(pool));

    if register {
        for slug in &slugs {
            let candidate = store.upsert_candidate(&CandidateInput::new(slug)).await?;
            info!(artist_slug = %slug, candidate_id = candidate.id, "Registered candidate");
        }
    }

    // No slugs given: score the stored roster
    if slugs.is_empty() {
        slugs = store
            .list_candidates(DEFAULT_CANDIDATE_PAGE_SIZE, 0)
            .await?
            .into_iter()
            .map(|candidate| candidate.artist_slug)
            .collect();
        info!(artists = slugs.len(), "Scoring stored candidates");
    }

    if slugs.is_empty() {
        warn!("No candidates registered. {}", USAGE);
        return Ok(());
    }

    let service = ScoringService::new(ContextBuilder::new(build_providers(&config)?), store)
        .with_default_config(config.scoring.clone())
        .with_batch_concurrency(config.batch_concurrency);

    let results = service.score_artists(&slugs, None).await;

    let mut slug_by_candidate = HashMap::new();
    let mut snapshots = Vec::new();
    for (slug, snapshot) in results {
        match snapshot {
            Some(snapshot) => {
                slug_by_candidate.insert(snapshot.candidate_id, slug);
                snapshots.push(snapshot);
            }
            None => warn!(artist_slug = %slug, "No score produced"),
        }
    }

    for (rank, snapshot) in BreakoutPotentialAggregator::rank_snapshots(snapshots)
        .iter()
        .enumerate()
    {
        let slug = slug_by_candidate
            .get(&snapshot.candidate_id)
            .map(String::as_str)
            .unwrap_or("unknown");
        info!(
            rank = rank + 1,
            artist_slug = %slug,
            composite_score = snapshot.composite_score,
            explanation = %snapshot.metadata.explanation,
            "Breakout potential"
        );
    }

    Ok(())
}
