//! HTTP Context Provider
//!
//! JSON-over-HTTP adapter for the upstream context services. Each service
//! exposes `GET {base_url}/artists/{slug}/{resource}`:
//!
//! | Provider        | Resource           |
//! |-----------------|--------------------|
//! | coverage        | `coverage`         |
//! | industry graph  | `neighborhood`     |
//! | scene trends    | `scenes`           |
//! | creative        | `creative-summary` |
//!
//! A 404 means the service knows nothing about the artist. Timeouts are
//! enforced by the HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::domain::entities::artist_context::{
    CoverageContext, CreativeSummary, GraphNeighborhood, SceneContext,
};
use crate::domain::errors::ProviderError;
use crate::domain::repositories::context_provider::{
    CoverageProvider, CreativeSummaryProvider, IndustryGraphProvider, ProviderResult,
    SceneTrendProvider,
};

pub const COVERAGE_RESOURCE: &str = "coverage";
pub const NEIGHBORHOOD_RESOURCE: &str = "neighborhood";
pub const SCENES_RESOURCE: &str = "scenes";
pub const CREATIVE_SUMMARY_RESOURCE: &str = "creative-summary";

/// Build `{base_url}/artists/{artist_slug}/{resource}`, percent-encoding the slug
pub fn resource_url(
    base_url: &Url,
    artist_slug: &str,
    resource: &str,
) -> Result<Url, ProviderError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| ProviderError::Request(format!("Invalid provider base URL: {}", base_url)))?
        .pop_if_empty()
        .extend(["artists", artist_slug, resource]);
    Ok(url)
}

fn request_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Request(e.to_string())
    }
}

/// One upstream service reachable over HTTP
///
/// Implements every provider trait; which one is used depends on the base
/// URL it is pointed at.
#[derive(Debug, Clone)]
pub struct HttpContextProvider {
    client: Client,
    base_url: Url,
}

impl HttpContextProvider {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn fetch_resource<T: DeserializeOwned>(
        &self,
        artist_slug: &str,
        resource: &str,
    ) -> ProviderResult<T> {
        let url = resource_url(&self.base_url, artist_slug, resource)?;
        debug!(artist_slug = %artist_slug, url = %url, "Fetching provider resource");

        let response = self.client.get(url).send().await.map_err(request_error)?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let data = response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout
            } else {
                ProviderError::Decode(e.to_string())
            }
        })?;

        Ok(Some(data))
    }
}

#[async_trait]
impl CoverageProvider for HttpContextProvider {
    async fn fetch_coverage(&self, artist_slug: &str) -> ProviderResult<CoverageContext> {
        self.fetch_resource(artist_slug, COVERAGE_RESOURCE).await
    }
}

#[async_trait]
impl IndustryGraphProvider for HttpContextProvider {
    async fn fetch_neighborhood(&self, artist_slug: &str) -> ProviderResult<GraphNeighborhood> {
        self.fetch_resource(artist_slug, NEIGHBORHOOD_RESOURCE).await
    }
}

#[async_trait]
impl SceneTrendProvider for HttpContextProvider {
    async fn fetch_scenes(&self, artist_slug: &str) -> ProviderResult<SceneContext> {
        self.fetch_resource(artist_slug, SCENES_RESOURCE).await
    }
}

#[async_trait]
impl CreativeSummaryProvider for HttpContextProvider {
    async fn fetch_creative_summary(&self, artist_slug: &str) -> ProviderResult<CreativeSummary> {
        self.fetch_resource(artist_slug, CREATIVE_SUMMARY_RESOURCE).await
    }
}
