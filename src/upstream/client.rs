//! Upstream REST client.
//!
//! # Responsibilities
//! - Build one GET per resource under the configured base URL
//! - Attach the fixed JSON headers and user agent
//! - Enforce the total request timeout
//! - Hand 200 bodies to the normalizer and validators
//!
//! A single attempt is made per call. Dropping the returned future aborts the
//! outbound request together with its timeout.

use std::fmt;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::records::{
    normalize, validate_barangs, validate_negaras, validate_pelabuhans, Barang, Negara, Pelabuhan,
};
use crate::upstream::error::{UpstreamError, UpstreamResult};

/// Resources exposed by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Negaras,
    Pelabuhans,
    Barangs,
}

impl Resource {
    /// Path segment under the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Negaras => "negaras",
            Resource::Pelabuhans => "pelabuhans",
            Resource::Barangs => "barangs",
        }
    }

    /// Query parameter carrying the filter value, if the resource takes one.
    pub fn filter_param(self) -> Option<&'static str> {
        match self {
            Resource::Negaras => None,
            Resource::Pelabuhans => Some("id_negara"),
            Resource::Barangs => Some("id_pelabuhan"),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Client for the upstream catalogue API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl UpstreamClient {
    /// Create a client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let timeout = Duration::from_secs(config.timeout_secs);
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(timeout)
            .build()
            .map_err(UpstreamError::Client)?;

        tracing::info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            "Upstream client initialized"
        );

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL for `resource`, with the filter value encoded as a query
    /// parameter when given.
    pub fn resource_url(&self, resource: Resource, filter: Option<&str>) -> UpstreamResult<Url> {
        let raw = format!("{}/{}", self.base_url, resource.path());
        let mut url = Url::parse(&raw).map_err(|source| UpstreamError::InvalidUrl {
            url: raw.clone(),
            source,
        })?;

        if let (Some(param), Some(value)) = (resource.filter_param(), filter) {
            url.query_pairs_mut().append_pair(param, value);
        }

        Ok(url)
    }

    /// Fetch all countries.
    pub async fn get_negaras(&self) -> UpstreamResult<Vec<Negara>> {
        let candidates = self.fetch::<Negara>(Resource::Negaras, None).await?;
        Ok(validate_negaras(candidates))
    }

    /// Fetch the ports owned by `id_negara`.
    pub async fn get_pelabuhans(&self, id_negara: &str) -> UpstreamResult<Vec<Pelabuhan>> {
        let candidates = self
            .fetch::<Pelabuhan>(Resource::Pelabuhans, Some(id_negara))
            .await?;
        Ok(validate_pelabuhans(candidates, id_negara))
    }

    /// Fetch the goods listed for `id_pelabuhan`.
    ///
    /// The upstream filter is applied as a string; callers holding a parsed
    /// port id should filter the result again.
    pub async fn get_barangs(&self, id_pelabuhan: &str) -> UpstreamResult<Vec<Barang>> {
        let candidates = self
            .fetch::<Barang>(Resource::Barangs, Some(id_pelabuhan))
            .await?;
        Ok(validate_barangs(candidates))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        resource: Resource,
        filter: Option<&str>,
    ) -> UpstreamResult<Vec<T>> {
        let url = self.resource_url(resource, filter)?;
        let start = Instant::now();

        tracing::info!(resource = %resource, url = %url, "Fetching from upstream");

        let response = match self.http.get(url.clone()).send().await {
            Ok(response) => response,
            Err(source) => {
                let err = UpstreamError::Transport {
                    url: url.to_string(),
                    source,
                };
                return Err(Self::fail(resource, start, err));
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            let err = UpstreamError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            };
            return Err(Self::fail(resource, start, err));
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(source) => {
                let err = UpstreamError::Body {
                    url: url.to_string(),
                    source,
                };
                return Err(Self::fail(resource, start, err));
            }
        };

        tracing::trace!(
            resource = %resource,
            body = %String::from_utf8_lossy(&body),
            "Upstream response body"
        );

        match normalize::<T>(&body) {
            Ok(shape) => {
                tracing::debug!(
                    resource = %resource,
                    records = shape.len(),
                    "Upstream response decoded"
                );
                metrics::record_upstream(resource.path(), "ok", start);
                Ok(shape.into_records())
            }
            Err(malformed) => Err(Self::fail(resource, start, malformed.into())),
        }
    }

    fn fail(resource: Resource, start: Instant, err: UpstreamError) -> UpstreamError {
        tracing::error!(
            resource = %resource,
            kind = err.kind(),
            error = %err,
            "Upstream call failed"
        );
        metrics::record_upstream(resource.path(), err.kind(), start);
        err
    }
}
