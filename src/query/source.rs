//! Reqwest-backed access to the parks feature service.

use super::{Query, QueryLimits, SoqlParams};
use crate::core::config::DataSourceConfig;
use crate::data::park::{parse_feature_collection, ParkFeature};
use crate::{ParkMapError, Result};
use async_trait::async_trait;
use once_cell::sync::OnceCell;
use reqwest::{header, Client, Url};
use std::time::Duration;

/// Anything that can answer park queries
#[async_trait]
pub trait FeatureSource: Send + Sync {
    /// Runs `query` and returns the parsed records.
    ///
    /// Fails with a network error (transport failure or non-success status)
    /// or a parse error (body is not a park feature collection).
    async fn fetch_features(&self, query: &Query) -> Result<Vec<ParkFeature>>;
}

/// Feature source issuing HTTP GET requests against one dataset endpoint
pub struct HttpFeatureSource {
    /// Built on first use so construction never touches TLS setup
    client: OnceCell<Client>,
    endpoint: Url,
    limits: QueryLimits,
    timeout: Duration,
    user_agent: String,
}

impl HttpFeatureSource {
    pub fn new(config: &DataSourceConfig) -> Result<Self> {
        Ok(Self {
            client: OnceCell::new(),
            endpoint: config.endpoint_url()?,
            limits: config.limits(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
        })
    }

    /// Uses a caller-provided client instead of building one
    pub fn with_client(client: Client, endpoint: Url, limits: QueryLimits) -> Self {
        Self {
            client: OnceCell::with_value(client),
            endpoint,
            limits,
            timeout: Duration::from_secs(30),
            user_agent: String::new(),
        }
    }

    /// Full request URL for `query`
    pub fn request_url(&self, query: &Query) -> Url {
        SoqlParams::for_query(query, &self.limits).to_url(&self.endpoint)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn client(&self) -> Result<&Client> {
        self.client.get_or_try_init(|| {
            Client::builder()
                .user_agent(self.user_agent.as_str())
                .timeout(self.timeout)
                .build()
                .map_err(ParkMapError::from)
        })
    }
}

#[async_trait]
impl FeatureSource for HttpFeatureSource {
    async fn fetch_features(&self, query: &Query) -> Result<Vec<ParkFeature>> {
        let url = self.request_url(query);
        log::debug!("fetching parks: {}", url);

        let response = self
            .client()?
            .get(url)
            .header(header::ACCEPT, "application/geo+json, application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("park query failed with status {}", status);
            return Err(ParkMapError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parks = parse_feature_collection(&body)?;
        log::debug!("received {} park records ({} bytes)", parks.len(), body.len());
        Ok(parks)
    }
}
