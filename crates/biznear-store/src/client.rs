//! Business-store HTTP client.

use std::time::Duration;

use biznear_core::Business;
use biznear_search::{BusinessStore, DistrictQuery, GeoQuery, StoreError};
use reqwest::{Client, Url};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct BusinessesResponse {
    businesses: Vec<Business>,
}

/// Client for the hosted business-store REST API.
///
/// Use [`HttpBusinessStore::new`] in production or point `base_url` at a
/// mock server in tests.
pub struct HttpBusinessStore {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl HttpBusinessStore {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Transport`] if `base_url` is invalid or the
    /// underlying `reqwest::Client` cannot be constructed.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("biznear/0.1 (business-directory)")
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| StoreError::Transport(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    async fn get_businesses(&self, url: Url) -> Result<Vec<Business>, StoreError> {
        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        let parsed: BusinessesResponse =
            serde_json::from_str(&text).map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(parsed.businesses)
    }

    fn endpoint(&self, segment: &str) -> Result<Url, StoreError> {
        self.base_url
            .join(segment)
            .map_err(|e| StoreError::Transport(e.to_string()))
    }
}

impl BusinessStore for HttpBusinessStore {
    async fn geo_query(&self, query: &GeoQuery) -> Result<Vec<Business>, StoreError> {
        let mut url = self.endpoint("v1/businesses/nearby")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("lat", &query.center.lat.to_string());
            pairs.append_pair("lng", &query.center.lng.to_string());
            pairs.append_pair("q", &query.query);
            pairs.append_pair("radius", &query.radius_meters.to_string());
        }
        tracing::debug!(radius = query.radius_meters, q = %query.query, "geo query");
        self.get_businesses(url).await
    }

    async fn district_query(&self, query: &DistrictQuery) -> Result<Vec<Business>, StoreError> {
        let mut url = self.endpoint("v1/businesses")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("district", &query.district);
            if let Some(free_text) = &query.free_text {
                pairs.append_pair("q", free_text);
            }
            if let Some(category) = &query.category {
                pairs.append_pair("category", category);
            }
        }
        tracing::debug!(district = %query.district, "district query");
        self.get_businesses(url).await
    }
}
