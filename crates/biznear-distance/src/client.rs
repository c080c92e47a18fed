//! Distance-matrix HTTP client.

use std::time::Duration;

use biznear_core::GeoPoint;
use biznear_search::{DistanceError, MatrixElement, TravelMatrix};
use reqwest::{Client, Url};

use crate::types::{MatrixRequest, MatrixResponse, WirePoint};

/// Client for the travel-distance matrix service.
///
/// Use [`DistanceClient::new`] in production or point `base_url` at a mock
/// server in tests. Failures surface as [`DistanceError`]; the search
/// engine's enrichment step absorbs them into fallback labels.
pub struct DistanceClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl DistanceClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::Transport`] if `base_url` is invalid or the
    /// underlying `reqwest::Client` cannot be constructed.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, DistanceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("biznear/0.1 (distance-matrix)")
            .build()
            .map_err(|e| DistanceError::Transport(e.to_string()))?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| DistanceError::Transport(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    async fn post_matrix(&self, body: &MatrixRequest) -> Result<MatrixResponse, DistanceError> {
        let url = self
            .base_url
            .join("v1/matrix")
            .map_err(|e| DistanceError::Transport(e.to_string()))?;

        let mut request = self.client.post(url).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DistanceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DistanceError::Status {
                status: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| DistanceError::Transport(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| DistanceError::Decode(e.to_string()))
    }
}

impl TravelMatrix for DistanceClient {
    /// One batched call per search. The response's first row is consumed by
    /// positional index against `destinations`.
    async fn travel_matrix(
        &self,
        origin: GeoPoint,
        destinations: &[GeoPoint],
    ) -> Result<Vec<MatrixElement>, DistanceError> {
        let body = MatrixRequest {
            origins: vec![WirePoint {
                lat: origin.lat,
                lng: origin.lng,
            }],
            destinations: destinations
                .iter()
                .map(|p| WirePoint {
                    lat: p.lat,
                    lng: p.lng,
                })
                .collect(),
        };

        tracing::debug!(destinations = destinations.len(), "requesting distance matrix");
        let response = self.post_matrix(&body).await?;

        let row = response
            .rows
            .into_iter()
            .next()
            .ok_or_else(|| DistanceError::Decode("response carried no rows".to_string()))?;

        Ok(row
            .elements
            .into_iter()
            .map(|element| MatrixElement {
                distance_meters: element.distance_meters,
                distance_text: element.distance_text,
                duration_seconds: element.duration_seconds,
                duration_text: element.duration_text,
                ok: element.status == "OK",
            })
            .collect())
    }
}
