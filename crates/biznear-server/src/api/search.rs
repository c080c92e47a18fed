//! The search endpoint: the presentation boundary of the search core.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use biznear_core::GeoPoint;
use biznear_search::{run_search, RankedResult, SearchOutcome, SearchRequest};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    q: Option<String>,
    town: Option<String>,
    category: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    radius: Option<u32>,
}

/// Discriminated search outcome, one of the four states the presentation
/// layer renders: results, empty, need-location, or (via `ApiError`) a
/// retrieval failure.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub(super) enum SearchData {
    Results { results: Vec<SearchResultItem> },
    Empty,
    NeedLocation,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchResultItem {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f32>,
    pub reviews_count: u32,
    pub image_url: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_text: Option<String>,
    pub duration_text: Option<String>,
    /// True when the distance label is a straight-line approximation rather
    /// than a measured travel distance. Absent in district mode.
    pub distance_estimated: Option<bool>,
}

impl From<RankedResult> for SearchResultItem {
    fn from(result: RankedResult) -> Self {
        let business = result.business;
        let (distance_text, duration_text, distance_estimated) = match result.distance {
            Some(label) => (
                Some(label.text),
                label.duration_text,
                Some(label.source == biznear_search::DistanceSource::Estimated),
            ),
            None => (None, None, None),
        };
        Self {
            id: business.id,
            name: business.name,
            category: business.category,
            address: business.address,
            phone: business.phone,
            website: business.website,
            rating: business.rating,
            reviews_count: business.reviews_count,
            image_url: business.image_url,
            latitude: business.latitude,
            longitude: business.longitude,
            distance_text,
            duration_text,
            distance_estimated,
        }
    }
}

pub(super) async fn search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<SearchData>>, ApiError> {
    let device_location = match (params.lat, params.lng) {
        (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
        (None, None) => None,
        _ => {
            return Err(ApiError::new(
                req_id.0,
                "validation_error",
                "lat and lng must be supplied together",
            ));
        }
    };

    let request = SearchRequest {
        raw: params.q.unwrap_or_default(),
        selected_town: params.town,
        selected_category: params.category,
        device_location,
        radius_meters: params.radius,
    };

    let outcome = run_search(
        state.catalog.as_ref(),
        state.store.as_ref(),
        state.matrix.as_ref(),
        &request,
    )
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "search retrieval failed");
        ApiError::new(
            req_id.0.clone(),
            "retrieval_failed",
            "the business store could not be reached; please try again",
        )
    })?;

    let data = match outcome {
        SearchOutcome::Ranked(results) if results.is_empty() => SearchData::Empty,
        SearchOutcome::Ranked(results) => SearchData::Results {
            results: results.into_iter().map(SearchResultItem::from).collect(),
        },
        SearchOutcome::NeedDeviceLocation => SearchData::NeedLocation,
    };

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
