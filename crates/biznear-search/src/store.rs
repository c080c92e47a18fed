//! The seam to the hosted business store.
//!
//! The store performs its own filtering; neither query is expected to rank.
//! A transport or backend failure is a [`StoreError`], distinct from an
//! empty candidate list, which is a valid outcome.

use std::future::Future;

use biznear_core::{Business, GeoPoint};
use thiserror::Error;

/// Radius-mode query: nearest-neighbor lookup around a coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoQuery {
    pub center: GeoPoint,
    /// Combined text query: free text plus category, space-joined, empty
    /// terms omitted.
    pub query: String,
    pub radius_meters: u32,
}

/// District-mode query: administrative text filter on the address field.
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictQuery {
    pub district: String,
    /// OR text match on name/category, when present.
    pub free_text: Option<String>,
    /// Exact-equality category filter, when present.
    pub category: Option<String>,
}

/// Errors from the business store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(String),

    #[error("store returned HTTP status {status}")]
    Status { status: u16 },

    #[error("failed to decode store response: {0}")]
    Decode(String),
}

/// Data-access contract for business candidates.
///
/// Radius results come back in store-defined order (not assumed sorted);
/// district results come back sorted by name ascending.
pub trait BusinessStore: Send + Sync {
    fn geo_query(
        &self,
        query: &GeoQuery,
    ) -> impl Future<Output = Result<Vec<Business>, StoreError>> + Send;

    fn district_query(
        &self,
        query: &DistrictQuery,
    ) -> impl Future<Output = Result<Vec<Business>, StoreError>> + Send;
}
