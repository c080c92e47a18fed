//! Result and outcome types handed to the presentation layer.

use biznear_core::Business;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Where a distance label came from.
///
/// Both variants render as text, but callers (and tests) can tell a real
/// travel estimate from a synthesized straight-line approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceSource {
    /// Real travel distance from the distance-matrix service.
    Measured,
    /// Straight-line haversine fallback.
    Estimated,
}

/// Distance annotation attached to a radius-mode result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceLabel {
    pub text: String,
    pub duration_text: Option<String>,
    pub source: DistanceSource,
}

/// A business plus its display-ready distance annotation.
///
/// District-mode results carry no annotation — there is no single origin
/// point to measure from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    pub business: Business,
    pub distance: Option<DistanceLabel>,
}

/// Successful search outcomes.
///
/// `Ranked(vec![])` is the explicit empty-state ("no matches, try widening
/// the radius") and must never be conflated with a retrieval failure.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Ranked(Vec<RankedResult>),
    /// No location could be resolved and none was supplied; the caller
    /// should obtain a device-location fix and retry.
    NeedDeviceLocation,
}

/// The only error that crosses the search boundary.
///
/// Enrichment failures are absorbed internally and never appear here.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("business store query failed: {0}")]
    Store(#[from] StoreError),
}
