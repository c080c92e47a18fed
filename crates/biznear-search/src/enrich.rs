//! Distance enrichment for radius-mode candidates.
//!
//! One batched distance-matrix call per search, never one per candidate.
//! The destinations array preserves the exact candidate order and the
//! response is consumed by positional index only — never by identifier.
//! Every failure here is absorbed: a batch failure downgrades all
//! candidates to straight-line fallback labels, an element failure
//! downgrades that candidate alone.

use std::future::Future;

use biznear_core::{Business, GeoPoint};
use thiserror::Error;

use crate::types::{DistanceLabel, DistanceSource};

/// Errors from the distance-matrix service. Absorbed inside [`enrich`];
/// they never cross the search boundary.
#[derive(Debug, Error)]
pub enum DistanceError {
    #[error("distance service request failed: {0}")]
    Transport(String),

    #[error("distance service returned HTTP status {status}")]
    Status { status: u16 },

    #[error("failed to decode distance response: {0}")]
    Decode(String),
}

/// One row element of a distance-matrix response, positionally aligned to
/// the destinations array.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixElement {
    pub distance_meters: Option<u64>,
    pub distance_text: Option<String>,
    pub duration_seconds: Option<u64>,
    pub duration_text: Option<String>,
    /// False when the service reported a non-OK status for this element.
    pub ok: bool,
}

/// Batched 1:N travel-distance lookup.
pub trait TravelMatrix: Send + Sync {
    fn travel_matrix(
        &self,
        origin: GeoPoint,
        destinations: &[GeoPoint],
    ) -> impl Future<Output = Result<Vec<MatrixElement>, DistanceError>> + Send;
}

/// Annotate each candidate with a travel-distance label from `origin`.
///
/// Returns one label per candidate, in candidate order. Labels are
/// [`DistanceSource::Measured`] where the service answered for that index
/// and [`DistanceSource::Estimated`] (haversine) otherwise. The search
/// never fails because of this step.
pub async fn enrich<M: TravelMatrix>(
    matrix: &M,
    origin: GeoPoint,
    candidates: &[Business],
) -> Vec<DistanceLabel> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let destinations: Vec<GeoPoint> = candidates.iter().map(Business::location).collect();

    match matrix.travel_matrix(origin, &destinations).await {
        Ok(elements) => {
            if elements.len() != candidates.len() {
                tracing::warn!(
                    expected = candidates.len(),
                    got = elements.len(),
                    "distance matrix returned a short row; missing elements fall back"
                );
            }
            candidates
                .iter()
                .enumerate()
                .map(|(i, candidate)| {
                    elements
                        .get(i)
                        .and_then(measured_label)
                        .unwrap_or_else(|| fallback_label(origin, candidate))
                })
                .collect()
        }
        Err(error) => {
            tracing::warn!(
                error = %error,
                candidates = candidates.len(),
                "distance matrix call failed; using straight-line fallback"
            );
            candidates
                .iter()
                .map(|candidate| fallback_label(origin, candidate))
                .collect()
        }
    }
}

fn measured_label(element: &MatrixElement) -> Option<DistanceLabel> {
    if !element.ok {
        return None;
    }
    element.distance_text.as_ref().map(|text| DistanceLabel {
        text: text.clone(),
        duration_text: element.duration_text.clone(),
        source: DistanceSource::Measured,
    })
}

fn fallback_label(origin: GeoPoint, candidate: &Business) -> DistanceLabel {
    let meters = origin.haversine_meters(&candidate.location());
    DistanceLabel {
        text: format_approx_distance(meters),
        duration_text: None,
        source: DistanceSource::Estimated,
    }
}

/// Render a straight-line distance as an approximate label, e.g. `"~850 m"`
/// or `"~2.3 km"`.
fn format_approx_distance(meters: f64) -> String {
    if meters < 1_000.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = meters.round() as u64;
        format!("~{rounded} m")
    } else {
        format!("~{:.1} km", meters / 1_000.0)
    }
}
