//! Wire types for the distance-matrix service.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct MatrixRequest {
    pub origins: Vec<WirePoint>,
    /// Order-significant: the service answers by position, not identifier.
    pub destinations: Vec<WirePoint>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct WirePoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MatrixResponse {
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MatrixRow {
    pub elements: Vec<WireElement>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireElement {
    pub distance_meters: Option<u64>,
    pub distance_text: Option<String>,
    pub duration_seconds: Option<u64>,
    pub duration_text: Option<String>,
    pub status: String,
}
