//! Core business entity, as stored by the hosted backend.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::GeoPoint;

/// A business listing. Read-only to the search core; the backend owns
/// creation and mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
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
}

impl Business {
    /// The listing's coordinates as a [`GeoPoint`].
    #[must_use]
    pub const fn location(&self) -> GeoPoint {
        GeoPoint {
            lat: self.latitude,
            lng: self.longitude,
        }
    }
}
