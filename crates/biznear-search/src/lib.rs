//! Nearby-search resolution and ranking engine.
//!
//! Turns a raw search string (which may embed a town, district, or category
//! name) into a structured [`SearchIntent`], executes the matching retrieval
//! strategy against the business store, annotates radius-mode candidates with
//! real travel distance, and assembles the final ranked list.
//!
//! Within one search the steps run strictly in sequence: interpret →
//! retrieve → enrich → assemble. Only retrieval and enrichment suspend;
//! interpretation and assembly are pure. Enrichment failures never fail the
//! search — they degrade to straight-line fallback labels.

mod assemble;
mod enrich;
mod intent;
mod pipeline;
mod retrieve;
mod session;
mod store;
mod types;

pub use assemble::assemble;
pub use enrich::{enrich, DistanceError, MatrixElement, TravelMatrix};
pub use intent::{
    interpret, Interpretation, LocationFilter, SearchIntent, SearchRequest,
    DEVICE_RADIUS_METERS, MAX_RADIUS_METERS, MIN_RADIUS_METERS, TOWN_RADIUS_METERS,
};
pub use pipeline::{run_search, Searcher};
pub use retrieve::retrieve;
pub use session::{SearchSession, SearchTicket};
pub use store::{BusinessStore, DistrictQuery, GeoQuery, StoreError};
pub use types::{DistanceLabel, DistanceSource, RankedResult, SearchError, SearchOutcome};

#[cfg(test)]
pub(crate) mod testutil {
    use std::sync::Mutex;

    use biznear_core::{Business, GeoPoint};

    use crate::enrich::{DistanceError, MatrixElement, TravelMatrix};
    use crate::store::{BusinessStore, DistrictQuery, GeoQuery, StoreError};

    pub fn business(name: &str, lat: f64, lng: f64) -> Business {
        Business {
            id: uuid::Uuid::new_v4(),
            name: name.to_string(),
            category: "Health & Medical".to_string(),
            address: format!("{name} Road, Jaffna"),
            phone: None,
            website: None,
            rating: Some(4.2),
            reviews_count: 12,
            image_url: None,
            latitude: lat,
            longitude: lng,
        }
    }

    /// In-memory store that returns a canned response and records queries.
    pub struct FakeStore {
        pub businesses: Vec<Business>,
        pub fail: bool,
        pub seen_geo: Mutex<Vec<GeoQuery>>,
        pub seen_district: Mutex<Vec<DistrictQuery>>,
    }

    impl FakeStore {
        pub fn returning(businesses: Vec<Business>) -> Self {
            Self {
                businesses,
                fail: false,
                seen_geo: Mutex::new(Vec::new()),
                seen_district: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                businesses: Vec::new(),
                fail: true,
                seen_geo: Mutex::new(Vec::new()),
                seen_district: Mutex::new(Vec::new()),
            }
        }
    }

    impl BusinessStore for FakeStore {
        async fn geo_query(&self, query: &GeoQuery) -> Result<Vec<Business>, StoreError> {
            self.seen_geo.lock().unwrap().push(query.clone());
            if self.fail {
                return Err(StoreError::Transport("connection refused".to_string()));
            }
            Ok(self.businesses.clone())
        }

        async fn district_query(&self, query: &DistrictQuery) -> Result<Vec<Business>, StoreError> {
            self.seen_district.lock().unwrap().push(query.clone());
            if self.fail {
                return Err(StoreError::Transport("connection refused".to_string()));
            }
            Ok(self.businesses.clone())
        }
    }

    /// Travel-matrix stub with a canned batch outcome.
    pub struct FakeMatrix {
        pub outcome: Result<Vec<MatrixElement>, DistanceError>,
        pub seen_destinations: Mutex<Vec<Vec<GeoPoint>>>,
    }

    impl FakeMatrix {
        pub fn succeeding(elements: Vec<MatrixElement>) -> Self {
            Self {
                outcome: Ok(elements),
                seen_destinations: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                outcome: Err(DistanceError::Transport("timed out".to_string())),
                seen_destinations: Mutex::new(Vec::new()),
            }
        }
    }

    impl TravelMatrix for FakeMatrix {
        async fn travel_matrix(
            &self,
            _origin: GeoPoint,
            destinations: &[GeoPoint],
        ) -> Result<Vec<MatrixElement>, DistanceError> {
            self.seen_destinations
                .lock()
                .unwrap()
                .push(destinations.to_vec());
            match &self.outcome {
                Ok(elements) => Ok(elements.clone()),
                Err(DistanceError::Transport(msg)) => {
                    Err(DistanceError::Transport(msg.clone()))
                }
                Err(DistanceError::Status { status }) => {
                    Err(DistanceError::Status { status: *status })
                }
                Err(DistanceError::Decode(msg)) => Err(DistanceError::Decode(msg.clone())),
            }
        }
    }

    pub fn measured_element(distance_text: &str, duration_text: &str) -> MatrixElement {
        MatrixElement {
            distance_meters: Some(1_200),
            distance_text: Some(distance_text.to_string()),
            duration_seconds: Some(240),
            duration_text: Some(duration_text.to_string()),
            ok: true,
        }
    }
}
