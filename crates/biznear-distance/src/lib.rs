//! HTTP client for the external distance-matrix service.
//!
//! Implements the [`biznear_search::TravelMatrix`] seam of the search
//! engine. One request
//! carries one origin and N order-significant destinations; the response
//! elements are positionally aligned to the destinations array.

mod client;
mod types;

pub use client::DistanceClient;
