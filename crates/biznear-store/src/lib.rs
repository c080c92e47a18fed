//! HTTP client for the hosted business-store backend.
//!
//! Implements the [`biznear_search::BusinessStore`] seam of the search
//! engine against the
//! backend's REST API. The backend owns all filtering: the geo endpoint is
//! distance-bounded around a center point, the district endpoint filters the
//! address field and sorts by name ascending.

mod client;

pub use client::HttpBusinessStore;
