//! Query interpretation: raw text plus optional selections → [`SearchIntent`].

use biznear_catalog::Catalog;
use biznear_core::GeoPoint;
use serde::Serialize;

/// Default radius when searching around a matched town. Tighter than the
/// device default since a town match pins the origin fairly precisely.
pub const TOWN_RADIUS_METERS: u32 = 3_000;
/// Default radius when searching around the device location.
pub const DEVICE_RADIUS_METERS: u32 = 5_000;
pub const MIN_RADIUS_METERS: u32 = 1_000;
pub const MAX_RADIUS_METERS: u32 = 50_000;

/// Raw search input as received from the presentation layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    pub raw: String,
    /// Town picked from a dropdown, overriding free-text detection.
    pub selected_town: Option<String>,
    /// Category picked from a dropdown, overriding free-text detection.
    pub selected_category: Option<String>,
    /// Last-known device coordinates, if the user allowed location access.
    pub device_location: Option<GeoPoint>,
    /// Caller-supplied radius override; clamped to the supported bounds.
    pub radius_meters: Option<u32>,
}

impl SearchRequest {
    #[must_use]
    pub fn from_text(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            ..Self::default()
        }
    }
}

/// Which retrieval strategy to run. Encodes the invariant that exactly one
/// of coordinates or district is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LocationFilter {
    Radius {
        center: GeoPoint,
        radius_meters: u32,
    },
    District {
        district: String,
    },
}

/// The parsed, immutable result of interpretation. Built once per search
/// request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchIntent {
    pub free_text: String,
    pub category: Option<String>,
    #[serde(flatten)]
    pub filter: LocationFilter,
}

/// Outcome of interpretation.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpretation {
    Intent(SearchIntent),
    /// No location could be resolved and none was supplied. Not an error:
    /// the caller should obtain a device-location fix and try again.
    NeedDeviceLocation,
}

/// Interpret a raw search request against the reference catalog.
///
/// Location resolution is priority-ordered, first match wins: explicit town
/// selection, then town name in the free text, then district name, then the
/// device location. Matched town/district substrings are stripped from the
/// free text before category detection; a matched category keyword stays in
/// the free text and is passed through as a query term as well.
#[must_use]
pub fn interpret(catalog: &Catalog, request: &SearchRequest) -> Interpretation {
    let mut remaining = request.raw.trim().to_string();

    let filter = if let Some(town) = request
        .selected_town
        .as_deref()
        .and_then(|name| catalog.town_named(name))
    {
        tracing::debug!(town = %town.name, "location from explicit town selection");
        radius_filter(town.location(), TOWN_RADIUS_METERS, request)
    } else if let Some(town) = catalog.find_town_in(&remaining) {
        tracing::debug!(town = %town.name, "location from town name in free text");
        let location = town.location();
        remaining = strip_first_match_ci(&remaining, &town.name);
        radius_filter(location, TOWN_RADIUS_METERS, request)
    } else if let Some(district) = catalog.find_district_in(&remaining) {
        tracing::debug!(district, "location from district name in free text");
        let district = district.to_string();
        remaining = strip_first_match_ci(&remaining, &district);
        LocationFilter::District { district }
    } else if let Some(location) = request.device_location {
        tracing::debug!("location from device fix");
        radius_filter(location, DEVICE_RADIUS_METERS, request)
    } else {
        return Interpretation::NeedDeviceLocation;
    };

    let category = match request.selected_category.as_deref() {
        Some(selected) => Some(
            catalog
                .category_named(selected)
                .map_or_else(|| selected.to_string(), |c| c.name.clone()),
        ),
        None => catalog
            .find_category_in(&remaining)
            .map(|c| c.name.clone()),
    };

    let free_text = collapse_whitespace(&remaining);

    Interpretation::Intent(SearchIntent {
        free_text,
        category,
        filter,
    })
}

fn radius_filter(center: GeoPoint, default_meters: u32, request: &SearchRequest) -> LocationFilter {
    let radius_meters = request
        .radius_meters
        .map_or(default_meters, |r| r.clamp(MIN_RADIUS_METERS, MAX_RADIUS_METERS));
    LocationFilter::Radius {
        center,
        radius_meters,
    }
}

/// Remove the first case-insensitive occurrence of `needle` from `haystack`.
///
/// Catalog names are ASCII, so the matched byte range is always on char
/// boundaries.
fn strip_first_match_ci(haystack: &str, needle: &str) -> String {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < n.len() {
        return haystack.to_string();
    }
    let start = (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n));
    match start {
        Some(i) => {
            let mut out = String::with_capacity(h.len() - n.len());
            out.push_str(&haystack[..i]);
            out.push_str(&haystack[i + n.len()..]);
            out
        }
        None => haystack.to_string(),
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
