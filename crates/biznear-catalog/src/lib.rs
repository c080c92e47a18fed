//! Static reference catalogs: towns, districts, and business categories.
//!
//! Loaded once per process and never mutated afterwards. Matching scans the
//! tables in declaration order and the first satisfying entry wins — no
//! scoring, no longest-match preference. Callers that stack lookups rely on
//! that fixed order for reproducible results.

mod data;
mod file;

pub use file::load_catalog_file;

use biznear_core::GeoPoint;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A town with known coordinates, belonging to one district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Town {
    pub name: String,
    pub district: String,
    pub lat: f64,
    pub lng: f64,
}

impl Town {
    #[must_use]
    pub const fn location(&self) -> GeoPoint {
        GeoPoint {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// A business category with keyword synonyms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Errors raised while loading or validating a catalog override file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}

/// The read-only reference catalog used for text-to-intent matching.
#[derive(Debug, Clone)]
pub struct Catalog {
    towns: Vec<Town>,
    districts: Vec<String>,
    categories: Vec<Category>,
}

impl Catalog {
    /// The embedded Sri Lanka catalog.
    #[must_use]
    pub fn embedded() -> Self {
        let towns = data::TOWNS
            .iter()
            .map(|&(name, district, lat, lng)| Town {
                name: name.to_string(),
                district: district.to_string(),
                lat,
                lng,
            })
            .collect();
        let districts = data::DISTRICTS.iter().map(|d| (*d).to_string()).collect();
        let categories = data::CATEGORIES
            .iter()
            .map(|&(name, keywords)| Category {
                name: name.to_string(),
                keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            })
            .collect();
        Self {
            towns,
            districts,
            categories,
        }
    }

    pub(crate) fn from_parts(
        towns: Vec<Town>,
        districts: Vec<String>,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            towns,
            districts,
            categories,
        }
    }

    #[must_use]
    pub fn towns(&self) -> &[Town] {
        &self.towns
    }

    #[must_use]
    pub fn districts(&self) -> &[String] {
        &self.districts
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Exact town lookup by name, case-insensitive.
    #[must_use]
    pub fn town_named(&self, name: &str) -> Option<&Town> {
        self.towns
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Exact category lookup by canonical name, case-insensitive.
    #[must_use]
    pub fn category_named(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    /// First town whose name appears inside `text` (case-insensitive
    /// substring containment), in declaration order.
    #[must_use]
    pub fn find_town_in(&self, text: &str) -> Option<&Town> {
        let haystack = text.to_lowercase();
        self.towns
            .iter()
            .find(|t| haystack.contains(&t.name.to_lowercase()))
    }

    /// First district whose name appears inside `text`, in declaration order.
    #[must_use]
    pub fn find_district_in(&self, text: &str) -> Option<&str> {
        let haystack = text.to_lowercase();
        self.districts
            .iter()
            .find(|d| haystack.contains(&d.to_lowercase()))
            .map(String::as_str)
    }

    /// First category whose canonical name or any keyword synonym appears
    /// inside `text`, in declaration order.
    #[must_use]
    pub fn find_category_in(&self, text: &str) -> Option<&Category> {
        let haystack = text.to_lowercase();
        if haystack.trim().is_empty() {
            return None;
        }
        self.categories.iter().find(|c| {
            haystack.contains(&c.name.to_lowercase())
                || c.keywords
                    .iter()
                    .any(|k| haystack.contains(&k.to_lowercase()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_has_25_districts() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.districts().len(), 25);
    }

    #[test]
    fn jaffna_city_coordinates_are_pinned() {
        let catalog = Catalog::embedded();
        let town = catalog.town_named("Jaffna City").expect("town exists");
        assert_eq!(town.district, "Jaffna");
        assert!((town.lat - 9.6615).abs() < 1e-9);
        assert!((town.lng - 80.0070).abs() < 1e-9);
    }

    #[test]
    fn every_town_belongs_to_a_known_district() {
        let catalog = Catalog::embedded();
        for town in catalog.towns() {
            assert!(
                catalog.districts().contains(&town.district),
                "town {} references unknown district {}",
                town.name,
                town.district
            );
        }
    }

    #[test]
    fn town_names_never_equal_district_names() {
        // Otherwise the district scan would be unreachable for those inputs.
        let catalog = Catalog::embedded();
        for town in catalog.towns() {
            assert!(
                !catalog
                    .districts()
                    .iter()
                    .any(|d| d.eq_ignore_ascii_case(&town.name)),
                "town name {} shadows a district",
                town.name
            );
        }
    }

    #[test]
    fn find_town_in_is_case_insensitive_substring() {
        let catalog = Catalog::embedded();
        let town = catalog.find_town_in("best dentist JAFFNA CITY").expect("match");
        assert_eq!(town.name, "Jaffna City");
    }

    #[test]
    fn find_district_in_matches_when_no_town_does() {
        let catalog = Catalog::embedded();
        assert!(catalog.find_town_in("hotel Kandy").is_none());
        assert_eq!(catalog.find_district_in("hotel Kandy"), Some("Kandy"));
    }

    #[test]
    fn clinic_keyword_maps_to_health_and_medical() {
        let catalog = Catalog::embedded();
        let category = catalog.find_category_in("clinic near me").expect("match");
        assert_eq!(category.name, "Health & Medical");
    }

    #[test]
    fn category_scan_honours_declaration_order() {
        // "bakery restaurant" hits Restaurants & Cafes first even though both
        // words are keywords of the same entry; an input spanning two entries
        // resolves to the earlier one.
        let catalog = Catalog::embedded();
        let category = catalog
            .find_category_in("hotel with restaurant")
            .expect("match");
        assert_eq!(category.name, "Restaurants & Cafes");
    }

    #[test]
    fn empty_text_matches_no_category() {
        let catalog = Catalog::embedded();
        assert!(catalog.find_category_in("   ").is_none());
    }
}
