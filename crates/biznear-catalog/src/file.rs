//! Optional YAML override for the embedded catalog.
//!
//! Deployments outside the default region supply their own towns, districts,
//! and categories via `BIZNEAR_CATALOG_PATH`. The file replaces the embedded
//! tables wholesale; entry order in the file becomes the scan order.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::{Catalog, CatalogError, Category, Town};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    towns: Vec<TownEntry>,
    districts: Vec<String>,
    categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
struct TownEntry {
    name: String,
    district: String,
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    name: String,
    #[serde(default)]
    keywords: Vec<String>,
}

/// Load and validate a catalog override from a YAML file.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_catalog_file(path: &Path) -> Result<Catalog, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let file: CatalogFile = serde_yaml::from_str(&content)?;
    validate(&file)?;

    let towns = file
        .towns
        .into_iter()
        .map(|t| Town {
            name: t.name,
            district: t.district,
            lat: t.lat,
            lng: t.lng,
        })
        .collect();
    let categories = file
        .categories
        .into_iter()
        .map(|c| Category {
            name: c.name,
            keywords: c.keywords,
        })
        .collect();

    Ok(Catalog::from_parts(towns, file.districts, categories))
}

fn validate(file: &CatalogFile) -> Result<(), CatalogError> {
    if file.districts.is_empty() {
        return Err(CatalogError::Validation(
            "catalog must declare at least one district".to_string(),
        ));
    }

    let mut seen_districts = HashSet::new();
    for district in &file.districts {
        if district.trim().is_empty() {
            return Err(CatalogError::Validation(
                "district name must be non-empty".to_string(),
            ));
        }
        if !seen_districts.insert(district.to_lowercase()) {
            return Err(CatalogError::Validation(format!(
                "duplicate district name: '{district}'"
            )));
        }
    }

    let mut seen_towns = HashSet::new();
    for town in &file.towns {
        if town.name.trim().is_empty() {
            return Err(CatalogError::Validation(
                "town name must be non-empty".to_string(),
            ));
        }
        if !seen_towns.insert(town.name.to_lowercase()) {
            return Err(CatalogError::Validation(format!(
                "duplicate town name: '{}'",
                town.name
            )));
        }
        if !seen_districts.contains(&town.district.to_lowercase()) {
            return Err(CatalogError::Validation(format!(
                "town '{}' references unknown district '{}'",
                town.name, town.district
            )));
        }
        if !(-90.0..=90.0).contains(&town.lat) || !(-180.0..=180.0).contains(&town.lng) {
            return Err(CatalogError::Validation(format!(
                "town '{}' has out-of-range coordinates",
                town.name
            )));
        }
    }

    let mut seen_categories = HashSet::new();
    for category in &file.categories {
        if category.name.trim().is_empty() {
            return Err(CatalogError::Validation(
                "category name must be non-empty".to_string(),
            ));
        }
        if !seen_categories.insert(category.name.to_lowercase()) {
            return Err(CatalogError::Validation(format!(
                "duplicate category name: '{}'",
                category.name
            )));
        }
    }

    Ok(())
}
