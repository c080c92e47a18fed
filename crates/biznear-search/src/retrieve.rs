//! Retrieval strategy selection: dispatch a [`SearchIntent`] to the store.

use biznear_core::Business;

use crate::intent::{LocationFilter, SearchIntent};
use crate::store::{BusinessStore, DistrictQuery, GeoQuery, StoreError};

/// Execute the retrieval strategy the intent calls for and return unranked
/// candidates. Ordering is the assembler's concern, not this function's.
///
/// # Errors
///
/// Returns [`StoreError`] when the store call fails; an empty candidate list
/// is `Ok(vec![])`, never an error.
pub async fn retrieve<S: BusinessStore>(
    store: &S,
    intent: &SearchIntent,
) -> Result<Vec<Business>, StoreError> {
    match &intent.filter {
        LocationFilter::Radius {
            center,
            radius_meters,
        } => {
            let query = combined_query(&intent.free_text, intent.category.as_deref());
            tracing::debug!(%query, radius_meters, "running radius retrieval");
            store
                .geo_query(&GeoQuery {
                    center: *center,
                    query,
                    radius_meters: *radius_meters,
                })
                .await
        }
        LocationFilter::District { district } => {
            tracing::debug!(district, "running district retrieval");
            store
                .district_query(&DistrictQuery {
                    district: district.clone(),
                    free_text: non_empty(&intent.free_text),
                    category: intent.category.clone(),
                })
                .await
        }
    }
}

/// Space-join free text and category, omitting empty terms.
fn combined_query(free_text: &str, category: Option<&str>) -> String {
    let mut terms: Vec<&str> = Vec::with_capacity(2);
    if !free_text.trim().is_empty() {
        terms.push(free_text.trim());
    }
    if let Some(category) = category {
        if !category.trim().is_empty() {
            terms.push(category.trim());
        }
    }
    terms.join(" ")
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
