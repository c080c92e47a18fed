//! Final assembly: merge candidates with their distance labels.

use biznear_core::Business;

use crate::types::{DistanceLabel, RankedResult};

/// Zip candidates with their enrichment labels into the final list.
///
/// Labels align with candidates by position. An empty label list (district
/// mode, or no enrichment) leaves every result unannotated. The store's
/// returned order is preserved as-is: radius results keep store order with
/// labels attached, district results keep the store's name-ascending order.
#[must_use]
pub fn assemble(candidates: Vec<Business>, labels: Vec<DistanceLabel>) -> Vec<RankedResult> {
    if labels.is_empty() {
        return candidates
            .into_iter()
            .map(|business| RankedResult {
                business,
                distance: None,
            })
            .collect();
    }

    candidates
        .into_iter()
        .enumerate()
        .map(|(i, business)| RankedResult {
            business,
            distance: labels.get(i).cloned(),
        })
        .collect()
}
