//! The end-to-end search pipeline and the embeddable [`Searcher`].

use biznear_catalog::Catalog;

use crate::assemble::assemble;
use crate::enrich::{enrich, TravelMatrix};
use crate::intent::{interpret, Interpretation, LocationFilter, SearchRequest};
use crate::retrieve::retrieve;
use crate::session::SearchSession;
use crate::store::BusinessStore;
use crate::types::{SearchError, SearchOutcome};

/// Run one search end to end: interpret → retrieve → enrich → assemble.
///
/// Steps are strictly sequential; only retrieval and enrichment await.
/// Enrichment runs for radius mode only and its failures degrade to
/// fallback labels rather than failing the search.
///
/// # Errors
///
/// Returns [`SearchError::Store`] when the business store call fails. Zero
/// candidates is `Ok(SearchOutcome::Ranked(vec![]))`, not an error.
pub async fn run_search<S, M>(
    catalog: &Catalog,
    store: &S,
    matrix: &M,
    request: &SearchRequest,
) -> Result<SearchOutcome, SearchError>
where
    S: BusinessStore,
    M: TravelMatrix,
{
    let intent = match interpret(catalog, request) {
        Interpretation::Intent(intent) => intent,
        Interpretation::NeedDeviceLocation => {
            tracing::debug!("no location resolved; deferring to caller for a device fix");
            return Ok(SearchOutcome::NeedDeviceLocation);
        }
    };

    let candidates = retrieve(store, &intent).await?;
    if candidates.is_empty() {
        tracing::debug!("retrieval returned zero candidates");
        return Ok(SearchOutcome::Ranked(Vec::new()));
    }

    let labels = match intent.filter {
        LocationFilter::Radius { center, .. } => enrich(matrix, center, &candidates).await,
        LocationFilter::District { .. } => Vec::new(),
    };

    Ok(SearchOutcome::Ranked(assemble(candidates, labels)))
}

/// One user's search surface: catalog, store and matrix clients, plus
/// last-search-wins suppression of stale in-flight results.
pub struct Searcher<S, M> {
    catalog: Catalog,
    store: S,
    matrix: M,
    session: SearchSession,
}

impl<S, M> Searcher<S, M>
where
    S: BusinessStore,
    M: TravelMatrix,
{
    #[must_use]
    pub fn new(catalog: Catalog, store: S, matrix: M) -> Self {
        Self {
            catalog,
            store,
            matrix,
            session: SearchSession::new(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run a search, discarding the result if a newer search began while
    /// this one was in flight. `None` means superseded — the caller should
    /// simply drop it and wait for the newer search to land.
    pub async fn search(
        &self,
        request: &SearchRequest,
    ) -> Option<Result<SearchOutcome, SearchError>> {
        let ticket = self.session.begin();
        let result = run_search(&self.catalog, &self.store, &self.matrix, request).await;
        if self.session.accept(ticket) {
            Some(result)
        } else {
            tracing::debug!("discarding superseded search result");
            None
        }
    }
}
