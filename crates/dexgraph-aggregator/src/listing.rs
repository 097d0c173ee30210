//! The upstream listing call that feeds the roster.

use dexgraph_types::{EntitySummary, ListingDocument};
use tracing::{debug, info};

use crate::error::TransportError;
use crate::fetch::{Fetcher, fetch_document};
use crate::routes::ApiRoutes;

/// Fetch up to `limit` entity summaries in a single call.
///
/// Only the first page is returned; `next` links are not followed.
///
/// # Errors
///
/// Returns [`TransportError`] if the listing fetch fails or is not a listing
/// document.
pub async fn list_summaries<F: Fetcher>(
    fetcher: &F,
    routes: &ApiRoutes,
    limit: u32,
) -> Result<Vec<EntitySummary>, TransportError> {
    let url = routes.listing_url(limit);
    let listing: ListingDocument = fetch_document(fetcher, &url).await?;

    if listing.next.is_some() {
        debug!(
            url = url,
            total = listing.count,
            "listing has further pages, not following"
        );
    }
    info!(
        requested = limit,
        returned = listing.results.len(),
        "entity listing fetched"
    );
    Ok(listing.results)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::fetch::MemoryFetcher;

    #[tokio::test]
    async fn returns_first_page_results() {
        let routes = ApiRoutes::new("http://api");
        let fetcher = MemoryFetcher::new().with(
            "http://api/pokemon?limit=2",
            serde_json::json!({
                "count": 1302,
                "next": "http://api/pokemon?offset=2&limit=2",
                "previous": null,
                "results": [
                    {"name": "bulbasaur", "url": "http://api/pokemon/1/"},
                    {"name": "ivysaur", "url": "http://api/pokemon/2/"}
                ]
            }),
        );

        let summaries = list_summaries(&fetcher, &routes, 2).await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].name, "ivysaur");
    }

    #[tokio::test]
    async fn listing_failure_propagates() {
        let routes = ApiRoutes::new("http://api");
        let fetcher = MemoryFetcher::new().fail("http://api/pokemon?limit=5", 500);
        let err = list_summaries(&fetcher, &routes, 5).await.unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 500, .. }));
    }
}
