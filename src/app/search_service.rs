//! Developer search service
//!
//! Orchestrates a location search: one upstream user search, a concurrent
//! per-user enrichment fan-out, star-sum reduction, and the final ranking.

use std::sync::Arc;

use futures::future::join_all;

use crate::app::{MAX_SEARCH_PAGES, RESULTS_PER_PAGE};
use crate::domain::entities::{Developer, DeveloperSearch, Enrichment, SortKey};
use crate::domain::ports::{GithubClient, GithubUser};
use crate::error::AppError;

/// Service producing ranked developer lists for a location
pub struct SearchService<GC>
where
    GC: GithubClient,
{
    github: Arc<GC>,
}

impl<GC> SearchService<GC>
where
    GC: GithubClient,
{
    pub fn new(github: Arc<GC>) -> Self {
        Self { github }
    }

    /// Search developers in `location` and rank them by `sort`.
    ///
    /// Validation failures and a failed search call abort the request.
    /// Per-user enrichment failures degrade to placeholder records and
    /// never fail the batch.
    pub async fn search_developers(
        &self,
        location: &str,
        page: u32,
        sort: SortKey,
    ) -> Result<DeveloperSearch, AppError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(AppError::Validation(
                "location parameter is required".to_string(),
            ));
        }
        if page == 0 {
            return Err(AppError::Validation(
                "page must be a positive integer".to_string(),
            ));
        }
        if page > MAX_SEARCH_PAGES {
            return Err(AppError::Validation(format!(
                "page cannot exceed {}",
                MAX_SEARCH_PAGES
            )));
        }

        let search = self.github.search_users_by_location(location, page).await?;
        let fetched = search.items.len();

        // One enrichment pipeline per user; the join waits for every
        // pipeline to settle, success or degraded.
        let enrichments =
            join_all(search.items.into_iter().map(|summary| self.enrich(summary))).await;

        let mut items: Vec<Developer> = enrichments.into_iter().map(Developer::from).collect();
        // Stable sort: ties keep the upstream's ordering
        items.sort_by(|a, b| b.signal(sort).cmp(&a.signal(sort)));

        Ok(DeveloperSearch {
            total_count: search.total_count,
            items,
            page,
            has_more: fetched == RESULTS_PER_PAGE as usize && page < MAX_SEARCH_PAGES,
        })
    }

    /// Enrich one search summary with profile details and a star sum.
    ///
    /// A failed profile fetch degrades the record to the bare summary; a
    /// failed repository listing only zeroes the star sum.
    async fn enrich(&self, summary: GithubUser) -> Enrichment {
        let detail = match self.github.get_user(&summary.login).await {
            Ok(detail) => detail,
            Err(e) => {
                tracing::warn!("Failed to fetch user {}: {}", summary.login, e);
                return Enrichment::Degraded { summary };
            }
        };

        let total_stars = match self.github.list_top_repos(&summary.login).await {
            Ok(repos) => repos.iter().map(|r| r.stargazers_count).sum(),
            Err(e) => {
                tracing::warn!("Failed to fetch repos for {}: {}", summary.login, e);
                0
            }
        };

        Enrichment::Success {
            detail,
            total_stars,
        }
    }
}
