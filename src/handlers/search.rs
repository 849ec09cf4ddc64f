//! Developer search handlers
//!
//! Endpoint for location-based developer search and ranking.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Developer, SortKey};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for the developer search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_sort")]
    pub sort: String,
}

fn default_page() -> u32 {
    1
}

fn default_sort() -> String {
    SortKey::Stars.to_string()
}

/// A ranked developer in the response
#[derive(Debug, Serialize)]
pub struct DeveloperResponse {
    pub id: i64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub public_repos: i64,
    pub followers: i64,
    pub total_stars: i64,
}

impl From<Developer> for DeveloperResponse {
    fn from(d: Developer) -> Self {
        DeveloperResponse {
            id: d.id,
            login: d.login,
            avatar_url: d.avatar_url,
            html_url: d.html_url,
            bio: d.bio,
            location: d.location,
            public_repos: d.public_repos,
            followers: d.followers,
            total_stars: d.total_stars,
        }
    }
}

/// Response for a developer search
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub total_count: i64,
    pub items: Vec<DeveloperResponse>,
    pub page: u32,
    pub has_more: bool,
}

/// GET /search
///
/// Find developers in a location, ranked by the requested signal.
/// Unknown sort values fall back to stars instead of failing.
pub async fn search_developers(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let sort: SortKey = query.sort.parse().unwrap_or_default();

    let result = state
        .search_service
        .search_developers(&query.location, query.page, sort)
        .await?;

    Ok(Json(SearchResponse {
        total_count: result.total_count,
        page: result.page,
        has_more: result.has_more,
        items: result
            .items
            .into_iter()
            .map(DeveloperResponse::from)
            .collect(),
    }))
}
