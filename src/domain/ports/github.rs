//! GitHub client port trait
//!
//! Defines the interface for interacting with the GitHub REST API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GithubError;

/// Minimal user identity returned by the user search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubUser {
    pub id: i64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

/// Full user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubUserDetail {
    pub id: i64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub public_repos: i64,
    pub followers: i64,
}

/// Repository star count, only kept long enough to compute per-user sums
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubRepo {
    pub stargazers_count: i64,
}

/// One page of user search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSearchPage {
    pub total_count: i64,
    pub items: Vec<GithubUser>,
}

/// Port trait for GitHub API operations
#[async_trait]
pub trait GithubClient: Send + Sync {
    /// Search users by location, one fixed-size page at a time.
    ///
    /// Results come back pre-sorted by the upstream's repository count;
    /// callers re-rank them after enrichment.
    async fn search_users_by_location(
        &self,
        location: &str,
        page: u32,
    ) -> Result<UserSearchPage, GithubError>;

    /// Get a user's full profile by login
    async fn get_user(&self, login: &str) -> Result<GithubUserDetail, GithubError>;

    /// List a user's most-starred repositories, capped at `MAX_REPOS_PER_USER`
    async fn list_top_repos(&self, login: &str) -> Result<Vec<GithubRepo>, GithubError>;
}
