//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::ports::{GithubRepo, GithubUser, GithubUserDetail};

/// Create a search summary for a login
pub fn test_summary(id: i64, login: &str) -> GithubUser {
    GithubUser {
        id,
        login: login.to_string(),
        avatar_url: format!("https://avatars.github.test/{}", login),
        html_url: format!("https://github.test/{}", login),
    }
}

/// Create a full profile matching `test_summary`, with the given signals
pub fn test_detail(id: i64, login: &str, public_repos: i64, followers: i64) -> GithubUserDetail {
    GithubUserDetail {
        id,
        login: login.to_string(),
        avatar_url: format!("https://avatars.github.test/{}", login),
        html_url: format!("https://github.test/{}", login),
        bio: Some(format!("{} writes code", login)),
        location: Some("Berlin".to_string()),
        public_repos,
        followers,
    }
}

/// Create repositories with the given star counts
pub fn test_repos(stars: &[i64]) -> Vec<GithubRepo> {
    stars
        .iter()
        .map(|&stargazers_count| GithubRepo { stargazers_count })
        .collect()
}
