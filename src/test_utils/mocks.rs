//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured per test and that
//! track how many upstream calls a scenario issued.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{
    GithubClient, GithubRepo, GithubUser, GithubUserDetail, UserSearchPage,
};
use crate::error::GithubError;

/// A mock GitHub client that tracks calls and returns configurable responses
#[derive(Default)]
pub struct MockGithubClient {
    /// Number of search calls issued
    pub search_calls: Arc<RwLock<usize>>,
    /// Number of profile fetches issued
    pub detail_calls: Arc<RwLock<usize>>,
    /// Number of repository listings issued
    pub repo_calls: Arc<RwLock<usize>>,
    /// Users returned by the search page, in insertion order
    users: Arc<RwLock<Vec<GithubUser>>>,
    /// Profile records by login
    details: Arc<RwLock<HashMap<String, GithubUserDetail>>>,
    /// Repositories by login
    repos: Arc<RwLock<HashMap<String, Vec<GithubRepo>>>>,
    /// Overrides the reported total result count
    total_count: Arc<RwLock<Option<i64>>>,
    /// When true, the search call itself fails rate-limited
    search_rate_limited: Arc<RwLock<bool>>,
    /// Logins whose profile fetch fails
    failing_details: Arc<RwLock<HashSet<String>>>,
    /// Logins whose repository listing fails
    failing_repos: Arc<RwLock<HashSet<String>>>,
}

impl MockGithubClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure a user to exist with a profile and repositories
    pub fn with_user(
        self,
        summary: GithubUser,
        detail: GithubUserDetail,
        repos: Vec<GithubRepo>,
    ) -> Self {
        {
            let mut users = self.users.write().unwrap();
            let mut details = self.details.write().unwrap();
            let mut repo_map = self.repos.write().unwrap();

            details.insert(summary.login.clone(), detail);
            repo_map.insert(summary.login.clone(), repos);
            users.push(summary);
        }
        self
    }

    /// Override the total result count reported by the search page
    pub fn with_total_count(self, total: i64) -> Self {
        *self.total_count.write().unwrap() = Some(total);
        self
    }

    /// Make the search call itself fail rate-limited
    pub fn rate_limited(self) -> Self {
        *self.search_rate_limited.write().unwrap() = true;
        self
    }

    /// Make the profile fetch fail for a login
    pub fn with_failing_detail(self, login: &str) -> Self {
        self.failing_details
            .write()
            .unwrap()
            .insert(login.to_string());
        self
    }

    /// Make the repository listing fail for a login
    pub fn with_failing_repos(self, login: &str) -> Self {
        self.failing_repos
            .write()
            .unwrap()
            .insert(login.to_string());
        self
    }
}

#[async_trait]
impl GithubClient for MockGithubClient {
    async fn search_users_by_location(
        &self,
        _location: &str,
        _page: u32,
    ) -> Result<UserSearchPage, GithubError> {
        *self.search_calls.write().unwrap() += 1;

        if *self.search_rate_limited.read().unwrap() {
            return Err(GithubError::RateLimited);
        }

        let items = self.users.read().unwrap().clone();
        let total_count = self
            .total_count
            .read()
            .unwrap()
            .unwrap_or(items.len() as i64);

        Ok(UserSearchPage { total_count, items })
    }

    async fn get_user(&self, login: &str) -> Result<GithubUserDetail, GithubError> {
        *self.detail_calls.write().unwrap() += 1;

        if self.failing_details.read().unwrap().contains(login) {
            return Err(GithubError::Api {
                status: 500,
                message: "mock detail failure".to_string(),
            });
        }

        self.details
            .read()
            .unwrap()
            .get(login)
            .cloned()
            .ok_or_else(|| GithubError::Api {
                status: 404,
                message: "Not Found".to_string(),
            })
    }

    async fn list_top_repos(&self, login: &str) -> Result<Vec<GithubRepo>, GithubError> {
        *self.repo_calls.write().unwrap() += 1;

        if self.failing_repos.read().unwrap().contains(login) {
            return Err(GithubError::Api {
                status: 500,
                message: "mock repo failure".to_string(),
            });
        }

        Ok(self
            .repos
            .read()
            .unwrap()
            .get(login)
            .cloned()
            .unwrap_or_default())
    }
}
