//! Developer domain entity
//!
//! A developer found via location search, enriched with aggregate
//! popularity signals.

use serde::{Deserialize, Serialize};

use crate::domain::ports::{GithubUser, GithubUserDetail};

/// Signal used to rank the result list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Stars,
    Repos,
    Followers,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Stars => write!(f, "stars"),
            SortKey::Repos => write!(f, "repos"),
            SortKey::Followers => write!(f, "followers"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stars" => Ok(SortKey::Stars),
            "repos" => Ok(SortKey::Repos),
            "followers" => Ok(SortKey::Followers),
            _ => Err(format!("Unknown sort key: {}", s)),
        }
    }
}

/// A developer profile with a derived total star count
#[derive(Debug, Clone, Serialize)]
pub struct Developer {
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

impl Developer {
    /// Value of the signal named by `key`
    pub fn signal(&self, key: SortKey) -> i64 {
        match key {
            SortKey::Stars => self.total_stars,
            SortKey::Repos => self.public_repos,
            SortKey::Followers => self.followers,
        }
    }
}

/// Outcome of one per-user enrichment pipeline
///
/// A failed profile fetch degrades to the bare search summary with zeroed
/// signals instead of failing the whole batch.
#[derive(Debug, Clone)]
pub enum Enrichment {
    Success {
        detail: GithubUserDetail,
        total_stars: i64,
    },
    Degraded {
        summary: GithubUser,
    },
}

impl From<Enrichment> for Developer {
    fn from(e: Enrichment) -> Self {
        match e {
            Enrichment::Success {
                detail,
                total_stars,
            } => Developer {
                id: detail.id,
                login: detail.login,
                avatar_url: detail.avatar_url,
                html_url: detail.html_url,
                bio: detail.bio,
                location: detail.location,
                public_repos: detail.public_repos,
                followers: detail.followers,
                total_stars,
            },
            Enrichment::Degraded { summary } => Developer {
                id: summary.id,
                login: summary.login,
                avatar_url: summary.avatar_url,
                html_url: summary.html_url,
                bio: None,
                location: None,
                public_repos: 0,
                followers: 0,
                total_stars: 0,
            },
        }
    }
}

/// One page of ranked search results
#[derive(Debug, Clone, Serialize)]
pub struct DeveloperSearch {
    pub total_count: i64,
    pub items: Vec<Developer>,
    pub page: u32,
    pub has_more: bool,
}
