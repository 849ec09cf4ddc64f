//! GitHub API client implementation

use async_trait::async_trait;
use reqwest::header;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::app::{MAX_REPOS_PER_USER, RESULTS_PER_PAGE};
use crate::domain::ports::{
    GithubClient, GithubRepo, GithubUser, GithubUserDetail, UserSearchPage,
};
use crate::error::GithubError;

/// Implementation of the GitHub API client
pub struct GithubClientImpl {
    http: Client,
    base_url: String,
    token: Option<String>,
    user_agent: String,
}

impl GithubClientImpl {
    pub fn new(base_url: String, token: Option<String>, user_agent: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            user_agent,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET request with GitHub's required headers; the token is attached
    /// when configured, unauthenticated access is used silently otherwise.
    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/vnd.github.v3+json")
            .header(header::USER_AGENT, &self.user_agent);

        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, format!("token {}", token));
        }

        request
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GithubError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| GithubError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(GithubError::Unauthorized)
        } else if status.as_u16() == 403 || status.as_u16() == 429 {
            // GitHub signals quota exhaustion with 403 on REST v3
            Err(GithubError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(GithubError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Response types from the GitHub API
#[derive(Deserialize)]
struct SearchUsersResponse {
    total_count: i64,
    items: Vec<UserSummaryResponse>,
}

#[derive(Deserialize)]
struct UserSummaryResponse {
    id: i64,
    login: String,
    avatar_url: String,
    html_url: String,
}

impl From<UserSummaryResponse> for GithubUser {
    fn from(r: UserSummaryResponse) -> Self {
        GithubUser {
            id: r.id,
            login: r.login,
            avatar_url: r.avatar_url,
            html_url: r.html_url,
        }
    }
}

impl From<SearchUsersResponse> for UserSearchPage {
    fn from(r: SearchUsersResponse) -> Self {
        UserSearchPage {
            total_count: r.total_count,
            items: r.items.into_iter().map(GithubUser::from).collect(),
        }
    }
}

#[derive(Deserialize)]
struct UserDetailResponse {
    id: i64,
    login: String,
    avatar_url: String,
    html_url: String,
    bio: Option<String>,
    location: Option<String>,
    #[serde(default)]
    public_repos: i64,
    #[serde(default)]
    followers: i64,
}

impl From<UserDetailResponse> for GithubUserDetail {
    fn from(r: UserDetailResponse) -> Self {
        GithubUserDetail {
            id: r.id,
            login: r.login,
            avatar_url: r.avatar_url,
            html_url: r.html_url,
            bio: r.bio,
            location: r.location,
            public_repos: r.public_repos,
            followers: r.followers,
        }
    }
}

#[derive(Deserialize)]
struct RepoResponse {
    #[serde(default)]
    stargazers_count: i64,
}

impl From<RepoResponse> for GithubRepo {
    fn from(r: RepoResponse) -> Self {
        GithubRepo {
            stargazers_count: r.stargazers_count,
        }
    }
}

#[async_trait]
impl GithubClient for GithubClientImpl {
    async fn search_users_by_location(
        &self,
        location: &str,
        page: u32,
    ) -> Result<UserSearchPage, GithubError> {
        // The location qualifier is quoted so multi-word regions match exactly
        let url = format!(
            "{}?q=location:%22{}%22&page={}&per_page={}&sort=repositories&order=desc",
            self.api_url("/search/users"),
            encode(location),
            page,
            RESULTS_PER_PAGE
        );

        let response = self.get(&url).send().await?;
        let body: SearchUsersResponse = self.handle_response(response).await?;
        Ok(body.into())
    }

    async fn get_user(&self, login: &str) -> Result<GithubUserDetail, GithubError> {
        let url = self.api_url(&format!("/users/{}", login));

        let response = self.get(&url).send().await?;
        let body: UserDetailResponse = self.handle_response(response).await?;
        Ok(body.into())
    }

    async fn list_top_repos(&self, login: &str) -> Result<Vec<GithubRepo>, GithubError> {
        let url = format!(
            "{}?per_page={}&sort=stars&order=desc",
            self.api_url(&format!("/users/{}/repos", login)),
            MAX_REPOS_PER_USER
        );

        let response = self.get(&url).send().await?;
        let body: Vec<RepoResponse> = self.handle_response(response).await?;
        Ok(body.into_iter().map(GithubRepo::from).collect())
    }
}
