use std::env;

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

#[derive(Clone)]
pub struct Config {
    /// Base URL of the GitHub REST API (overridable for proxies and tests)
    pub github_api_url: String,
    /// Personal access token; raises the GitHub rate limit from 60 to 5000 req/hour
    pub github_token: Option<String>,
    /// User-Agent header value, required by GitHub on every request
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            github_api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_string()),
            github_token: env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
            user_agent: env::var("GITHUB_APP_NAME").unwrap_or_else(|_| "devscout".to_string()),
        }
    }
}
