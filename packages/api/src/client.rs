//! # ApiClient — typed wrapper over the job server's REST endpoints
//!
//! Thin `reqwest`-based client. Every method returns [`ApiError`]; a non-2xx
//! status becomes [`ApiError::Status`] so callers can branch on
//! [`ApiError::is_unauthorized`] for the 401 re-auth flow.
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`fetch_public_jobs`](ApiClient::fetch_public_jobs) | `GET /api/public/jobs` |
//! | [`fetch_my_jobs`](ApiClient::fetch_my_jobs) | `GET /api/jobs?userId=<id>` (bearer) |
//! | [`create_job`](ApiClient::create_job) | `POST /api/jobs` (bearer) |
//! | [`github_login_url`](ApiClient::github_login_url) | `GET /auth/github` |
//! | [`github_callback`](ApiClient::github_callback) | `POST /auth/github/callback` |
//! | [`verify_token`](ApiClient::verify_token) | `GET /auth/verify` (bearer) |
//! | [`fetch_career_page`](ApiClient::fetch_career_page) | `GET /api/proxy-career-page?url=<url>` (bearer) |
//!
//! The client also implements [`store::VerifyAuth`] so it plugs straight into
//! the session store.

use std::future::Future;

use serde::Deserialize;
use store::{Job, JobDraft, UserInfo, VerifyAuth};

use crate::config::ApiConfig;
use crate::ApiError;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

#[derive(Deserialize)]
struct LoginUrl {
    url: String,
}

#[derive(Deserialize)]
struct CallbackResponse {
    token: String,
    user: UserInfo,
}

#[derive(Deserialize)]
struct VerifyResponse {
    #[serde(default)]
    user: Option<UserInfo>,
}

#[derive(Deserialize)]
struct ProxyContent {
    content: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(ApiError::Status {
                status: resp.status().as_u16(),
            })
        }
    }

    /// Public listing, no authentication.
    pub async fn fetch_public_jobs(&self) -> Result<Vec<Job>, ApiError> {
        let resp = self.http.get(self.url("/api/public/jobs")).send().await?;
        Ok(Self::check_status(resp)?.json().await?)
    }

    /// Listings owned by `user_id`.
    pub async fn fetch_my_jobs(&self, user_id: &str, token: &str) -> Result<Vec<Job>, ApiError> {
        let resp = self
            .http
            .get(self.url("/api/jobs"))
            .query(&[("userId", user_id)])
            .bearer_auth(token)
            .send()
            .await?;
        Ok(Self::check_status(resp)?.json().await?)
    }

    /// Create a listing from the submitted draft.
    pub async fn create_job(&self, draft: &JobDraft, token: &str) -> Result<Job, ApiError> {
        let resp = self
            .http
            .post(self.url("/api/jobs"))
            .bearer_auth(token)
            .json(draft)
            .send()
            .await?;
        Ok(Self::check_status(resp)?.json().await?)
    }

    /// The GitHub authorization URL to redirect the browser to.
    pub async fn github_login_url(&self) -> Result<String, ApiError> {
        let resp = self.http.get(self.url("/auth/github")).send().await?;
        let body: LoginUrl = Self::check_status(resp)?.json().await?;
        Ok(body.url)
    }

    /// Exchange the OAuth code for a token and the user profile.
    pub async fn github_callback(&self, code: &str) -> Result<(String, UserInfo), ApiError> {
        let resp = self
            .http
            .post(self.url("/auth/github/callback"))
            .json(&serde_json::json!({ "code": code }))
            .send()
            .await?;
        let body: CallbackResponse = Self::check_status(resp)?.json().await?;
        Ok((body.token, body.user))
    }

    /// Verify a bearer token against `/auth/verify`. A 2xx response without a
    /// user is treated as a failed verification, matching the server contract.
    pub async fn verify_token(&self, token: &str) -> Result<UserInfo, ApiError> {
        let resp = self
            .http
            .get(self.url("/auth/verify"))
            .bearer_auth(token)
            .send()
            .await?;
        let body: VerifyResponse = Self::check_status(resp)?.json().await?;
        body.user
            .ok_or_else(|| ApiError::Decode("verify response carried no user".to_string()))
    }

    /// Fetch a company's career page through the server-side proxy; used only
    /// to give the enrichment prompt more context.
    pub async fn fetch_career_page(&self, url: &str, token: &str) -> Result<String, ApiError> {
        let resp = self
            .http
            .get(self.url("/api/proxy-career-page"))
            .query(&[("url", url)])
            .bearer_auth(token)
            .send()
            .await?;
        let body: ProxyContent = Self::check_status(resp)?.json().await?;
        Ok(body.content)
    }
}

impl VerifyAuth for ApiClient {
    fn verify(&self, token: &str) -> impl Future<Output = Result<UserInfo, String>> {
        let client = self.clone();
        let token = token.to_string();
        async move {
            client
                .verify_token(&token)
                .await
                .map_err(|e| e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(ApiConfig {
            base_url: "https://jobs.example".to_string(),
            llm_endpoint: "http://localhost:11434/v1".to_string(),
            llm_model: "test".to_string(),
        })
    }

    #[test]
    fn urls_join_base_and_path() {
        let c = client();
        assert_eq!(c.url("/api/public/jobs"), "https://jobs.example/api/public/jobs");
        assert_eq!(c.url("/auth/verify"), "https://jobs.example/auth/verify");
    }

    #[test]
    fn status_check_maps_error_codes() {
        // Only the enum mapping is testable without a live server.
        let err = ApiError::Status { status: 401 };
        assert!(err.is_unauthorized());
        let err = ApiError::Status { status: 500 };
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn callback_response_deserializes() {
        let body: CallbackResponse = serde_json::from_str(
            r#"{"token":"t-1","user":{"id":"42","username":"octocat"}}"#,
        )
        .unwrap();
        assert_eq!(body.token, "t-1");
        assert_eq!(body.user.display_name(), "octocat");
    }

    #[test]
    fn verify_response_tolerates_missing_user() {
        let body: VerifyResponse = serde_json::from_str("{}").unwrap();
        assert!(body.user.is_none());
    }
}
