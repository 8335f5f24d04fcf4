//! # API crate — REST client layer for JobHub
//!
//! Everything the frontends need to talk to the external collaborators: the
//! remote job server, the GitHub OAuth endpoints it fronts, and an
//! OpenAI-compatible inference endpoint for listing enrichment.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — job listing fetch/create, OAuth login URL and callback exchange, token verification, career-page proxy |
//! | [`config`] | [`ApiConfig`] — base URLs and the inference model, overridable at compile time |
//! | [`enrich`] | AI enrichment: prompt builders, spam verdict parsing, the [`enrich::TextGenerator`] trait and its chat-completions client, all bounded by a 30 s deadline |
//! | [`retry`] | [`retry::AuthRetry`] — the bounded 401-driven re-auth counter |
//!
//! Domain models ([`Job`], [`JobDraft`], [`UserInfo`]) live in the `store`
//! crate and are re-exported here for convenience.

pub mod client;
pub mod config;
pub mod enrich;
pub mod retry;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use enrich::{Enricher, LlmClient, SpamVerdict};
pub use retry::{AuthRetry, RetryDecision};

pub use store::{Job, JobDraft, UserInfo};

use thiserror::Error;

/// Errors surfaced by the REST client and the enrichment layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned status {status}")]
    Status { status: u16 },
    #[error("unexpected response shape: {0}")]
    Decode(String),
    #[error("enrichment timed out after {0} seconds")]
    Timeout(u64),
}

impl ApiError {
    /// True for a 401 response, the trigger for the bounded re-auth retry.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 })
    }
}
