//! # AI enrichment of job drafts
//!
//! Before submission a draft can be enriched with a company summary and a spam
//! flag, generated by an OpenAI-compatible chat-completions endpoint. The
//! inference backend sits behind the [`TextGenerator`] trait so the whole layer
//! is testable with a stub and swappable without touching the form logic.
//!
//! Enrichment is strictly best-effort: every generation runs under a 30 s
//! deadline, and a timeout or error only logs a warning — job creation must
//! never block on the model.

use std::future::Future;
use std::time::Duration;

use futures::future::{select, Either};
use serde::{Deserialize, Serialize};
use store::JobDraft;

use crate::config::ApiConfig;
use crate::ApiError;

/// Deadline for one generation call.
pub const ENRICHMENT_TIMEOUT_SECS: u64 = 30;

/// A text-generation backend.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, ApiError>>;
}

/// Chat-completions client for any OpenAI-compatible endpoint.
#[derive(Clone, Debug)]
pub struct LlmClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl LlmClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.llm_endpoint.clone(),
            model: config.llm_model.clone(),
        }
    }
}

impl TextGenerator for LlmClient {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, ApiError>> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };
        let http = self.http.clone();
        let url = format!("{}/chat/completions", self.endpoint);
        async move {
            let resp = http.post(url).json(&request).send().await?;
            if !resp.status().is_success() {
                return Err(ApiError::Status {
                    status: resp.status().as_u16(),
                });
            }
            let body: ChatResponse = resp.json().await?;
            body.choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
                .map(|text| text.trim().to_string())
                .ok_or_else(|| ApiError::Decode("empty completion".to_string()))
        }
    }
}

/// Build the company-summary prompt, optionally grounding it with proxied
/// career-page content.
pub fn company_summary_prompt(description: &str, career_page: Option<&str>) -> String {
    let mut prompt = format!(
        "Based on the following job description, summarize what working at this company might be like.\n\
         Focus on company culture, work environment, and potential growth opportunities.\n\
         Job Description: {description}\n\n\
         Please provide a concise summary in 2-3 paragraphs."
    );
    if let Some(page) = career_page {
        prompt.push_str(&format!("\n\nCompany career page content:\n{page}"));
    }
    prompt
}

/// Build the spam-detection prompt.
pub fn spam_prompt(description: &str, company_name: &str, salary: &str) -> String {
    format!(
        "Analyze the following job posting for potential spam or scam indicators.\n\
         Consider factors like unrealistic salary promises, vague descriptions, and suspicious requirements.\n\n\
         Job Description: {description}\n\
         Company Name: {company_name}\n\
         Salary: {salary}\n\n\
         Respond with either \"SPAM\" or \"LEGITIMATE\" followed by a brief explanation."
    )
}

/// Parsed spam-detection answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpamVerdict {
    pub is_spam: bool,
    pub explanation: String,
}

impl SpamVerdict {
    /// The model answers "SPAM" or "LEGITIMATE" on the first line, with the
    /// explanation after it. The verdict is a case-insensitive substring check
    /// for "spam" over the whole response.
    pub fn parse(response: &str) -> Self {
        let text = response.trim();
        Self {
            is_spam: text.to_lowercase().contains("spam"),
            explanation: text.lines().nth(1).unwrap_or("").trim().to_string(),
        }
    }
}

/// Fields added to a draft by enrichment; both stay `None` on failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Enrichment {
    pub company_summary: Option<String>,
    pub is_spam: Option<bool>,
}

/// Runs both enrichment passes over a draft with one injected generator.
#[derive(Clone, Debug)]
pub struct Enricher<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> Enricher<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Best-effort enrichment: each pass is independently bounded by the 30 s
    /// deadline, and failures only log.
    pub async fn enrich(&self, draft: &JobDraft, career_page: Option<&str>) -> Enrichment {
        let mut out = Enrichment::default();

        let summary = deadline(
            ENRICHMENT_TIMEOUT_SECS,
            self.generator
                .generate(&company_summary_prompt(&draft.description, career_page)),
        )
        .await;
        match summary {
            Ok(text) => out.company_summary = Some(text),
            Err(e) => tracing::warn!("company summary enrichment skipped: {e}"),
        }

        let verdict = deadline(
            ENRICHMENT_TIMEOUT_SECS,
            self.generator.generate(&spam_prompt(
                &draft.description,
                &draft.company_name,
                &draft.salary_range,
            )),
        )
        .await;
        match verdict {
            Ok(text) => {
                let parsed = SpamVerdict::parse(&text);
                if parsed.is_spam {
                    tracing::warn!("draft flagged as spam: {}", parsed.explanation);
                }
                out.is_spam = Some(parsed.is_spam);
            }
            Err(e) => tracing::warn!("spam detection skipped: {e}"),
        }

        out
    }
}

/// Race a generation future against a timer.
async fn deadline<F, T>(secs: u64, fut: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let fut = std::pin::pin!(fut);
    let timer = std::pin::pin!(sleep(Duration::from_secs(secs)));
    match select(fut, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout(secs)),
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Generator that returns a canned response.
    struct Canned(&'static str);

    impl TextGenerator for Canned {
        fn generate(&self, _prompt: &str) -> impl Future<Output = Result<String, ApiError>> {
            let text = self.0.to_string();
            async move { Ok(text) }
        }
    }

    /// Generator that always fails.
    struct Failing;

    impl TextGenerator for Failing {
        fn generate(&self, _prompt: &str) -> impl Future<Output = Result<String, ApiError>> {
            async move { Err(ApiError::Decode("model offline".to_string())) }
        }
    }

    fn draft() -> JobDraft {
        JobDraft {
            description: "Write Rust services".to_string(),
            company_name: "Acme".to_string(),
            salary_range: "60-80k".to_string(),
            ..JobDraft::default()
        }
    }

    #[test]
    fn summary_prompt_embeds_description_and_career_page() {
        let prompt = company_summary_prompt("Build things", Some("We value people"));
        assert!(prompt.contains("Build things"));
        assert!(prompt.contains("We value people"));
        assert!(prompt.contains("2-3 paragraphs"));
    }

    #[test]
    fn spam_prompt_embeds_all_fields() {
        let prompt = spam_prompt("desc", "Acme", "1M/week");
        assert!(prompt.contains("desc"));
        assert!(prompt.contains("Acme"));
        assert!(prompt.contains("1M/week"));
    }

    #[test]
    fn verdict_is_a_substring_check() {
        let verdict = SpamVerdict::parse("SPAM\nUnrealistic salary for no work.");
        assert!(verdict.is_spam);
        assert_eq!(verdict.explanation, "Unrealistic salary for no work.");

        let verdict = SpamVerdict::parse("LEGITIMATE\nLooks like a normal posting.");
        assert!(!verdict.is_spam);

        // Lower-case mention anywhere still flags.
        assert!(SpamVerdict::parse("this smells like spam").is_spam);
    }

    #[test]
    fn verdict_without_explanation_line() {
        let verdict = SpamVerdict::parse("LEGITIMATE");
        assert!(!verdict.is_spam);
        assert_eq!(verdict.explanation, "");
    }

    #[tokio::test]
    async fn enrich_fills_both_fields_on_success() {
        let enricher = Enricher::new(Canned("LEGITIMATE\nFine."));
        let result = enricher.enrich(&draft(), None).await;
        assert_eq!(result.company_summary.as_deref(), Some("LEGITIMATE\nFine."));
        assert_eq!(result.is_spam, Some(false));
    }

    #[tokio::test]
    async fn enrich_flags_a_spam_verdict() {
        let enricher = Enricher::new(Canned("SPAM\nToo good to be true."));
        let result = enricher.enrich(&draft(), None).await;
        assert_eq!(result.is_spam, Some(true));
    }

    #[tokio::test]
    async fn enrich_failure_leaves_fields_unset() {
        let enricher = Enricher::new(Failing);
        let result = enricher.enrich(&draft(), None).await;
        assert_eq!(result, Enrichment::default());
    }

    #[tokio::test]
    async fn deadline_cuts_off_a_stalled_future() {
        let stalled = futures::future::pending::<Result<String, ApiError>>();
        let result = deadline(1, stalled).await;
        assert!(matches!(result, Err(ApiError::Timeout(1))));
    }
}
