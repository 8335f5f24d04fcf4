//! Endpoint configuration for the external collaborators.
//!
//! Values are baked in at compile time via `option_env!` so a static WASM
//! bundle needs no runtime configuration source. The inference endpoint
//! defaults to a local Ollama instance speaking the OpenAI wire format.

/// Base URLs and the inference model used for enrichment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Job server base URL, no trailing slash.
    pub base_url: String,
    /// OpenAI-compatible inference endpoint, up to and including `/v1`.
    pub llm_endpoint: String,
    pub llm_model: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("JOBHUB_API_BASE")
                .unwrap_or("https://job-server-2.onrender.com")
                .to_string(),
            llm_endpoint: option_env!("JOBHUB_LLM_ENDPOINT")
                .unwrap_or("http://localhost:11434/v1")
                .to_string(),
            llm_model: option_env!("JOBHUB_LLM_MODEL")
                .unwrap_or("llama3.2:1b")
                .to_string(),
        }
    }
}
