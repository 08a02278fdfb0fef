//! Structured-CV parsing through the language model.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, warn};

use crate::errors::{AppError, AI_RESPONSE_INVALID, LLM_CALL_FAILED};
use crate::llm_client::prompts::{cv_parse_prompt, CV_PARSE_SYSTEM};
use crate::llm_client::{strip_json_fences, LlmClient, LlmError};

/// Turns plain CV text into the model's JSON-encoded answer.
///
/// Carried in `AppState` as `Arc<dyn CvParser>`.
#[async_trait]
pub trait CvParser: Send + Sync {
    async fn extract_structured(&self, cv_text: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl CvParser for LlmClient {
    async fn extract_structured(&self, cv_text: &str) -> Result<String, LlmError> {
        self.call_text(&cv_parse_prompt(cv_text), CV_PARSE_SYSTEM)
            .await
    }
}

/// Asks the parser for a structured CV and decodes it. Only valid JSON is required.
pub async fn parse_cv(cv_text: &str, parser: &dyn CvParser) -> Result<Value, AppError> {
    let raw = parser.extract_structured(cv_text).await.map_err(|e| {
        error!("OpenAI API call failed: {e}");
        AppError::UpstreamParse(LLM_CALL_FAILED.to_string())
    })?;

    serde_json::from_str(strip_json_fences(&raw)).map_err(|e| {
        warn!("AI response is not valid JSON: {e}");
        AppError::UpstreamParse(AI_RESPONSE_INVALID.to_string())
    })
}
