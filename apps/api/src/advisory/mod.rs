//! Advisory panel: short AI analysis and tips for the selected occupation.
//!
//! Pluggable, trait-based provider. `AdvisoryClient` never fails: any provider
//! error or malformed answer resolves to the fixed fallback insight.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::catalog::builder::Occupation;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

pub mod handlers;
pub mod prompts;
pub mod selection;

pub const FALLBACK_SUMMARY: &str = "Unable to generate real-time AI analysis. Based on general trends, this occupation requires a competitive score due to high demand.";

pub const FALLBACK_ADVICE: [&str; 3] = [
    "Maximize English points (PTE/IELTS)",
    "Claim partner skills points if applicable",
    "Consider state nomination (190/491)",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryInsight {
    pub summary: String,
    pub advice: Vec<String>,
}

impl AdvisoryInsight {
    pub fn fallback() -> Self {
        Self {
            summary: FALLBACK_SUMMARY.to_string(),
            advice: FALLBACK_ADVICE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// What the provider is told about an occupation.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryRequest {
    pub code: String,
    pub title: String,
    pub latest_score189: i32,
    pub latest_applications: u32,
    pub invitations_last_12_months: u32,
}

impl From<&Occupation> for AdvisoryRequest {
    fn from(occupation: &Occupation) -> Self {
        let latest = occupation.latest();
        Self {
            code: occupation.code.clone(),
            title: occupation.title.clone(),
            latest_score189: latest.score189,
            latest_applications: latest.applications,
            invitations_last_12_months: occupation.total_invitations(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("advisory provider is not configured")]
    Unconfigured,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("malformed advisory response: {0}")]
    Malformed(&'static str),
}

/// The insight provider trait. Implement this to swap backends without
/// touching the handlers or the selection tracker.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    async fn insights(&self, request: &AdvisoryRequest) -> Result<AdvisoryInsight, AdvisoryError>;

    /// Backend label for logs.
    fn name(&self) -> &'static str;
}

/// Gemini-backed provider. Goes through the shared `LlmClient`.
pub struct LlmInsightProvider(pub LlmClient);

#[async_trait]
impl InsightProvider for LlmInsightProvider {
    async fn insights(&self, request: &AdvisoryRequest) -> Result<AdvisoryInsight, AdvisoryError> {
        let prompt = prompts::build_advisory_prompt(request);
        let schema = prompts::advisory_response_schema();
        Ok(self.0.call_json(&prompt, JSON_ONLY_SYSTEM, &schema).await?)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

/// Used when no API key is configured; every request falls back.
pub struct UnconfiguredProvider;

#[async_trait]
impl InsightProvider for UnconfiguredProvider {
    async fn insights(&self, _request: &AdvisoryRequest) -> Result<AdvisoryInsight, AdvisoryError> {
        Err(AdvisoryError::Unconfigured)
    }

    fn name(&self) -> &'static str {
        "unconfigured"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightSource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryOutcome {
    #[serde(flatten)]
    pub insight: AdvisoryInsight,
    pub source: InsightSource,
}

/// Front door for advisory requests. Cheap to clone.
#[derive(Clone)]
pub struct AdvisoryClient {
    provider: Arc<dyn InsightProvider>,
}

impl AdvisoryClient {
    pub fn new(provider: Arc<dyn InsightProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub async fn insights_for(&self, occupation: &Occupation) -> AdvisoryOutcome {
        self.fetch(&AdvisoryRequest::from(occupation)).await
    }

    /// Single attempt against the provider; fallback on any failure.
    pub async fn fetch(&self, request: &AdvisoryRequest) -> AdvisoryOutcome {
        let result = self
            .provider
            .insights(request)
            .await
            .and_then(validate);

        match result {
            Ok(insight) => AdvisoryOutcome {
                insight,
                source: InsightSource::Generated,
            },
            Err(e) => {
                warn!(
                    code = %request.code,
                    provider = self.provider.name(),
                    "Advisory request failed, using fallback: {e}"
                );
                AdvisoryOutcome {
                    insight: AdvisoryInsight::fallback(),
                    source: InsightSource::Fallback,
                }
            }
        }
    }
}

/// Trims the answer and rejects one with nothing usable in it.
fn validate(insight: AdvisoryInsight) -> Result<AdvisoryInsight, AdvisoryError> {
    let summary = insight.summary.trim().to_string();
    if summary.is_empty() {
        return Err(AdvisoryError::Malformed("empty summary"));
    }

    let advice: Vec<String> = insight
        .advice
        .iter()
        .map(|tip| tip.trim())
        .filter(|tip| !tip.is_empty())
        .map(str::to_string)
        .collect();
    if advice.is_empty() {
        return Err(AdvisoryError::Malformed("no advice"));
    }

    Ok(AdvisoryInsight { summary, advice })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::definitions::Category;
    use crate::catalog::filter::tests::occupation;

    /// Returns the same insight for every request.
    pub(crate) struct StaticProvider(pub AdvisoryInsight);

    #[async_trait]
    impl InsightProvider for StaticProvider {
        async fn insights(
            &self,
            _request: &AdvisoryRequest,
        ) -> Result<AdvisoryInsight, AdvisoryError> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &'static str {
            "static"
        }
    }

    pub(crate) struct FailingProvider;

    #[async_trait]
    impl InsightProvider for FailingProvider {
        async fn insights(
            &self,
            _request: &AdvisoryRequest,
        ) -> Result<AdvisoryInsight, AdvisoryError> {
            Err(AdvisoryError::Llm(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            }))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    pub(crate) fn insight(summary: &str, advice: &[&str]) -> AdvisoryInsight {
        AdvisoryInsight {
            summary: summary.to_string(),
            advice: advice.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn request() -> AdvisoryRequest {
        AdvisoryRequest::from(&occupation("261313", "Software Engineer", Category::Ict, 90))
    }

    #[tokio::test]
    async fn test_failure_yields_verbatim_fallback() {
        let client = AdvisoryClient::new(Arc::new(FailingProvider));
        let outcome = client.fetch(&request()).await;

        assert_eq!(outcome.source, InsightSource::Fallback);
        assert_eq!(
            outcome.insight.summary,
            "Unable to generate real-time AI analysis. Based on general trends, this occupation requires a competitive score due to high demand."
        );
        assert_eq!(
            outcome.insight.advice,
            vec![
                "Maximize English points (PTE/IELTS)",
                "Claim partner skills points if applicable",
                "Consider state nomination (190/491)",
            ]
        );
    }

    #[tokio::test]
    async fn test_unconfigured_provider_falls_back() {
        let client = AdvisoryClient::new(Arc::new(UnconfiguredProvider));
        let outcome = client.fetch(&request()).await;
        assert_eq!(outcome.source, InsightSource::Fallback);
        assert_eq!(outcome.insight, AdvisoryInsight::fallback());
    }

    #[tokio::test]
    async fn test_generated_insight_is_trimmed() {
        let client = AdvisoryClient::new(Arc::new(StaticProvider(insight(
            "  Competitive.  ",
            &[" Improve English ", "", "Get state nomination"],
        ))));
        let outcome = client.fetch(&request()).await;
        assert_eq!(outcome.source, InsightSource::Generated);
        assert_eq!(outcome.insight.summary, "Competitive.");
        assert_eq!(
            outcome.insight.advice,
            vec!["Improve English", "Get state nomination"]
        );
    }

    #[tokio::test]
    async fn test_empty_summary_falls_back() {
        let client = AdvisoryClient::new(Arc::new(StaticProvider(insight(" ", &["tip"]))));
        assert_eq!(client.fetch(&request()).await.source, InsightSource::Fallback);
    }

    #[tokio::test]
    async fn test_no_tips_falls_back() {
        let client = AdvisoryClient::new(Arc::new(StaticProvider(insight("Fine.", &["  "]))));
        assert_eq!(client.fetch(&request()).await.source, InsightSource::Fallback);
    }

    #[tokio::test]
    async fn test_unreachable_llm_falls_back() {
        let llm = LlmClient::new(
            "key".to_string(),
            "http://127.0.0.1:9",
            std::time::Duration::from_secs(2),
            1,
        )
        .unwrap();
        let client = AdvisoryClient::new(Arc::new(LlmInsightProvider(llm)));
        let outcome = client.fetch(&request()).await;
        assert_eq!(outcome.source, InsightSource::Fallback);
        assert_eq!(outcome.insight, AdvisoryInsight::fallback());
    }

    #[test]
    fn test_request_from_occupation() {
        let req = request();
        assert_eq!(req.code, "261313");
        assert_eq!(req.latest_score189, 90);
        assert_eq!(req.latest_applications, 1011);
        assert_eq!(req.invitations_last_12_months, 200);
    }

    #[test]
    fn test_outcome_serializes_flat() {
        let outcome = AdvisoryOutcome {
            insight: AdvisoryInsight::fallback(),
            source: InsightSource::Fallback,
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["source"], "fallback");
        assert_eq!(value["advice"].as_array().unwrap().len(), 3);
    }
}
