use super::{
    BusinessInsight, CollaboratorMatch, InsightError, InsightProvider, InsightStatus,
    ProfileSummary,
};
use crate::config::InsightConfig;
use crate::workflows::sku::SkuIdentifiers;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Chat-completions request body.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// HTTP client for the insight collaborator. One attempt per call; failures
/// are recovered by the caller's local fallback, never retried here.
pub struct InsightClient {
    status: InsightStatus,
    transport: Option<Transport>,
}

struct Transport {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl InsightClient {
    pub fn from_config(config: &InsightConfig) -> Self {
        let api_key = match &config.api_key {
            Some(key) => key.clone(),
            None => return Self::disabled("no INSIGHT_API_KEY configured"),
        };

        if !api_key.starts_with("sk-") {
            return Self::disabled("API key format not recognized (expected 'sk-' prefix)");
        }

        let http = match reqwest::Client::builder().timeout(config.timeout).build() {
            Ok(http) => http,
            Err(err) => return Self::disabled(format!("failed to build HTTP client: {err}")),
        };

        Self {
            status: InsightStatus::Enabled {
                model: config.model.clone(),
            },
            transport: Some(Transport {
                http,
                api_url: config.api_url.clone(),
                api_key,
                model: config.model.clone(),
            }),
        }
    }

    fn disabled(reason: impl Into<String>) -> Self {
        Self {
            status: InsightStatus::Disabled {
                reason: reason.into(),
            },
            transport: None,
        }
    }

    async fn complete(&self, prompt: String, max_tokens: u32) -> Result<String, InsightError> {
        let transport = match &self.transport {
            Some(transport) => transport,
            None => {
                let reason = match &self.status {
                    InsightStatus::Disabled { reason } => reason.clone(),
                    InsightStatus::Enabled { .. } => "transport unavailable".to_string(),
                };
                return Err(InsightError::Disabled(reason));
            }
        };

        let request = ChatRequest {
            model: transport.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.1,
            max_tokens,
        };

        let response = transport
            .http
            .post(&transport.api_url)
            .bearer_auth(&transport.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    InsightError::Timeout
                } else {
                    InsightError::Transport(err.to_string())
                }
            })?;

        match response.status() {
            StatusCode::OK => {
                let body: ChatResponse = response
                    .json()
                    .await
                    .map_err(|err| InsightError::Malformed(err.to_string()))?;
                body.choices
                    .into_iter()
                    .next()
                    .map(|choice| choice.message.content)
                    .ok_or_else(|| InsightError::Malformed("response held no choices".to_string()))
            }
            StatusCode::UNAUTHORIZED => {
                Err(InsightError::Transport("authentication failed".to_string()))
            }
            StatusCode::TOO_MANY_REQUESTS => {
                Err(InsightError::Transport("rate limit exceeded".to_string()))
            }
            status => Err(InsightError::Transport(format!(
                "unexpected status {status}"
            ))),
        }
    }
}

impl InsightProvider for InsightClient {
    fn status(&self) -> InsightStatus {
        self.status.clone()
    }

    async fn business_insight(
        &self,
        summary: &ProfileSummary,
    ) -> Result<BusinessInsight, InsightError> {
        let content = self.complete(insight_prompt(summary), 100).await?;
        parse_payload(&content)
    }

    async fn match_identifiers(
        &self,
        identifiers: &SkuIdentifiers,
    ) -> Result<CollaboratorMatch, InsightError> {
        let content = self.complete(match_prompt(identifiers), 500).await?;
        parse_payload(&content)
    }
}

fn insight_prompt(summary: &ProfileSummary) -> String {
    format!(
        "Analyze this business profile and provide risk insights:\n\
         Industry: {}\n\
         Revenue: ${:.0}\n\
         Inventory Turns: {}x\n\
         Years Operating: {}\n\n\
         Respond with valid JSON only:\n\
         {{\"risk_adjustment\": <integer from -10 to 10>, \"key_insight\": \"one sentence insight\"}}",
        summary.industry, summary.revenue, summary.inventory_turns, summary.years_operating
    )
}

fn match_prompt(identifiers: &SkuIdentifiers) -> String {
    format!(
        "Analyze these product identifiers from different business systems and \
         determine if they refer to the same product:\n\n\
         ERP SKU: {}\n\
         Warehouse SKU: {}\n\
         Storefront SKU: {}\n\
         Product Name: {}\n\n\
         Respond with valid JSON only:\n\
         {{\"same_product\": true, \"confidence\": 95, \"unified_name\": \"suggested product name\", \
         \"reasoning\": \"why these match\", \"risk_factors\": [\"any concerns\"]}}",
        identifiers.erp_code,
        identifiers.warehouse_code,
        identifiers.storefront_slug,
        identifiers.product_name
    )
}

/// Parse the collaborator's message content as a JSON payload, tolerating
/// markdown code fences around the object.
fn parse_payload<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, InsightError> {
    let trimmed = strip_code_fences(content);
    serde_json::from_str(trimmed).map_err(|err| InsightError::Malformed(err.to_string()))
}

fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InsightConfig;
    use std::time::Duration;

    fn config(api_key: Option<&str>) -> InsightConfig {
        InsightConfig {
            api_key: api_key.map(str::to_string),
            api_url: "https://insight.invalid/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn missing_key_disables_with_reason() {
        let client = InsightClient::from_config(&config(None));
        match client.status() {
            InsightStatus::Disabled { reason } => {
                assert!(reason.contains("INSIGHT_API_KEY"));
            }
            other => panic!("expected disabled status, got {other:?}"),
        }
    }

    #[test]
    fn malformed_key_disables_with_reason() {
        let client = InsightClient::from_config(&config(Some("not-a-key")));
        assert!(!client.status().is_enabled());
    }

    #[test]
    fn well_formed_key_enables_client() {
        let client = InsightClient::from_config(&config(Some("sk-demo-key")));
        assert!(client.status().is_enabled());
    }

    #[tokio::test]
    async fn disabled_client_reports_disabled_error() {
        let client = InsightClient::from_config(&config(None));
        let summary = ProfileSummary {
            revenue: 1_000_000.0,
            inventory_turns: 4.0,
            industry: "General",
            years_operating: 2.0,
        };
        let error = client
            .business_insight(&summary)
            .await
            .expect_err("disabled client cannot answer");
        assert!(matches!(error, InsightError::Disabled(_)));
    }

    #[test]
    fn parses_fenced_and_bare_payloads() {
        let bare: BusinessInsight =
            parse_payload("{\"risk_adjustment\": 5, \"key_insight\": \"steady\"}")
                .expect("bare json parses");
        assert_eq!(bare.risk_adjustment, 5);

        let fenced: BusinessInsight = parse_payload(
            "```json\n{\"risk_adjustment\": -3, \"key_insight\": \"watch inventory\"}\n```",
        )
        .expect("fenced json parses");
        assert_eq!(fenced.risk_adjustment, -3);
    }

    #[test]
    fn missing_keys_are_malformed() {
        let result: Result<BusinessInsight, _> = parse_payload("{\"risk_adjustment\": 5}");
        assert!(matches!(result, Err(InsightError::Malformed(_))));

        let result: Result<BusinessInsight, _> = parse_payload("not json at all");
        assert!(matches!(result, Err(InsightError::Malformed(_))));
    }
}
