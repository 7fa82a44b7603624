// OpenAI Responses API adapter
// Documentation: https://platform.openai.com/docs/api-reference/responses
//
// The Responses API hosts the `web_search` tool server-side: the model may
// run zero or more searches during one invocation and the final text
// arrives in the same response body. Agents that carry the tool get it
// attached here; nothing else about the call changes.

use crate::config::AgentConfig;
use crate::llm::runner::{AgentDef, AgentRunner};
use crate::types::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span, Instrument};

pub struct OpenAiRunner {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

// Request types for the Responses API

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    instructions: &'a str,
    input: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<ResponsesTool>,
}

#[derive(Serialize)]
struct ResponsesTool {
    #[serde(rename = "type")]
    tool_type: &'static str,
}

// Response types for the Responses API. The output array interleaves tool
// call items with message items; only message text is collected.

#[derive(Deserialize)]
struct ResponsesResponse {
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum OutputItem {
    #[serde(rename = "message")]
    Message { content: Vec<ContentItem> },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum ContentItem {
    #[serde(rename = "output_text")]
    OutputText { text: String },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    code: Option<String>,
}

impl OpenAiRunner {
    pub fn new(config: &AgentConfig) -> Self {
        // No request timeout: an invocation blocks until the provider
        // answers or the connection drops.
        Self {
            client: Client::new(),
            api_key: config.openai_api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collect_output_text(body: &ResponsesResponse) -> String {
        body.output
            .iter()
            .filter_map(|item| match item {
                OutputItem::Message { content } => Some(content),
                OutputItem::Other => None,
            })
            .flatten()
            .filter_map(|part| match part {
                ContentItem::OutputText { text } => Some(text.as_str()),
                ContentItem::Other => None,
            })
            .collect()
    }
}

#[async_trait]
impl AgentRunner for OpenAiRunner {
    async fn run(
        &self,
        agent: &AgentDef,
        input: &str,
        session_id: Option<&str>,
    ) -> AppResult<String> {
        // The span carries the correlation tag so external instrumentation
        // can group the stages of one session.
        let span = info_span!(
            "agent_run",
            agent = agent.name,
            session_id = session_id.unwrap_or("-"),
        );

        async {
            let url = format!("{}/responses", self.base_url);

            let tools = if agent.web_search {
                vec![ResponsesTool { tool_type: "web_search" }]
            } else {
                Vec::new()
            };

            let request = ResponsesRequest {
                model: &self.model,
                instructions: agent.instructions,
                input,
                tools,
            };

            let response = self
                .client
                .post(&url)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .json(&request)
                .send()
                .await
                .map_err(|e| AppError::AgentApi(format!("OpenAI request failed: {}", e)))?;

            let status = response.status();

            if !status.is_success() {
                let error_text = response.text().await.unwrap_or_default();

                if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(&error_text) {
                    return Err(AppError::AgentApi(format!(
                        "OpenAI API error ({}): {} (code: {:?})",
                        status, parsed.error.message, parsed.error.code
                    )));
                }

                return Err(AppError::AgentApi(format!(
                    "OpenAI API error ({}): {}",
                    status, error_text
                )));
            }

            let body: ResponsesResponse = response
                .json()
                .await
                .map_err(|e| AppError::AgentApi(format!("Failed to parse OpenAI response: {}", e)))?;

            let text = Self::collect_output_text(&body);
            debug!(output_len = text.len(), "agent invocation complete");

            Ok(text)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_config(base_url: String) -> AgentConfig {
        AgentConfig {
            openai_api_key: "test-key".to_string(),
            model: "gpt-test".to_string(),
            base_url,
        }
    }

    const SEARCH_AGENT: AgentDef = AgentDef {
        name: "SearchAgent",
        instructions: "search instructions",
        web_search: true,
    };

    const PLAIN_AGENT: AgentDef = AgentDef {
        name: "PlainAgent",
        instructions: "plain instructions",
        web_search: false,
    };

    #[tokio::test]
    async fn collects_output_text_across_tool_calls() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/responses")
            .match_header("authorization", "Bearer test-key")
            .match_body(mockito::Matcher::PartialJson(json!({
                "model": "gpt-test",
                "instructions": "search instructions",
                "input": "the prompt",
                "tools": [{"type": "web_search"}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "id": "resp_1",
                    "output": [
                        {"type": "web_search_call", "id": "ws_1", "status": "completed"},
                        {"type": "message", "role": "assistant", "content": [
                            {"type": "output_text", "text": "## Keywords\n"},
                            {"type": "output_text", "text": "ev range\n"}
                        ]}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let runner = OpenAiRunner::new(&test_config(server.url()));
        let text = runner
            .run(&SEARCH_AGENT, "the prompt", Some("session-1"))
            .await
            .unwrap();

        assert_eq!(text, "## Keywords\nev range\n");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn omits_tools_for_agents_without_web_search() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/responses")
            .match_body(mockito::Matcher::Json(json!({
                "model": "gpt-test",
                "instructions": "plain instructions",
                "input": "the prompt"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "id": "resp_2",
                    "output": [
                        {"type": "message", "role": "assistant", "content": [
                            {"type": "output_text", "text": "outline text"}
                        ]}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let runner = OpenAiRunner::new(&test_config(server.url()));
        let text = runner.run(&PLAIN_AGENT, "the prompt", None).await.unwrap();

        assert_eq!(text, "outline text");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn maps_error_status_to_agent_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/responses")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "error": {
                        "message": "Incorrect API key provided",
                        "type": "invalid_request_error",
                        "code": "invalid_api_key"
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let runner = OpenAiRunner::new(&test_config(server.url()));
        let err = runner
            .run(&PLAIN_AGENT, "the prompt", None)
            .await
            .unwrap_err();

        match err {
            AppError::AgentApi(message) => {
                assert!(message.contains("401"));
                assert!(message.contains("Incorrect API key provided"));
            }
            other => panic!("expected AgentApi error, got {:?}", other),
        }
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let runner = OpenAiRunner::new(&test_config("https://api.openai.com/v1/".to_string()));
        assert_eq!(runner.base_url, "https://api.openai.com/v1");
    }
}
