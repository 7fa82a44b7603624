//! Research Agent
//!
//! First pipeline stage: generates keywords and topic notes from model
//! knowledge and collects 2-3 candidate backlink URLs via web search. The
//! semi-structured output is parsed into a structured record; the raw
//! text is returned alongside it for audit and fallback.

use crate::agents::parser::parse_research_output;
use crate::llm::{AgentDef, AgentRunner};
use crate::models::{ResearchData, ResearchRequest};
use crate::types::{AppError, AppResult};
use tracing::{info, warn};

pub const RESEARCH_AGENT: AgentDef = AgentDef {
    name: "ResearchAgent",
    web_search: true,
    instructions: r#"You are a research assistant specializing in SEO and topic analysis.
Your goal is to provide the foundational elements for creating an SEO-optimized blog post.
You have access to a `web_search` tool.

The user message provides the topic, the target audience, and any proprietary data/context.

Process:
1. Analyze the inputs based on your general knowledge.
2. Generate relevant keywords for the topic and audience based on your internal understanding.
3. Based on your knowledge, write brief notes about the topic, covering common concepts.
4. MANDATORY ACTION: Use the `web_search` tool to find exactly 2-3 specific, authoritative, and highly relevant website URLs related to the topic that would be suitable backlink sources. These MUST be full, specific URLs (like https://example.com/specific-page or https://organization.org), not just domain names. Do NOT suggest types of websites.

Output the results clearly structured using the following EXACT headers:
## Keywords
(List 10-15 keywords here, one per line, based on internal knowledge)

## Research Notes
(Summarize key concepts based on internal knowledge)

## Potential URLs
(List the 2-3 specific full URLs you found using the `web_search` tool here, one per line. DO NOT state that you cannot provide URLs. You MUST provide the URLs found by the tool.)

Do NOT include any other text, commentary, or introduction before or after these sections."#,
};

pub struct ResearchAgent;

impl ResearchAgent {
    pub async fn run(
        runner: &dyn AgentRunner,
        request: &ResearchRequest,
    ) -> AppResult<ResearchData> {
        if request.topic.is_empty() || request.audience.is_empty() {
            return Err(AppError::Validation(
                "Topic and audience are required".to_string(),
            ));
        }
        if request.session_id.is_none() {
            warn!("sessionId not provided for research request");
        }

        let prompt = Self::build_prompt(&request.topic, &request.audience, &request.proprietary_data);

        let output = runner
            .run(&RESEARCH_AGENT, &prompt, request.session_id.as_deref())
            .await?;

        if output.trim().is_empty() {
            return Err(AppError::EmptyAgentOutput { agent: "Research" });
        }

        let parsed = parse_research_output(&output);
        info!(
            keyword_count = parsed.keywords.len(),
            url_count = parsed.potential_urls.len(),
            "Research stage complete"
        );

        Ok(ResearchData {
            keywords: parsed.keywords,
            research_notes: parsed.research_notes,
            potential_urls: parsed.potential_urls,
            raw_output: output,
        })
    }

    fn build_prompt(topic: &str, audience: &str, proprietary_data: &str) -> String {
        let proprietary = if proprietary_data.is_empty() {
            "None"
        } else {
            proprietary_data
        };
        format!("Topic: {topic}\nAudience: {audience}\nProprietary Data: {proprietary}")
    }
}
