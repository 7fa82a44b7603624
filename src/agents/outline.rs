//! Outline Agent
//!
//! Second pipeline stage: turns the research material plus the requested
//! tone and length into a blog post outline with per-section backlink
//! insertion points. The outline is opaque prose and is returned
//! verbatim, never parsed.

use crate::agents::bulleted;
use crate::llm::{AgentDef, AgentRunner};
use crate::models::{OutlineData, OutlineRequest};
use crate::types::{AppError, AppResult};
use tracing::{info, warn};

pub const OUTLINE_AGENT: AgentDef = AgentDef {
    name: "OutlineAgent",
    web_search: false,
    instructions: r#"You are an expert content strategist creating outlines for SEO blog posts.

The user message provides the topic, target audience, tone, desired length, keywords, research notes, potential URLs, and any proprietary data/context.

Process:
1. Review all inputs.
2. Create a detailed, logical blog post outline.
3. Structure the outline to effectively incorporate the keywords and research notes.
4. IMPORTANT - BACKLINKS: For each major section, explicitly indicate where to add backlinks as the hyperlink. If the potential URLs provided are not specific enough, specify the TYPE of source that should be linked (e.g., "Link to recent study on climate change").
5. Include at least 3-5 specific places for citations/backlinks throughout the outline ONLY if they are CORRECT, EXACT, EXTREMELY RELEVANT TO THE POST AND SENTENCE AND TOPIC.
6. Ensure the structure aligns with the desired tone and length.
7. Consider the proprietary data context."#,
};

pub struct OutlineAgent;

impl OutlineAgent {
    pub async fn run(runner: &dyn AgentRunner, request: &OutlineRequest) -> AppResult<OutlineData> {
        if request.keywords.is_empty() {
            return Err(AppError::Validation("Keywords are required".to_string()));
        }
        if request.session_id.is_none() {
            warn!("sessionId not provided for outline request");
        }

        let prompt = Self::build_prompt(request);

        let output = runner
            .run(&OUTLINE_AGENT, &prompt, request.session_id.as_deref())
            .await?;

        if output.trim().is_empty() {
            return Err(AppError::EmptyAgentOutput { agent: "Outline" });
        }

        info!(outline_len = output.len(), "Outline stage complete");

        Ok(OutlineData {
            outline_content: output.clone(),
            raw_output: output,
        })
    }

    fn build_prompt(request: &OutlineRequest) -> String {
        let keywords = bulleted(&request.keywords);
        let urls = bulleted(&request.potential_urls);
        let proprietary = if request.proprietary_data.is_empty() {
            "None"
        } else {
            &request.proprietary_data
        };

        format!(
            "Topic: {topic}\n\
             Audience: {audience}\n\
             Tone: {tone}\n\
             Length: {length}\n\
             \n\
             Keywords:\n{keywords}\n\
             \n\
             Research Notes:\n{notes}\n\
             \n\
             Potential URLs:\n{urls}\n\
             \n\
             Proprietary Data: {proprietary}\n\
             \n\
             Generate the blog post outline based on the provided research and requirements.",
            topic = request.topic,
            audience = request.audience,
            tone = request.tone,
            length = request.length,
            keywords = keywords,
            notes = request.research_notes,
            urls = urls,
            proprietary = proprietary,
        )
    }
}
