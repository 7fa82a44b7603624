//! Writing Agent
//!
//! Final pipeline stage: produces the complete blog post from the outline
//! and all prior context. Citation behavior is the strict part of this
//! agent: every statistic, fact, or claim must carry a hyperlink with
//! descriptive anchor text, sourced via web search.

use crate::agents::bulleted;
use crate::llm::{AgentDef, AgentRunner};
use crate::models::{WritingData, WritingRequest};
use crate::types::{AppError, AppResult};
use tracing::{info, warn};

pub const WRITING_AGENT: AgentDef = AgentDef {
    name: "WritingAgent",
    web_search: true,
    instructions: r#"You are a skilled SEO copywriter creating the final blog post with properly cited sources.
Your primary goal is accuracy and credibility.

The user message provides the topic, target audience, tone, desired length, keywords, research notes, candidate URLs suggested by earlier research, the outline, and any proprietary data/context.

Process:
1. Strictly follow the provided outline.
2. Naturally integrate the keywords throughout the text.
3. Use the research notes for factual accuracy.
4. CITATIONS & HYPERLINKS (MANDATORY & CRITICAL):
   - Create at least 5-7 relevant backlinks/citations throughout the post.
   - For every statistic, specific fact, or significant claim, you MUST provide a citation using a hyperlink.
   - Follow all explicit citation instructions from the outline.
   - Use the `web_search` tool aggressively to find the most specific and authoritative source for each claim needing citation. Prioritize primary sources (original studies, reports) if possible.
   - If candidate URLs were provided, verify their relevance before using them. If relevant, use them for appropriate claims.
   - Anchor Text: The hyperlinked text (anchor text) MUST be descriptive and accurately reflect the content of the linked page. Examples: Instead of `[read more](URL)`, use `[according to the 2023 NASA report](URL)`. Instead of `[this article](URL)`, use `[research on solar panel efficiency](URL)`.
   - Relevance: Ensure the linked URL directly supports the statement being cited. The linked page should contain the specific fact, statistic, or data point mentioned.
   - Forbidden Anchor Text: Do NOT use vague phrases like "click here", "read more", "this study", "this article", "here", "link", etc.
5. Adhere to the requested tone and length.
6. Incorporate the proprietary data where relevant and appropriate.

Output only the final, complete blog post with accurate, descriptive, and relevant hyperlinks serving as citations."#,
};

pub struct WritingAgent;

impl WritingAgent {
    pub async fn run(runner: &dyn AgentRunner, request: &WritingRequest) -> AppResult<WritingData> {
        if request.outline_content.is_empty() {
            return Err(AppError::Validation(
                "Outline content is required".to_string(),
            ));
        }
        if request.session_id.is_none() {
            warn!("sessionId not provided for writing request");
        }

        let prompt = Self::build_prompt(request);

        let output = runner
            .run(&WRITING_AGENT, &prompt, request.session_id.as_deref())
            .await?;

        if output.trim().is_empty() {
            return Err(AppError::EmptyAgentOutput { agent: "Writing" });
        }

        info!(post_len = output.len(), "Writing stage complete");

        Ok(WritingData { blog_post: output })
    }

    fn build_prompt(request: &WritingRequest) -> String {
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
             Outline:\n{outline}\n\
             \n\
             IMPORTANT INSTRUCTION: This blog post MUST include proper citations and backlinks. For any facts, statistics, or major claims, find and cite appropriate sources using the web search tool. Include at least 5-7 hyperlinks to credible sources properly.\n\
             \n\
             Write the complete blog post, following the outline and incorporating the research/keywords/URLs.",
            topic = request.topic,
            audience = request.audience,
            tone = request.tone,
            length = request.length,
            keywords = keywords,
            notes = request.research_notes,
            urls = urls,
            proprietary = proprietary,
            outline = request.outline_content,
        )
    }
}
