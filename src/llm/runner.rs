use crate::types::AppResult;
use async_trait::async_trait;

/// A named configuration of instructions plus an optional web-search tool,
/// presented to the model for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct AgentDef {
    pub name: &'static str,
    pub instructions: &'static str,
    pub web_search: bool,
}

/// Capability interface for executing an agent.
///
/// The pipeline depends only on this trait, so tests swap the real
/// provider adapter for a deterministic stub. `session_id` is an opaque
/// caller-supplied correlation tag; implementations record it for
/// instrumentation and must not attach any other semantics to it.
#[async_trait]
pub trait AgentRunner: Send + Sync {
    async fn run(
        &self,
        agent: &AgentDef,
        input: &str,
        session_id: Option<&str>,
    ) -> AppResult<String>;
}
