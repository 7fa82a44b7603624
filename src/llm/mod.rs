// Agent invocation layer

pub mod openai;
pub mod runner;

pub use openai::OpenAiRunner;
pub use runner::{AgentDef, AgentRunner};
