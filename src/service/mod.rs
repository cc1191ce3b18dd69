pub mod analysis;
pub mod chat;
pub mod llm;
pub mod parser;
pub mod prompts;

pub use analysis::AnalysisService;
pub use chat::ChatService;
pub use llm::{ChatCompleter, CompletionClient};
