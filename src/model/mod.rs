pub mod axis;
pub mod config;
pub mod evaluation;
pub mod message;
pub mod request;
pub mod response;

pub use axis::EvaluationAxis;
pub use config::Config;
pub use evaluation::{EvaluationRecord, Finding, Icon};
pub use message::{ChatTurn, Message, Role};
pub use request::{AnalyzeRequest, DetailedChatRequest};
pub use response::{AnalysisResponse, ChatResponse};
