//! Application state and service initialization
//!
//! This module centralizes all service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use crate::model::Config;
use crate::service::{AnalysisService, ChatCompleter, ChatService, CompletionClient};

/// Application state containing all services and shared resources
///
/// Services are constructed once at process start and injected into
/// request handlers; nothing here is mutated after initialization.
pub struct AppState {
    pub config: Config,
    /// Four-axis analysis orchestrator
    pub analysis: AnalysisService,
    /// Detailed-chat orchestrator
    pub chat: ChatService,
}

impl AppState {
    /// Build application state with the real OpenAI completion client.
    pub fn new(config: Config) -> Self {
        let llm: Arc<dyn ChatCompleter> = Arc::new(CompletionClient::new(&config));
        Self::with_completer(config, llm)
    }

    /// Build application state around an explicit completion backend.
    /// Tests use this to run the full request path against a fake.
    pub fn with_completer(config: Config, llm: Arc<dyn ChatCompleter>) -> Self {
        let analysis = AnalysisService::new(Arc::clone(&llm));
        let chat = ChatService::new(llm);

        Self {
            config,
            analysis,
            chat,
        }
    }
}
