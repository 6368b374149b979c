use std::sync::Arc;

use crate::config::Config;
use crate::db::{ConversationStore, DatabaseBackend};
use crate::llm::LlmProvider;
use crate::services::{ChatService, DiaryService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Document store: diary entries and users.
    pub db: Arc<dyn DatabaseBackend>,
    /// Key-value store holding conversation lists.
    pub conversations: Arc<dyn ConversationStore>,
    pub llm: LlmProvider,
    pub diary: DiaryService,
    pub chat: ChatService,
}

impl AppState {
    pub fn new(
        config: Config,
        db: Arc<dyn DatabaseBackend>,
        conversations: Arc<dyn ConversationStore>,
        llm: LlmProvider,
    ) -> Self {
        let diary = DiaryService::new(db.clone(), llm.clone());
        let chat = ChatService::new(conversations.clone(), llm.clone());

        Self {
            config: Arc::new(config),
            db,
            conversations,
            llm,
            diary,
            chat,
        }
    }
}
