use crate::{
    api::{
        PageResponse,
        SessionId,
        SpeechReply,
    },
    core::pagination::PageRequest,
};

#[derive(Debug, Clone)]
pub enum TaskResult {
    PageLoaded { request: PageRequest, result: Result<PageResponse, String> },
    Headline(String),
    VisitStarted(Result<Option<SessionId>, String>),
    Speech(Result<SpeechReply, String>),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::PageLoaded { .. } => "page_loaded",
            TaskResult::Headline(_) => "headline",
            TaskResult::VisitStarted(_) => "visit_started",
            TaskResult::Speech(_) => "speech",
        }
    }
}
