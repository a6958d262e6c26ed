use std::sync::{
    mpsc,
    Arc,
};

use tokio::runtime::{
    Handle,
    Runtime,
};

use super::TaskResult;
use crate::{
    api::{
        ApiClient,
        PageResponse,
    },
    core::{
        pagination::PageRequest,
        ticker::compose_headline,
        AppError,
    },
};

type Notifier = Arc<dyn Fn() + Send + Sync>;

/// Runs network calls off the UI thread and hands their results back through a channel.
///
/// Results are drained with [`TaskManager::poll_results`] at the top of each frame, so
/// every state change still happens on the UI thread.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    api: ApiClient,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    notifier: Option<Notifier>,
}

impl TaskManager {
    pub fn new(api: ApiClient) -> Result<Self, AppError> {
        let runtime = Arc::new(Runtime::new()?);

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, api, receiver, sender, notifier: None })
    }

    /// Called after every result is queued, typically to wake the UI.
    pub fn set_notifier(&mut self, notifier: impl Fn() + Send + Sync + 'static) {
        self.notifier = Some(Arc::new(notifier));
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn handle(&self) -> &Handle {
        self.runtime.handle()
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (ApiClient, impl Fn(TaskResult) + Send + 'static) {
        let sender = self.sender.clone();
        let notifier = self.notifier.clone();
        let deliver = move |result: TaskResult| {
            let _ = sender.send(result);
            if let Some(notify) = &notifier {
                notify();
            }
        };
        (self.api.clone(), deliver)
    }

    pub fn load_page(&self, request: PageRequest) {
        let (api, deliver) = self.task_context();

        self.runtime.spawn(async move {
            let result = api
                .fetch_flashcards(request.page, request.page_size, request.query())
                .await
                .map_err(|e| e.to_string());

            deliver(TaskResult::PageLoaded { request, result });
        });
    }

    /// Pulls a large unfiltered batch and turns it into the ticker text.
    pub fn load_headline(&self, batch_size: u32) {
        let (api, deliver) = self.task_context();

        self.runtime.spawn(async move {
            let batch = api.fetch_flashcards(1, batch_size, None).await;
            deliver(TaskResult::Headline(headline_for(batch)));
        });
    }

    pub fn start_visit(&self, user_agent: String, referrer: String) {
        let (api, deliver) = self.task_context();

        self.runtime.spawn(async move {
            let result =
                api.start_visit(&user_agent, &referrer).await.map_err(|e| e.to_string());

            deliver(TaskResult::VisitStarted(result));
        });
    }

    pub fn synthesize_speech(&self, text: String) {
        let (api, deliver) = self.task_context();

        self.runtime.spawn(async move {
            let result = api.synthesize_speech(&text).await.map_err(|e| e.to_string());

            deliver(TaskResult::Speech(result));
        });
    }
}

fn headline_for(batch: Result<PageResponse, AppError>) -> String {
    compose_headline(batch, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use std::time::{
        Duration,
        Instant,
    };

    use super::*;
    use crate::{
        api::Flashcard,
        core::ticker::WELCOME_MESSAGE,
        test_support::{
            direct_client,
            serve_once,
            unreachable_base,
        },
    };

    fn wait_for_result(manager: &mut TaskManager) -> TaskResult {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let Some(result) = manager.poll_results().into_iter().next() {
                return result;
            }
            assert!(Instant::now() < deadline, "task did not report back in time");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn page_load_reports_back_with_its_request() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"success":true,"total":1,"items":[{"category":"Salutations","fr":"Salut","en":"Hi"}]}"#,
        );
        let mut manager =
            TaskManager::new(ApiClient::with_client(&base, direct_client()).unwrap()).unwrap();

        let request = PageRequest { page: 1, page_size: 12, query: "salut".into() };
        manager.load_page(request.clone());

        match wait_for_result(&mut manager) {
            TaskResult::PageLoaded { request: echoed, result } => {
                assert_eq!(echoed, request);
                let page = result.expect("page parsed");
                assert_eq!(page.items, vec![Flashcard::new("Salutations", "Salut", "Hi")]);
            }
            other => panic!("unexpected result: {}", other.task_type()),
        }

        let raw = server.join().unwrap();
        assert!(raw.starts_with("GET /flashcards?page=1&page_size=12&q=salut "));
    }

    #[test]
    fn headline_falls_back_when_backend_is_down() {
        let mut manager =
            TaskManager::new(ApiClient::with_client(&unreachable_base(), direct_client()).unwrap())
                .unwrap();

        manager.load_headline(300);

        match wait_for_result(&mut manager) {
            TaskResult::Headline(text) => assert_eq!(text, WELCOME_MESSAGE),
            other => panic!("unexpected result: {}", other.task_type()),
        }
    }

    #[test]
    fn notifier_fires_per_result() {
        let (base, _server) = serve_once("200 OK", r#"{"success":true,"session_id":"s-1"}"#);
        let mut manager =
            TaskManager::new(ApiClient::with_client(&base, direct_client()).unwrap()).unwrap();

        let (tx, rx) = mpsc::channel();
        manager.set_notifier(move || {
            let _ = tx.send(());
        });
        manager.start_visit("agent".into(), String::new());

        assert!(rx.recv_timeout(Duration::from_secs(10)).is_ok());
        match wait_for_result(&mut manager) {
            TaskResult::VisitStarted(Ok(Some(session))) => assert_eq!(session.to_string(), "s-1"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
