use tokio::runtime::Handle;
use tracing::{
    info,
    warn,
};

use crate::api::{
    ApiClient,
    Beacon,
    SessionId,
};

/// Identifies this client in place of a browser's `navigator.userAgent`.
pub fn user_agent() -> String {
    format!(
        "{}/{} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}

/// Anonymous visit analytics for one run of the app. Everything here is best effort.
#[derive(Debug, Default)]
pub struct VisitTracker {
    session: Option<SessionId>,
}

impl VisitTracker {
    pub fn new() -> Self {
        Self { session: None }
    }

    pub fn session(&self) -> Option<&SessionId> {
        self.session.as_ref()
    }

    /// Stores the outcome of `visit_start`. Errors are only logged.
    pub fn record_start<E: std::fmt::Display>(&mut self, result: Result<Option<SessionId>, E>) {
        match result {
            Ok(Some(session)) => {
                info!("[Visit] Session started: {}", session);
                self.session = Some(session);
            }
            Ok(None) => warn!("[Visit] visit_start did not return a session"),
            Err(e) => warn!("[Visit] visit_start failed: {}", e),
        }
    }

    /// Sends the end-of-visit signal once. Without a session this is a no-op.
    pub fn end(&mut self, api: &ApiClient, runtime: &Handle) -> Option<Beacon> {
        let session = self.session.take()?;
        info!("[Visit] Ending session {}", session);
        api.end_visit(session, runtime)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        core::AppError,
        test_support::{
            direct_client,
            serve_once,
        },
    };

    fn session(id: &str) -> SessionId {
        SessionId::from_value(serde_json::json!(id)).expect("non-empty id")
    }

    #[test]
    fn user_agent_names_the_client() {
        let agent = user_agent();
        assert!(agent.starts_with("lexicard/"));
        assert!(agent.contains(std::env::consts::OS));
    }

    #[test]
    fn successful_start_keeps_the_session() {
        let mut tracker = VisitTracker::new();
        tracker.record_start::<AppError>(Ok(Some(session("abc-123"))));
        assert_eq!(tracker.session(), Some(&session("abc-123")));
    }

    #[test]
    fn failed_start_leaves_no_session() {
        let mut tracker = VisitTracker::new();
        tracker.record_start(Err(AppError::Custom("offline".into())));
        assert!(tracker.session().is_none());

        tracker.record_start::<AppError>(Ok(None));
        assert!(tracker.session().is_none());
    }

    #[test]
    fn end_without_session_sends_nothing() {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let api = ApiClient::with_client("http://127.0.0.1:9", reqwest::Client::new())
            .expect("valid base");

        let mut tracker = VisitTracker::new();
        assert!(tracker.end(&api, runtime.handle()).is_none());
    }

    #[test]
    fn end_signal_is_sent_once() {
        let (base, server) = serve_once("200 OK", r#"{"success":true}"#);
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let api = ApiClient::with_client(&base, direct_client()).expect("valid base");

        let mut tracker = VisitTracker::new();
        tracker.record_start::<AppError>(Ok(Some(session("abc"))));

        let beacon = tracker.end(&api, runtime.handle()).expect("first end sends");
        assert!(beacon.wait(Duration::from_secs(5)));
        assert!(tracker.session().is_none());
        assert!(tracker.end(&api, runtime.handle()).is_none());

        let raw = server.join().expect("server thread");
        assert!(raw.starts_with("POST /visit_end HTTP/1.1"), "{raw}");
        assert!(raw.ends_with(r#"{"session_id":"abc"}"#), "{raw}");
    }

    #[test]
    fn numeric_session_ids_stay_opaque() {
        let id = SessionId::from_value(serde_json::json!(42)).expect("numeric id");
        assert_eq!(id.to_string(), "42");
        assert_eq!(serde_json::to_value(&id).expect("serializes"), serde_json::json!(42));
        assert!(SessionId::from_value(serde_json::Value::Null).is_none());
        assert!(SessionId::from_value(serde_json::json!("")).is_none());
    }
}
