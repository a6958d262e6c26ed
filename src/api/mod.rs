//! HTTP client for the flashcard backend.
//!
//! Only builds requests and parses responses; deciding what a failure means for the UI is
//! left to the caller.

use std::time::Duration;

use reqwest::{
    Client,
    Url,
};
use tokio::runtime::Handle;
use tracing::{
    debug,
    warn,
};

use crate::core::{
    visit::user_agent,
    AppError,
};

mod beacon;
pub mod types;

pub use beacon::Beacon;
pub use types::{
    Flashcard,
    PageResponse,
    SessionId,
    SpeechReply,
};
use types::{
    SpeechRequest,
    SpeechResponse,
    VisitEndRequest,
    VisitStartRequest,
    VisitStartResponse,
};

#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent())
            .build()
            .map_err(|e| AppError::Custom(format!("HTTP client build failed: {e}")))?;

        Self::with_client(base_url, http)
    }

    pub fn with_client(base_url: &str, http: Client) -> Result<Self, AppError> {
        Ok(Self { base: parse_base(base_url)?, http })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.base.join(path).map_err(|e| AppError::InvalidUrl {
            url: format!("{}{}", self.base, path),
            reason: e.to_string(),
        })
    }

    /// `GET /flashcards`. A `success: false` body is returned as-is, not as an error.
    pub async fn fetch_flashcards(
        &self,
        page: u32,
        page_size: u32,
        query: Option<&str>,
    ) -> Result<PageResponse, AppError> {
        let mut url = self.endpoint("flashcards")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &page.to_string());
            pairs.append_pair("page_size", &page_size.to_string());
            if let Some(q) = query.filter(|q| !q.is_empty()) {
                pairs.append_pair("q", q);
            }
        }

        debug!("[Api] GET {}", url);
        let response: PageResponse = self.http.get(url).send().await?.json().await?;
        Ok(response)
    }

    pub async fn synthesize_speech(&self, text: &str) -> Result<SpeechReply, AppError> {
        let url = self.endpoint("tts")?;
        let response: SpeechResponse =
            self.http.post(url).json(&SpeechRequest { text }).send().await?.json().await?;

        match response {
            SpeechResponse { success: true, file: Some(file), .. } if !file.is_empty() => {
                let url = self.endpoint(&file)?;
                Ok(SpeechReply::Ready { url: url.to_string() })
            }
            SpeechResponse { error, .. } => {
                warn!("[Api] TTS rejected: {:?}", error);
                Ok(SpeechReply::Rejected {
                    error: error.filter(|e| !e.is_empty()).unwrap_or_else(|| "unknown".to_string()),
                })
            }
        }
    }

    /// Registers a visit and returns the session id, if the backend granted one.
    pub async fn start_visit(
        &self,
        user_agent: &str,
        referrer: &str,
    ) -> Result<Option<SessionId>, AppError> {
        let url = self.endpoint("visit_start")?;
        let response: VisitStartResponse = self
            .http
            .post(url)
            .json(&VisitStartRequest { user_agent, referrer })
            .send()
            .await?
            .json()
            .await?;

        if !response.success {
            return Ok(None);
        }
        Ok(SessionId::from_value(response.session_id))
    }

    /// Best-effort `POST /visit_end`. Nothing is returned and nothing is retried.
    ///
    /// Prefers a beacon thread that outlives the UI; if that cannot be started, the request
    /// is spawned on `runtime` and abandoned.
    pub fn end_visit(&self, session_id: SessionId, runtime: &Handle) -> Option<Beacon> {
        let url = match self.endpoint("visit_end") {
            Ok(url) => url,
            Err(e) => {
                warn!("[Api] Cannot build visit_end URL: {}", e);
                return None;
            }
        };
        let payload = VisitEndRequest { session_id };

        match beacon::send_beacon(url.clone(), payload.clone()) {
            Ok(beacon) => Some(beacon),
            Err(e) => {
                debug!("[Api] Beacon unavailable ({}), falling back to plain request", e);
                let http = self.http.clone();
                runtime.spawn(async move {
                    let _ = http.post(url).json(&payload).send().await;
                });
                None
            }
        }
    }
}

fn parse_base(base_url: &str) -> Result<Url, AppError> {
    let mut base = Url::parse(base_url.trim()).map_err(|e| AppError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    if base.cannot_be_a_base() {
        return Err(AppError::InvalidUrl {
            url: base_url.to_string(),
            reason: "not a hierarchical URL".to_string(),
        });
    }

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}
