use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};

/// A single study card as served by `/flashcards`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fr: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub en: String,
}

impl Flashcard {
    pub fn new(category: impl Into<String>, fr: impl Into<String>, en: impl Into<String>) -> Self {
        Self { category: category.into(), fr: fr.into(), en: en.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Flashcard>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
}

#[derive(Debug, Serialize)]
pub(crate) struct SpeechRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpeechResponse {
    #[serde(default)]
    pub success: bool,
    pub file: Option<String>,
    pub error: Option<String>,
}

/// Outcome of a well-formed `/tts` exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechReply {
    /// Absolute URL of the synthesized audio.
    Ready { url: String },
    Rejected { error: String },
}

/// Opaque visit identifier. Whatever JSON value the backend hands out is sent back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(serde_json::Value);

impl SessionId {
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(ref s) if s.is_empty() => None,
            other => Some(Self(other)),
        }
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct VisitStartRequest<'a> {
    pub user_agent: &'a str,
    pub referrer: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VisitStartResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub session_id: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct VisitEndRequest {
    pub session_id: SessionId,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
