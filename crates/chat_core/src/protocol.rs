//! Wire protocol for the backend chat endpoint
//!
//! Mirrors the backend's JSON contract exactly: `POST /chat` with a
//! message plus optional trailing history, answered with an answer
//! string and an ordered list of source documents. `GET /health`
//! reports backend readiness.

use serde::{Deserialize, Serialize};

use crate::turn::Turn;

/// Request body for `POST /chat`.
///
/// `history` is the trailing window of prior turns, including the
/// message being submitted; it is omitted entirely for the
/// single-turn client variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<Turn>>,
}

/// A source document backing an answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceDoc {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Success response body for `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub answer: String,
    /// Ordered as returned by the backend; may be absent.
    #[serde(default)]
    pub sources: Vec<SourceDoc>,
}

/// Response body for `GET /health`.
///
/// The backend reports `ready` plus a free-form map of component
/// states (vector store, LLM, ...). Only `ready` is interpreted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HealthStatus {
    #[serde(default)]
    pub ready: bool,
    #[serde(flatten)]
    pub components: serde_json::Map<String, serde_json::Value>,
}
