//! # Chat Core
//!
//! Shared types for the campus chat client: the transcript data model
//! (turns and roles) and the JSON wire protocol spoken by the
//! question-answering backend.

pub mod citation;
pub mod protocol;
pub mod turn;

// Re-exports
pub use citation::format_answer;
pub use protocol::{ChatRequest, ChatResponse, HealthStatus, SourceDoc};
pub use turn::{Role, Turn};
