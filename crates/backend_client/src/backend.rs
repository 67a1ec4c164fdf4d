//! ChatBackend - the seam between the controller and the network

use async_trait::async_trait;
use chat_core::{ChatRequest, ChatResponse};

use crate::error::Result;

/// One blocking round trip against the chat endpoint.
///
/// Implementations must not retry: a failure is terminal for the
/// turn and is surfaced by the caller.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse>;
}
