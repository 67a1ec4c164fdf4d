//! SessionController - submission orchestration
//!
//! `submit` is the only write path the presentation layer sees. Its
//! discipline: guard, optimistic user append, one remote call, then
//! settle exactly one assistant turn (success or failure) with the
//! pending flag released on every exit path.

use std::sync::Arc;

use backend_client::ChatBackend;
use chat_core::{format_answer, ChatRequest, Turn};
use chat_state::ConversationStore;
use log::{debug, warn};

use crate::config::SessionConfig;

/// Fixed transcript message for any failed round trip. Deliberately
/// generic: transport and decode failures are distinguished in logs
/// only, never shown to the user.
pub const FALLBACK_REPLY: &str =
    "\u{26A0}\u{FE0F} Could not reach the knowledge backend. \
     Please check that the server is running and try again.";

/// What a `submit` call did. Transcript state is fully determined by
/// the variant; callers that only render the store may ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Round trip succeeded; an answer turn was appended.
    Replied,
    /// Round trip failed; the fallback turn was appended.
    Failed,
    /// Trimmed input was empty; nothing happened.
    EmptyInput,
    /// Another request is in flight; submission dropped, not queued.
    AlreadyPending,
}

/// Orchestrates turn submission for one conversation.
///
/// Owns no state of its own beyond configuration: the transcript
/// lives in the [`ConversationStore`], the network behind the
/// [`ChatBackend`] seam.
pub struct SessionController {
    store: Arc<ConversationStore>,
    backend: Arc<dyn ChatBackend>,
    config: SessionConfig,
}

/// Clears the pending flag when dropped, so no exit path out of
/// `submit`, including a panic during settlement, can leave the
/// session stuck.
struct PendingGuard<'a> {
    store: &'a ConversationStore,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.store.set_pending(false);
    }
}

impl SessionController {
    pub fn new(store: Arc<ConversationStore>, backend: Arc<dyn ChatBackend>) -> Self {
        Self::with_config(store, backend, SessionConfig::default())
    }

    pub fn with_config(
        store: Arc<ConversationStore>,
        backend: Arc<dyn ChatBackend>,
        config: SessionConfig,
    ) -> Self {
        Self {
            store,
            backend,
            config,
        }
    }

    /// Frozen view of the transcript for rendering.
    pub fn transcript(&self) -> Vec<Turn> {
        self.store.snapshot()
    }

    pub fn is_pending(&self) -> bool {
        self.store.is_pending()
    }

    /// Submit one user message.
    ///
    /// Never returns an error: empty input and concurrent submissions
    /// are dropped, and a failed round trip becomes a fallback
    /// assistant turn. Exactly one assistant turn follows every
    /// accepted submission.
    pub async fn submit(&self, raw_text: &str) -> Outcome {
        let text = raw_text.trim();
        if text.is_empty() {
            debug!("submission dropped: empty input");
            return Outcome::EmptyInput;
        }

        if !self.store.begin_pending() {
            debug!("submission dropped: request already in flight");
            return Outcome::AlreadyPending;
        }
        let _guard = PendingGuard {
            store: self.store.as_ref(),
        };

        // Optimistic append: the transcript reflects user intent even
        // if the network call fails below.
        self.store.append_turn(Turn::user(text));

        let request = ChatRequest {
            message: text.to_string(),
            history: self.history_window(),
        };

        // The single suspension point.
        match self.backend.chat(&request).await {
            Ok(response) => {
                let content = format_answer(&response.answer, &response.sources);
                self.store.append_turn(Turn::assistant(content));
                Outcome::Replied
            }
            Err(err) => {
                warn!("chat round trip failed: {err}");
                self.store.append_turn(Turn::assistant(FALLBACK_REPLY));
                Outcome::Failed
            }
        }
    }

    /// Trailing window of the transcript at submission time, the
    /// just-appended user turn included. `None` when the window is
    /// configured to zero.
    fn history_window(&self) -> Option<Vec<Turn>> {
        if self.config.history_window == 0 {
            return None;
        }
        let snapshot = self.store.snapshot();
        let start = snapshot.len().saturating_sub(self.config.history_window);
        Some(snapshot[start..].to_vec())
    }
}
