//! ConversationStore - authoritative holder of the transcript
//!
//! Turns are only ever appended at the tail and never edited or
//! removed. All reads go through `snapshot`, which returns a clone
//! frozen at the instant of the call, so consumers never observe a
//! partially applied mutation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use chat_core::Turn;
use log::trace;

/// Ordered transcript of one session plus the in-flight flag.
///
/// Safe to share behind an `Arc` and to mutate from the settlement
/// path of an async call: the transcript sits behind a `Mutex` and
/// the pending flag is atomic.
#[derive(Debug, Default)]
pub struct ConversationStore {
    turns: Mutex<Vec<Turn>>,
    pending: AtomicBool,
}

impl ConversationStore {
    /// Create an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a conversation seeded with one assistant greeting turn.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let store = Self::new();
        store.append_turn(Turn::assistant(greeting));
        store
    }

    /// Append a turn at the tail.
    ///
    /// The controller guarantees no user turn is appended while a
    /// request is in flight; the store itself accepts any turn.
    pub fn append_turn(&self, turn: Turn) {
        let mut turns = self.turns.lock().expect("transcript lock poisoned");
        trace!("append turn #{} ({:?})", turns.len(), turn.role);
        turns.push(turn);
    }

    /// Toggle the in-flight flag.
    pub fn set_pending(&self, pending: bool) {
        self.pending.store(pending, Ordering::SeqCst);
    }

    /// Atomically flip the in-flight flag from idle to pending.
    ///
    /// Returns `false` when a request is already outstanding, in
    /// which case the flag is left untouched. This is the guard that
    /// totally orders submissions.
    pub fn begin_pending(&self) -> bool {
        self.pending
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// A frozen copy of the transcript, consistent at the instant of
    /// the call. Does not alias internal state.
    pub fn snapshot(&self) -> Vec<Turn> {
        self.turns.lock().expect("transcript lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.turns.lock().expect("transcript lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
