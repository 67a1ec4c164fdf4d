//! # Chat State
//!
//! The conversation store: the single shared mutable resource of a
//! chat session. Holds the ordered, append-only transcript and the
//! one in-flight flag, and nothing else. No I/O.

pub mod store;

pub use store::ConversationStore;
