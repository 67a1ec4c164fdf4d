//! # Chat Session
//!
//! The session controller: the single entry point for turning user
//! intent into transcript state. Validates input, appends the user
//! turn, derives the bounded history window, performs the one remote
//! call, and settles exactly one assistant turn back into the store.

pub mod config;
pub mod controller;

pub use config::SessionConfig;
pub use controller::{Outcome, SessionController, FALLBACK_REPLY};
