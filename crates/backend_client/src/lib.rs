//! # Backend Client
//!
//! HTTP client for the question-answering backend. The controller
//! talks to the backend only through the [`ChatBackend`] trait so
//! tests can substitute doubles; [`HttpBackend`] is the reqwest
//! implementation of the real wire contract.

pub mod backend;
pub mod error;
pub mod http;

pub use backend::ChatBackend;
pub use error::{BackendError, Result};
pub use http::HttpBackend;
