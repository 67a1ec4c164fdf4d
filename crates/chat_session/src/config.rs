//! Session configuration

/// Default trailing window of turns sent to the backend for context.
pub const DEFAULT_HISTORY_WINDOW: usize = 6;

/// Tunables for one session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How many trailing turns (including the turn being submitted)
    /// accompany each request. The window bounds request size; it is
    /// a client-side convention, not a protocol requirement. Zero
    /// omits the `history` field entirely.
    pub history_window: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }
}
