use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaxgramError {
    #[error("Api error: {0}")]
    Api(String),

    #[error("Context error: {0}")]
    Context(#[from] ContextError),

    /// For handler implementations to report their own failures.
    #[error("Handler error: {0}")]
    Handler(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Raised by [`crate::Context`] when an action needs an id the update does not carry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    #[error("Cannot reply without chat_id in context")]
    MissingChatId,

    #[error("Cannot answer callback without callback_id in context")]
    MissingCallbackId,
}

pub type Result<T> = std::result::Result<T, MaxgramError>;

impl MaxgramError {
    /// Returns the context error if this is one, for callers that branch on missing ids.
    pub fn as_context(&self) -> Option<ContextError> {
        match self {
            MaxgramError::Context(e) => Some(*e),
            _ => None,
        }
    }
}
