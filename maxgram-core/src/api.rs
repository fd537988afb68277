//! Outbound API abstraction.
//!
//! [`Api`] is transport-agnostic: [`crate::Context`] only ever calls these two methods, so tests and
//! alternative clients substitute their own implementation.

use crate::error::Result;
use crate::types::{Attachment, CallbackAnswer, SentMessage};
use async_trait::async_trait;

/// The two capabilities a context consumes. Transport errors are reported as
/// [`crate::MaxgramError::Api`] and reach the caller unchanged.
#[async_trait]
pub trait Api: Send + Sync {
    /// Sends a message with optional attachments to the given chat.
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        attachments: Option<&[Attachment]>,
    ) -> Result<SentMessage>;

    /// Acknowledges a callback, optionally showing `text` to the user as a notification.
    async fn answer_callback(&self, callback_id: &str, text: Option<&str>)
        -> Result<CallbackAnswer>;
}
