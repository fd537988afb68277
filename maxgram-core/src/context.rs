//! Per-update request context.
//!
//! A [`Context`] borrows one [`Update`], resolves the chat id and callback data once, whichever shape
//! the update arrived in, and offers [`Context::reply`] and [`Context::answer_callback`] on top of the
//! injected [`Api`]. Build a fresh context for every update.

use std::sync::Arc;

use tracing::debug;

use crate::api::Api;
use crate::error::{ContextError, Result};
use crate::types::{Attachment, CallbackAnswer, Message, SentMessage, Update, UpdateType, User};

pub struct Context<'a> {
    update: &'a Update,
    api: Arc<dyn Api>,
    update_type: Option<UpdateType>,
    chat_id: Option<i64>,
    user: Option<&'a User>,
    message: Option<&'a Message>,
    callback_id: Option<&'a str>,
    payload: Option<&'a str>,
}

impl<'a> Context<'a> {
    /// Wraps `update`. Never fails: anything the update lacks stays `None`.
    pub fn new(update: &'a Update, api: Arc<dyn Api>) -> Self {
        let message = update.message.as_ref();
        let (callback_id, payload) = resolve_callback(update);
        let chat_id = update.chat_id.or_else(|| message.and_then(Message::chat_id));

        debug!(
            update_type = ?update.update_type,
            chat_id = ?chat_id,
            callback_id = ?callback_id,
            has_message = message.is_some(),
            "context created"
        );

        Self {
            update,
            api,
            update_type: update.update_type,
            chat_id,
            user: update.user.as_ref(),
            message,
            callback_id,
            payload,
        }
    }

    pub fn update(&self) -> &'a Update {
        self.update
    }

    pub fn api(&self) -> &Arc<dyn Api> {
        &self.api
    }

    pub fn update_type(&self) -> Option<UpdateType> {
        self.update_type
    }

    pub fn chat_id(&self) -> Option<i64> {
        self.chat_id
    }

    pub fn user(&self) -> Option<&'a User> {
        self.user
    }

    pub fn message(&self) -> Option<&'a Message> {
        self.message
    }

    pub fn callback_id(&self) -> Option<&'a str> {
        self.callback_id
    }

    pub fn payload(&self) -> Option<&'a str> {
        self.payload
    }

    /// Text of the message body, if the update carries one.
    pub fn text(&self) -> Option<&'a str> {
        self.message.and_then(Message::text)
    }

    /// Who triggered the update: top-level user, then message sender, then callback user.
    pub fn sender(&self) -> Option<&'a User> {
        self.user
            .or_else(|| self.message.and_then(|m| m.sender.as_ref()))
            .or_else(|| self.update.callback.as_ref().and_then(|c| c.user.as_ref()))
    }

    pub fn is_callback(&self) -> bool {
        self.update_type == Some(UpdateType::MessageCallback) || self.callback_id.is_some()
    }

    /// Sends `text` to the chat the update came from.
    ///
    /// Fails with [`ContextError::MissingChatId`] before touching the API when no chat id resolves.
    /// Whatever the API returns, success or error, is handed back as is.
    pub async fn reply(
        &self,
        text: &str,
        attachments: Option<&[Attachment]>,
    ) -> Result<SentMessage> {
        let chat_id = self.resolve_chat_id().ok_or(ContextError::MissingChatId)?;
        debug!(
            chat_id,
            text_len = text.len(),
            attachments = attachments.map_or(0, |a| a.len()),
            "step: reply"
        );
        self.api.send_message(chat_id, text, attachments).await
    }

    /// Acknowledges the callback that triggered this update.
    ///
    /// Fails with [`ContextError::MissingCallbackId`] before touching the API when the update is not a callback.
    pub async fn answer_callback(&self, text: Option<&str>) -> Result<CallbackAnswer> {
        let callback_id = self.callback_id.ok_or(ContextError::MissingCallbackId)?;
        debug!(callback_id, has_text = text.is_some(), "step: answer_callback");
        self.api.answer_callback(callback_id, text).await
    }

    fn resolve_chat_id(&self) -> Option<i64> {
        self.chat_id.or_else(|| self.message.and_then(Message::chat_id))
    }
}

/// Empty strings count as missing.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Top-level callback id and payload, or the nested `callback` ones for `message_callback` updates
/// that only carry the nested form.
fn resolve_callback(update: &Update) -> (Option<&str>, Option<&str>) {
    let callback_id = non_empty(update.callback_id.as_deref());
    let payload = non_empty(update.payload.as_deref());

    match (callback_id, update.update_type, update.callback.as_ref()) {
        (None, Some(UpdateType::MessageCallback), Some(callback)) => (
            non_empty(callback.callback_id.as_deref()),
            payload.or_else(|| non_empty(callback.payload.as_deref())),
        ),
        _ => (callback_id, payload),
    }
}
