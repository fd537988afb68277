//! Recording implementation of [`maxgram_core::Api`] for integration tests.
//!
//! Every call is stored as an [`ApiCall`] so tests can assert on exactly what the context sent,
//! or that nothing was sent at all.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use maxgram_core::{
    Api, Attachment, CallbackAnswer, MaxgramError, Message, MessageBody, Recipient, Result,
    SentMessage,
};

/// One recorded call to the API.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    SendMessage {
        chat_id: i64,
        text: String,
        attachments: Option<Vec<Attachment>>,
    },
    AnswerCallback {
        callback_id: String,
        text: Option<String>,
    },
}

/// Mock Api that records calls and either succeeds with a canned response or fails with `Api(error)`.
pub struct MockApi {
    calls: Mutex<Vec<ApiCall>>,
    fail_with: Option<String>,
}

impl MockApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_with: None,
        })
    }

    /// Every call fails with `MaxgramError::Api(error)` (still recorded).
    pub fn failing(error: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(error.to_string()),
        })
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The message `send_message` returns for the given chat and text.
    pub fn sent_message(chat_id: i64, text: &str) -> SentMessage {
        SentMessage {
            message: Message {
                recipient: Some(Recipient {
                    chat_id: Some(chat_id),
                    ..Default::default()
                }),
                body: Some(MessageBody {
                    mid: Some(format!("mid.{}", chat_id)),
                    text: Some(text.to_string()),
                    attachments: Vec::new(),
                }),
                ..Default::default()
            },
        }
    }

    fn record(&self, call: ApiCall) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_with {
            Some(error) => Err(MaxgramError::Api(error.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Api for MockApi {
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        attachments: Option<&[Attachment]>,
    ) -> Result<SentMessage> {
        self.record(ApiCall::SendMessage {
            chat_id,
            text: text.to_string(),
            attachments: attachments.map(|a| a.to_vec()),
        })?;
        Ok(Self::sent_message(chat_id, text))
    }

    async fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
    ) -> Result<CallbackAnswer> {
        self.record(ApiCall::AnswerCallback {
            callback_id: callback_id.to_string(),
            text: text.map(str::to_string),
        })?;
        Ok(CallbackAnswer {
            success: true,
            message: None,
        })
    }
}
