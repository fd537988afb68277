//! Mock implementation of [`maxgram_core::Api`] that records sends and callback answers.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use maxgram_core::{Api, Attachment, CallbackAnswer, Message, Result, SentMessage};

/// Mock Api. `sent` holds `(chat_id, text)` per send; `answered` holds `(callback_id, text)` per answer.
#[derive(Default)]
pub struct MockApi {
    pub sent: Mutex<Vec<(i64, String)>>,
    pub answered: Mutex<Vec<(String, Option<String>)>>,
}

impl MockApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl Api for MockApi {
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        _attachments: Option<&[Attachment]>,
    ) -> Result<SentMessage> {
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        Ok(SentMessage {
            message: Message {
                chat_id: Some(chat_id),
                ..Default::default()
            },
        })
    }

    async fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
    ) -> Result<CallbackAnswer> {
        self.answered
            .lock()
            .unwrap()
            .push((callback_id.to_string(), text.map(str::to_string)));
        Ok(CallbackAnswer {
            success: true,
            message: None,
        })
    }
}
