//! Core types: inbound update, message, user, callback, and what the API returns for sends and answers.
//!
//! Every field of an update is optional on the wire; missing keys deserialize to `None` (or an empty
//! list) so an empty object is a valid, if useless, [`Update`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// Kind of inbound event. Tags the platform adds later deserialize to [`UpdateType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateType {
    MessageCreated,
    MessageCallback,
    MessageEdited,
    MessageRemoved,
    BotAdded,
    BotRemoved,
    UserAdded,
    UserRemoved,
    BotStarted,
    ChatTitleChanged,
    #[serde(other)]
    Unknown,
}

/// User identity as the platform reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub is_bot: bool,
}

/// Where a message was delivered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    #[serde(default)]
    pub chat_id: Option<i64>,
    #[serde(default)]
    pub chat_type: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Non-text content item. `payload` is kept as raw JSON since its shape depends on `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl Attachment {
    pub fn new(kind: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub mid: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// Text-only bodies send `"attachments": null`; that reads as an empty list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attachments: Vec<Attachment>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A message. Newer updates wrap the chat id in `recipient`; older ones put `chat_id` on the message itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub sender: Option<User>,
    #[serde(default)]
    pub recipient: Option<Recipient>,
    #[serde(default)]
    pub body: Option<MessageBody>,
    #[serde(default)]
    pub chat_id: Option<i64>,
    /// Unix time in milliseconds.
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl Message {
    /// Chat id from `recipient.chat_id`, falling back to the flat `chat_id`.
    pub fn chat_id(&self) -> Option<i64> {
        match (&self.recipient, self.chat_id) {
            (
                Some(Recipient {
                    chat_id: Some(id), ..
                }),
                _,
            ) => Some(*id),
            (_, flat) => flat,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.body.as_ref().and_then(|b| b.text.as_deref())
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp.and_then(DateTime::from_timestamp_millis)
    }
}

/// Nested callback data delivered with `message_callback` updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Callback {
    #[serde(default)]
    pub callback_id: Option<String>,
    #[serde(default)]
    pub payload: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// One inbound event. Callback data may be flat (`callback_id`, `payload`) or nested under `callback`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub update_type: Option<UpdateType>,
    #[serde(default)]
    pub chat_id: Option<i64>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub callback_id: Option<String>,
    #[serde(default)]
    pub payload: Option<String>,
    #[serde(default)]
    pub callback: Option<Callback>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl Update {
    /// Parses an update from its JSON form. Nested values of the wrong shape are rejected here.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Result of a send: the message as the platform stored it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentMessage {
    pub message: Message,
}

/// Result of answering a callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackAnswer {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
