//! # maxgram-core
//!
//! Update model, the [`Api`] trait a bot client implements, and the per-update [`Context`] that
//! resolves chat and callback ids and replies through the API, plus the [`Handler`] trait run per update and
//! tracing setup.

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod logger;
pub mod types;

pub use api::Api;
pub use config::LogConfig;
pub use context::Context;
pub use error::{ContextError, MaxgramError, Result};
pub use handler::{Handler, HandlerResponse};
pub use logger::init_tracing;
pub use types::{
    Attachment, Callback, CallbackAnswer, Message, MessageBody, Recipient, SentMessage, Update,
    UpdateType, User,
};
