//! # Handler chain
//!
//! Builds one [`Context`] per update and runs handlers over it: every `before` in order (any may stop
//! the chain), then `handle` until one returns Stop or Reply, then every `after` in reverse order.

use maxgram_core::{Api, Context, Handler, HandlerResponse, Result, Update};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered handlers sharing one context per update.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler (runs in order; first Stop/Reply ends handler phase).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Wraps `update` in a fresh [`Context`] and runs the chain. Returns the first Stop or Reply, or Continue.
    #[instrument(skip(self, update, api), fields(update_type = ?update.update_type))]
    pub async fn handle(&self, update: &Update, api: Arc<dyn Api>) -> Result<HandlerResponse> {
        let ctx = Context::new(update, api);
        let mut final_response = HandlerResponse::Continue;

        info!(
            chat_id = ?ctx.chat_id(),
            callback_id = ?ctx.callback_id(),
            "step: handler_chain started"
        );

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let should_continue = handler.before(&ctx).await?;
            if !should_continue {
                info!(
                    chat_id = ?ctx.chat_id(),
                    handler = %handler_name,
                    "step: handler before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(&ctx).await?;
            debug!(
                handler = %handler_name,
                response = ?response,
                "Handler processed"
            );

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    info!(
                        chat_id = ?ctx.chat_id(),
                        handler = %handler_name,
                        "step: handler chain stopped by handler"
                    );
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => continue,
            }
        }

        // After hooks run in reverse order (last added runs first).
        for handler in self.handlers.iter().rev() {
            handler.after(&ctx, &final_response).await?;
        }

        info!(
            chat_id = ?ctx.chat_id(),
            response = ?final_response,
            "step: handler_chain finished"
        );

        Ok(final_response)
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs
