//! Builder for constructing handler chains.

use crate::builder::error::ConfigError;
use crate::chain::{FnHandler, Handler, HandlerChain, SharedHandler};
use std::sync::Arc;

/// Builder that appends handlers in priority order.
pub struct HandlerChainBuilder<R, O> {
    handlers: Vec<SharedHandler<R, O>>,
}

impl<R: 'static, O: 'static> HandlerChainBuilder<R, O> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Append a handler.
    pub fn handler<H>(mut self, handler: H) -> Self
    where
        H: Handler<R, O> + 'static,
    {
        self.handlers.push(Arc::new(handler));
        self
    }

    /// Append a handler that is already shared with another chain.
    pub fn shared(mut self, handler: SharedHandler<R, O>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Append a handler built from a predicate and an action.
    pub fn when<P, A>(self, name: impl Into<String>, predicate: P, action: A) -> Self
    where
        P: Fn(&R) -> bool + Send + Sync + 'static,
        A: Fn(&R) -> O + Send + Sync + 'static,
    {
        self.handler(FnHandler::new(name, predicate, action))
    }

    /// Build the chain.
    /// Returns an error if no handler was added.
    pub fn build(self) -> Result<HandlerChain<R, O>, ConfigError> {
        HandlerChain::non_empty(self.handlers)
    }
}

impl<R: 'static, O: 'static> Default for HandlerChainBuilder<R, O> {
    fn default() -> Self {
        Self::new()
    }
}
