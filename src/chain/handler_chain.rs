//! Ordered handler chains and the result of dispatching through them.

use crate::builder::error::ConfigError;
use crate::chain::handler::Handler;
use log::{debug, trace};
use std::sync::Arc;

/// Handlers are shared so sub-chains reuse them without copying.
pub type SharedHandler<R, O> = Arc<dyn Handler<R, O>>;

/// Result of dispatching one request.
#[derive(Clone, Debug, PartialEq)]
pub enum Dispatch<R, O> {
    /// A handler accepted the request
    Handled {
        /// Name of the accepting handler
        handler: String,
        /// Index of the accepting handler within the dispatching chain
        position: usize,
        /// What the accepting handler produced
        output: O,
    },

    /// No handler accepted; the request is handed back unchanged
    Unhandled(R),
}

impl<R, O> Dispatch<R, O> {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled { .. })
    }

    /// Name of the handler that accepted the request, if any.
    pub fn handler(&self) -> Option<&str> {
        match self {
            Self::Handled { handler, .. } => Some(handler),
            Self::Unhandled(_) => None,
        }
    }

    pub fn output(&self) -> Option<&O> {
        match self {
            Self::Handled { output, .. } => Some(output),
            Self::Unhandled(_) => None,
        }
    }

    pub fn into_output(self) -> Option<O> {
        match self {
            Self::Handled { output, .. } => Some(output),
            Self::Unhandled(_) => None,
        }
    }

    /// The original request, if nothing accepted it.
    pub fn into_unhandled(self) -> Option<R> {
        match self {
            Self::Handled { .. } => None,
            Self::Unhandled(request) => Some(request),
        }
    }
}

/// Ordered sequence of handlers consulted first to last.
///
/// Order is kept exactly as given. Dispatch never mutates the chain, so a
/// chain can be shared between threads and dispatched concurrently.
///
/// # Example
///
/// ```rust
/// use switchboard::builder::HandlerChainBuilder;
/// use switchboard::chain::Dispatch;
///
/// let chain = HandlerChainBuilder::new()
///     .when("Squirrel", |f: &String| f == "Nut", |f: &String| format!("Squirrel eats {f}"))
///     .when("Monkey", |f: &String| f == "Banana", |f: &String| format!("Monkey eats {f}"))
///     .build()
///     .unwrap();
///
/// assert_eq!(chain.dispatch("Banana".to_string()).handler(), Some("Monkey"));
/// assert_eq!(
///     chain.dispatch("Coffee".to_string()),
///     Dispatch::Unhandled("Coffee".to_string())
/// );
/// ```
pub struct HandlerChain<R, O> {
    handlers: Vec<SharedHandler<R, O>>,
}

impl<R, O> HandlerChain<R, O> {
    /// Create a chain from handlers in priority order. May be empty.
    pub fn new(handlers: Vec<SharedHandler<R, O>>) -> Self {
        Self { handlers }
    }

    /// Create a chain that must contain at least one handler.
    pub fn non_empty(handlers: Vec<SharedHandler<R, O>>) -> Result<Self, ConfigError> {
        if handlers.is_empty() {
            return Err(ConfigError::EmptyChain);
        }
        Ok(Self::new(handlers))
    }

    /// Route `request` to the first handler that accepts it.
    ///
    /// Handlers after the accepting one are never consulted.
    pub fn dispatch(&self, request: R) -> Dispatch<R, O> {
        for (position, handler) in self.handlers.iter().enumerate() {
            if !handler.can_handle(&request) {
                trace!("Handler '{}' declined request", handler.name());
                continue;
            }

            debug!(
                "Handler '{}' at position {} accepted request",
                handler.name(),
                position
            );
            return Dispatch::Handled {
                handler: handler.name().to_string(),
                position,
                output: handler.handle(&request),
            };
        }

        debug!("Request left unhandled by {} handlers", self.handlers.len());
        Dispatch::Unhandled(request)
    }

    /// Dispatch each request in order, collecting one result per request.
    pub fn dispatch_all<I>(&self, requests: I) -> Vec<Dispatch<R, O>>
    where
        I: IntoIterator<Item = R>,
    {
        requests
            .into_iter()
            .map(|request| self.dispatch(request))
            .collect()
    }

    /// Chain of the handlers at index `start` and after.
    ///
    /// Lets a caller enter the chain at any handler, not only the first.
    /// A start past the end yields an empty chain.
    pub fn sub_chain(&self, start: usize) -> Self {
        let handlers = self.handlers.get(start..).unwrap_or(&[]).to_vec();
        Self { handlers }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn handler_names(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }
}

impl<R, O> Clone for HandlerChain<R, O> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<R, O> std::fmt::Debug for HandlerChain<R, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerChain")
            .field("handlers", &self.handler_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::handler::FnHandler;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn eater(name: &'static str, food: &'static str) -> SharedHandler<String, String> {
        Arc::new(FnHandler::accepting(
            name,
            food.to_string(),
            move |f: &String| format!("{name}: I'll eat the {f}"),
        ))
    }

    fn zoo() -> HandlerChain<String, String> {
        HandlerChain::new(vec![
            eater("Monkey", "Banana"),
            eater("Squirrel", "Nut"),
            eater("Dog", "MeatBall"),
        ])
    }

    #[test]
    fn dispatch_finds_accepting_handler() {
        let chain = zoo();

        let result = chain.dispatch("Nut".to_string());

        assert_eq!(
            result,
            Dispatch::Handled {
                handler: "Squirrel".to_string(),
                position: 1,
                output: "Squirrel: I'll eat the Nut".to_string(),
            }
        );
    }

    #[test]
    fn dispatch_returns_unhandled_request() {
        let chain = zoo();

        let result = chain.dispatch("Cup of coffee".to_string());

        assert!(!result.is_handled());
        assert_eq!(result.into_unhandled(), Some("Cup of coffee".to_string()));
    }

    #[test]
    fn dispatch_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let second_calls = Arc::clone(&calls);

        let handlers: Vec<SharedHandler<u32, &'static str>> = vec![
            Arc::new(FnHandler::new("first", |_: &u32| true, |_: &u32| "first")),
            Arc::new(FnHandler::new(
                "second",
                move |_: &u32| {
                    second_calls.fetch_add(1, Ordering::SeqCst);
                    true
                },
                |_: &u32| "second",
            )),
        ];
        let chain = HandlerChain::new(handlers);

        let result = chain.dispatch(7);

        assert_eq!(result.output(), Some(&"first"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_chain_leaves_everything_unhandled() {
        let chain: HandlerChain<String, String> = HandlerChain::new(Vec::new());

        assert!(chain.is_empty());
        assert_eq!(
            chain.dispatch("Nut".to_string()),
            Dispatch::Unhandled("Nut".to_string())
        );
    }

    #[test]
    fn non_empty_rejects_empty_sequence() {
        let result: Result<HandlerChain<String, String>, _> = HandlerChain::non_empty(Vec::new());

        assert_eq!(result.unwrap_err(), ConfigError::EmptyChain);
    }

    #[test]
    fn sub_chain_skips_earlier_handlers() {
        let chain = zoo();
        let sub = chain.sub_chain(1);

        assert_eq!(sub.handler_names(), vec!["Squirrel", "Dog"]);
        assert!(!sub.dispatch("Banana".to_string()).is_handled());
        assert_eq!(sub.dispatch("MeatBall".to_string()).handler(), Some("Dog"));
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn repeated_handlers_are_kept() {
        let squirrel = eater("Squirrel", "Nut");
        let chain = HandlerChain::new(vec![
            Arc::clone(&squirrel),
            eater("Dog", "MeatBall"),
            squirrel,
        ]);

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.handler_names(), vec!["Squirrel", "Dog", "Squirrel"]);
        assert!(matches!(
            chain.sub_chain(2).dispatch("Nut".to_string()),
            Dispatch::Handled { position: 0, .. }
        ));
    }

    #[test]
    fn sub_chain_past_end_is_empty() {
        let chain = zoo();

        assert!(chain.sub_chain(3).is_empty());
        assert!(chain.sub_chain(10).is_empty());
    }

    #[test]
    fn dispatch_all_keeps_request_order() {
        let chain = zoo();

        let results = chain.dispatch_all(["Nut", "Banana", "Cup of coffee"].map(String::from));

        let handlers: Vec<Option<&str>> = results.iter().map(Dispatch::handler).collect();
        assert_eq!(handlers, vec![Some("Squirrel"), Some("Monkey"), None]);
    }

    #[test]
    fn chain_is_shareable_across_threads() {
        let chain = Arc::new(zoo());

        let workers: Vec<_> = ["Nut", "Banana", "MeatBall"]
            .into_iter()
            .map(|food| {
                let chain = Arc::clone(&chain);
                std::thread::spawn(move || chain.dispatch(food.to_string()).is_handled())
            })
            .collect();

        for worker in workers {
            assert!(worker.join().unwrap());
        }
    }
}
