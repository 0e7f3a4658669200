//! Handlers: a predicate deciding what to accept, and an action.

use crate::core::Guard;

/// One unit of conditional request processing.
///
/// A handler only answers for itself. It never knows which handler comes
/// next; ordering belongs to [`HandlerChain`](crate::chain::HandlerChain).
///
/// # Example
///
/// ```rust
/// use switchboard::chain::Handler;
///
/// struct Squirrel;
///
/// impl Handler<String, String> for Squirrel {
///     fn name(&self) -> &str {
///         "Squirrel"
///     }
///
///     fn can_handle(&self, request: &String) -> bool {
///         request == "Nut"
///     }
///
///     fn handle(&self, request: &String) -> String {
///         format!("Squirrel: I'll eat the {request}")
///     }
/// }
///
/// let squirrel = Squirrel;
/// assert!(squirrel.can_handle(&"Nut".to_string()));
/// assert!(!squirrel.can_handle(&"Banana".to_string()));
/// ```
pub trait Handler<R, O>: Send + Sync {
    /// Name reported in dispatch results and logs.
    fn name(&self) -> &str;

    /// Check if this handler accepts the request (pure).
    fn can_handle(&self, request: &R) -> bool;

    /// Produce the output for an accepted request.
    ///
    /// Only called after `can_handle` returned true for the same request.
    fn handle(&self, request: &R) -> O;
}

/// Type alias for handler action functions.
pub type HandlerAction<R, O> = Box<dyn Fn(&R) -> O + Send + Sync>;

/// Handler assembled from a guard and an action closure.
pub struct FnHandler<R, O> {
    name: String,
    guard: Guard<R>,
    action: HandlerAction<R, O>,
}

impl<R, O> FnHandler<R, O> {
    /// Create a handler from a predicate and an action.
    ///
    /// ```rust
    /// use switchboard::chain::{FnHandler, Handler};
    ///
    /// let monkey = FnHandler::new(
    ///     "Monkey",
    ///     |food: &String| food == "Banana",
    ///     |food: &String| format!("Monkey: I'll eat the {food}"),
    /// );
    ///
    /// assert_eq!(monkey.name(), "Monkey");
    /// assert_eq!(monkey.handle(&"Banana".to_string()), "Monkey: I'll eat the Banana");
    /// ```
    pub fn new<P, A>(name: impl Into<String>, predicate: P, action: A) -> Self
    where
        P: Fn(&R) -> bool + Send + Sync + 'static,
        A: Fn(&R) -> O + Send + Sync + 'static,
    {
        Self::guarded(name, Guard::new(predicate), action)
    }

    /// Create a handler from an existing guard.
    pub fn guarded<A>(name: impl Into<String>, guard: Guard<R>, action: A) -> Self
    where
        A: Fn(&R) -> O + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            guard,
            action: Box::new(action),
        }
    }
}

impl<R: PartialEq + Send + Sync + 'static, O> FnHandler<R, O> {
    /// Handler that accepts exactly one request value.
    pub fn accepting<A>(name: impl Into<String>, expected: R, action: A) -> Self
    where
        A: Fn(&R) -> O + Send + Sync + 'static,
    {
        Self::guarded(name, Guard::equals(expected), action)
    }
}

impl<R, O> Handler<R, O> for FnHandler<R, O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_handle(&self, request: &R) -> bool {
        self.guard.check(request)
    }

    fn handle(&self, request: &R) -> O {
        (self.action)(request)
    }
}

impl<R, O> std::fmt::Debug for FnHandler<R, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnHandler")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
