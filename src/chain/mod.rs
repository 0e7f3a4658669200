//! Chain of responsibility: routing a request through ordered handlers.
//!
//! A chain owns its handlers as an ordered sequence. Handlers never hold a
//! reference to their successor, which keeps sub-chains cheap to build.

mod handler;
mod handler_chain;

pub use handler::{FnHandler, Handler, HandlerAction};
pub use handler_chain::{Dispatch, HandlerChain, SharedHandler};
