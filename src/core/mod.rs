//! Core value types shared by the state machine and the handler chain.
//!
//! This module contains the pure building blocks:
//! - State and event definitions via the `State` and `Event` traits
//! - Guard predicates for accepting values
//! - Immutable history tracking
//!
//! Nothing in this module has side effects.

mod event;
mod guard;
mod history;
mod state;

pub use event::Event;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
