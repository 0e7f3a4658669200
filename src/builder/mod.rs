//! Builder API for ergonomic machine and chain construction.
//!
//! This module provides fluent builders, data-driven definitions and macros
//! for creating state machines and handler chains. All configuration is
//! validated when it is built, never later.

pub mod chain;
pub mod definition;
pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;
pub(crate) mod validation;

pub use chain::HandlerChainBuilder;
pub use definition::MachineDefinition;
pub use error::{ConfigError, ConfigViolation};
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Event, State};
use crate::machine::Transition;

/// Create the symmetric pair of rules `a --forward--> b` and `b --back--> a`.
///
/// # Example
///
/// ```
/// use switchboard::builder::{symmetric, StateMachineBuilder};
///
/// let s = |name: &str| name.to_string();
///
/// let machine = StateMachineBuilder::new()
///     .states([s("Bottom"), s("Top")])
///     .initial(s("Bottom"))
///     .transitions(symmetric(s("Bottom"), s("up"), s("Top"), s("down")))
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.available_events(), vec![&s("up")]);
/// ```
pub fn symmetric<S: State, E: Event>(a: S, forward: E, b: S, back: E) -> [Transition<S, E>; 2] {
    [
        Transition::new(a.clone(), forward, b.clone()),
        Transition::new(b, back, a),
    ]
}
