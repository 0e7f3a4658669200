//! Switchboard: deterministic stateful dispatch
//!
//! Switchboard provides two small, independent building blocks for routing
//! control flow: a finite-state machine driven by events, and a chain of
//! responsibility that routes requests to the first handler willing to take
//! them. Both are single-threaded, synchronous and in-memory.
//!
//! # Core Concepts
//!
//! - **State / Event**: type-safe identifiers via the `State` and `Event` traits
//! - **StateMachine**: fixed transition table, one current state, no-op on a
//!   missing rule
//! - **HandlerChain**: ordered handlers, first acceptor wins, explicit
//!   `Unhandled` otherwise
//! - **Builders**: fluent, validated construction; misconfiguration fails
//!   before a machine or chain exists
//!
//! # Example
//!
//! ```rust
//! use switchboard::builder::{HandlerChainBuilder, StateMachineBuilder};
//! use switchboard::chain::Dispatch;
//! use switchboard::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Floor {
//!         Bottom,
//!         Middle,
//!         Top,
//!     }
//! }
//!
//! event_enum! {
//!     enum Button {
//!         Up,
//!         Down,
//!     }
//! }
//!
//! let mut elevator = StateMachineBuilder::new()
//!     .states([Floor::Bottom, Floor::Middle, Floor::Top])
//!     .initial(Floor::Bottom)
//!     .rule(Floor::Bottom, Button::Up, Floor::Middle)
//!     .rule(Floor::Middle, Button::Up, Floor::Top)
//!     .rule(Floor::Middle, Button::Down, Floor::Bottom)
//!     .rule(Floor::Top, Button::Down, Floor::Middle)
//!     .build()
//!     .unwrap();
//!
//! assert!(!elevator.trigger(&Button::Down).moved); // already at the bottom
//! assert!(elevator.trigger(&Button::Up).moved);
//!
//! let feeders = HandlerChainBuilder::new()
//!     .when("Squirrel", |f: &String| f == "Nut", |f: &String| format!("Squirrel eats the {f}"))
//!     .when("Monkey", |f: &String| f == "Banana", |f: &String| format!("Monkey eats the {f}"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(feeders.dispatch("Nut".to_string()).handler(), Some("Squirrel"));
//! assert_eq!(
//!     feeders.dispatch("Coffee".to_string()),
//!     Dispatch::Unhandled("Coffee".to_string())
//! );
//! ```

pub mod builder;
pub mod chain;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{
    ConfigError, ConfigViolation, HandlerChainBuilder, MachineDefinition, StateMachineBuilder,
    TransitionBuilder,
};
pub use chain::{Dispatch, FnHandler, Handler, HandlerChain, SharedHandler};
pub use self::core::{Event, Guard, State, StateHistory, StateTransition};
pub use machine::{StateMachine, Transition, TransitionOutcome};
