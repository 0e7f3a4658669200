//! Event-driven finite-state machines.
//!
//! # Key Concepts
//!
//! - **Transitions**: `(from, event) -> to` rules, fixed at construction
//! - **State Machine**: owns the state set and its current position
//! - **Outcomes**: every trigger returns what happened, including no-ops
//!
//! The machine stores its current state as an index into its own state
//! set; states never point back at the machine.

mod state_machine;
mod transition;

pub use state_machine::StateMachine;
pub use transition::{Transition, TransitionOutcome};
