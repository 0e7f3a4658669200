//! Configuration errors for state machines and handler chains.

use thiserror::Error;

/// A single problem found while validating a machine configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Initial state '{state}' is not in the state set")]
    UnknownInitialState { state: String },

    #[error("Transition on '{event}' starts at unknown state '{from}'")]
    UnknownSourceState { from: String, event: String },

    #[error("Transition from '{from}' on '{event}' targets unknown state '{to}'")]
    DanglingTarget {
        from: String,
        event: String,
        to: String,
    },

    #[error("State '{state}' is declared more than once")]
    DuplicateState { state: String },

    #[error("More than one transition from '{from}' on '{event}'")]
    DuplicateTransition { from: String, event: String },
}

/// Errors raised while constructing a state machine or handler chain.
///
/// These only ever occur at construction time. Triggering an event with no
/// rule, or dispatching a request no handler accepts, is never an error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Handler chain is empty. Add at least one handler")]
    EmptyChain,

    #[error("Failed to parse machine definition: {0}")]
    Parse(String),

    #[error("Invalid machine configuration: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

impl ConfigError {
    /// Violations carried by an `Invalid` error, empty for other variants.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::Invalid(violations) => violations,
            _ => &[],
        }
    }
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
