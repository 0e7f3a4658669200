//! Builder for constructing state machines.

use crate::builder::error::ConfigError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, State};
use crate::machine::{StateMachine, Transition};

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use switchboard::builder::StateMachineBuilder;
/// use switchboard::{event_enum, state_enum};
///
/// state_enum! {
///     enum Floor {
///         Bottom,
///         Middle,
///         Top,
///     }
/// }
///
/// event_enum! {
///     enum Button {
///         Up,
///         Down,
///     }
/// }
///
/// let mut elevator = StateMachineBuilder::new()
///     .states([Floor::Bottom, Floor::Middle, Floor::Top])
///     .initial(Floor::Bottom)
///     .rule(Floor::Bottom, Button::Up, Floor::Middle)
///     .rule(Floor::Middle, Button::Up, Floor::Top)
///     .rule(Floor::Middle, Button::Down, Floor::Bottom)
///     .rule(Floor::Top, Button::Down, Floor::Middle)
///     .build()
///     .unwrap();
///
/// assert!(elevator.trigger(&Button::Up).moved);
/// assert_eq!(elevator.current_state(), &Floor::Middle);
/// ```
pub struct StateMachineBuilder<S: State, E: Event> {
    states: Vec<S>,
    initial: Option<S>,
    transitions: Vec<Transition<S, E>>,
    history_limit: Option<usize>,
}

impl<S: State, E: Event> StateMachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            initial: None,
            transitions: Vec::new(),
            history_limit: None,
        }
    }

    /// Declare a state.
    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    /// Declare several states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a `(from, event) -> to` rule.
    pub fn rule(mut self, from: S, event: E, to: S) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, E>) -> Result<Self, ConfigError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition<S, E>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Keep only the newest `limit` moves in the history. Zero disables it.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Build the state machine.
    ///
    /// Returns an error if the initial state is missing or the
    /// configuration fails validation.
    pub fn build(self) -> Result<StateMachine<S, E>, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitialState)?;
        let mut machine = StateMachine::new(self.states, initial, self.transitions)?;
        machine.set_history_limit(self.history_limit);
        Ok(machine)
    }
}

impl<S: State, E: Event> Default for StateMachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
