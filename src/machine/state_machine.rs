//! State machine that applies event-driven transitions.

use crate::builder::error::{ConfigError, ConfigViolation};
use crate::builder::validation::validate_machine;
use crate::core::{Event, State, StateHistory, StateTransition};
use crate::machine::transition::{Transition, TransitionOutcome};
use chrono::Utc;
use log::{debug, trace, warn};

/// Finite-state machine over a fixed set of states and transitions.
///
/// The state set and transition table are validated once, at construction,
/// and never change afterwards. Only the current position moves, and only
/// through [`StateMachine::trigger`].
///
/// # Example
///
/// ```rust
/// use switchboard::machine::{StateMachine, Transition};
///
/// let floors: Vec<String> = vec!["Bottom".into(), "Top".into()];
/// let mut elevator = StateMachine::new(
///     floors,
///     "Bottom".to_string(),
///     vec![
///         Transition::new("Bottom".to_string(), "up".to_string(), "Top".to_string()),
///         Transition::new("Top".to_string(), "down".to_string(), "Bottom".to_string()),
///     ],
/// )
/// .unwrap();
///
/// let outcome = elevator.trigger(&"up".to_string());
/// assert!(outcome.moved);
/// assert_eq!(elevator.current_state(), "Top");
///
/// // Already at the top: a defined no-op.
/// let outcome = elevator.trigger(&"up".to_string());
/// assert!(!outcome.moved);
/// ```
pub struct StateMachine<S: State, E: Event> {
    states: Vec<S>,
    transitions: Vec<Transition<S, E>>,
    current: usize,
    history: StateHistory<S, E>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create a machine positioned at `initial`.
    ///
    /// Fails with [`ConfigError::Invalid`] if the initial state or any
    /// transition endpoint is not in `states`, or if states or rules are
    /// duplicated. Every violation is reported, not just the first.
    pub fn new(
        states: Vec<S>,
        initial: S,
        transitions: Vec<Transition<S, E>>,
    ) -> Result<Self, ConfigError> {
        if let Err(error) = validate_machine(&states, &initial, &transitions) {
            warn!("Rejected state machine configuration: {error}");
            return Err(error);
        }

        let current = states
            .iter()
            .position(|state| *state == initial)
            .ok_or_else(|| {
                ConfigError::Invalid(vec![ConfigViolation::UnknownInitialState {
                    state: initial.name().to_string(),
                }])
            })?;

        debug!(
            "Built state machine with {} states and {} transitions, starting at '{}'",
            states.len(),
            transitions.len(),
            initial.name()
        );

        Ok(Self {
            states,
            transitions,
            current,
            history: StateHistory::new(),
        })
    }

    /// Apply `event` to the current state.
    ///
    /// If the current state has a rule for `event`, the machine moves to its
    /// target and the move is recorded in the history. Otherwise nothing
    /// changes and the outcome has `moved == false`. Events no state knows
    /// about behave the same as a missing rule.
    pub fn trigger(&mut self, event: &E) -> TransitionOutcome<S> {
        let from = self.current_state().clone();

        let target = self
            .transitions
            .iter()
            .find(|t| t.matches(&from, event))
            .and_then(|t| self.index_of(&t.to));

        let Some(index) = target else {
            trace!("No transition from '{}' on '{}'", from.name(), event.label());
            return TransitionOutcome::stayed(from);
        };

        self.current = index;
        let to = self.states[index].clone();

        debug!(
            "Transition '{}' -> '{}' on '{}'",
            from.name(),
            to.name(),
            event.label()
        );

        self.history.push(StateTransition {
            from: from.clone(),
            to: to.clone(),
            event: event.clone(),
            timestamp: Utc::now(),
        });

        TransitionOutcome::moved(from, to)
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.states[self.current]
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current_state().is_final()
    }

    /// All states, in declaration order.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// The rules leaving `state`, in declaration order.
    pub fn transitions_for<'a>(
        &'a self,
        state: &'a S,
    ) -> impl Iterator<Item = &'a Transition<S, E>> + 'a {
        self.transitions.iter().filter(move |t| t.from == *state)
    }

    /// Events that would move the machine from where it is now.
    pub fn available_events(&self) -> Vec<&E> {
        self.transitions_for(self.current_state())
            .map(|t| &t.event)
            .collect()
    }

    /// Check whether `event` would move the machine (pure)
    pub fn can_trigger(&self, event: &E) -> bool {
        let current = self.current_state();
        self.transitions.iter().any(|t| t.matches(current, event))
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S, E> {
        &self.history
    }

    /// Forget every recorded move.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Keep only the newest `limit` moves, or all of them with `None`.
    ///
    /// `Some(0)` turns history off.
    pub fn set_history_limit(&mut self, limit: Option<usize>) {
        self.history.set_limit(limit);
    }

    fn index_of(&self, state: &S) -> Option<usize> {
        self.states.iter().position(|s| s == state)
    }
}

impl<S: State, E: Event> std::fmt::Debug for StateMachine<S, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", self.current_state())
            .field("states", &self.states)
            .field("transitions", &self.transitions)
            .finish()
    }
}
