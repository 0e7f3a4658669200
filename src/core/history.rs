//! State transition history tracking.
//!
//! Tracks the moves a state machine made, optionally keeping only the
//! newest ones.

use super::event::Event;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single move between states.
///
/// Only transitions that actually changed the current state are recorded;
/// no-op triggers leave no trace in the history.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, E: Event> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The event that caused the move
    pub event: E,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// The `record` method returns a new history with the transition added.
/// A state machine appends to its own history in place instead.
///
/// # Example
///
/// ```rust
/// use switchboard::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new();
///
/// let history = history.record(StateTransition {
///     from: "Bottom".to_string(),
///     to: "Middle".to_string(),
///     event: "up".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(StateTransition {
///     from: "Middle".to_string(),
///     to: "Top".to_string(),
///     event: "up".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Bottom -> Middle -> Top
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, E: Event> {
    transitions: Vec<StateTransition<S, E>>,
    /// Keep at most this many of the newest transitions
    #[serde(default)]
    limit: Option<usize>,
}

impl<S: State, E: Event> Default for StateHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> StateHistory<S, E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty history that keeps only the newest `limit` transitions.
    ///
    /// A limit of zero records nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a transition, returning a new history.
    ///
    /// This does not mutate the existing history but returns a new one
    /// with the transition added.
    pub fn record(&self, transition: StateTransition<S, E>) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append a transition in place, in amortized constant time.
    pub(crate) fn push(&mut self, transition: StateTransition<S, E>) {
        match self.limit {
            Some(0) => {}
            Some(limit) => {
                // Compact only once the buffer holds twice the window.
                if self.transitions.len() >= limit * 2 {
                    let excess = self.transitions.len() - limit + 1;
                    self.transitions.drain(..excess);
                }
                self.transitions.push(transition);
            }
            None => self.transitions.push(transition),
        }
    }

    /// Drop every recorded transition, keeping the limit.
    pub(crate) fn clear(&mut self) {
        self.transitions.clear();
    }

    /// Change the limit, discarding transitions beyond it.
    pub(crate) fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
        let excess = self.transitions.len() - self.window().len();
        self.transitions.drain(..excess);
    }

    fn window(&self) -> &[StateTransition<S, E>] {
        match self.limit {
            Some(limit) => {
                let start = self.transitions.len().saturating_sub(limit);
                &self.transitions[start..]
            }
            None => &self.transitions,
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the first `from` state, then
    /// the `to` state of each transition. Empty when nothing moved.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.window().first() {
            path.push(&first.from);
        }
        for transition in self.window() {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let window = self.window();
        if let (Some(first), Some(last)) = (window.first(), window.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions in the order they were recorded.
    pub fn transitions(&self) -> &[StateTransition<S, E>] {
        self.window()
    }

    /// The most recent move, if any.
    pub fn last(&self) -> Option<&StateTransition<S, E>> {
        self.window().last()
    }

    pub fn len(&self) -> usize {
        self.window().len()
    }

    pub fn is_empty(&self) -> bool {
        self.window().is_empty()
    }
}
