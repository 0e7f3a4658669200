//! Transition rules and the outcome of triggering an event.

use crate::core::{Event, State};
use serde::{Deserialize, Serialize};

/// An event-labelled edge from one state to another.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State, E: Event> {
    pub from: S,
    pub event: E,
    pub to: S,
}

impl<S: State, E: Event> Transition<S, E> {
    pub fn new(from: S, event: E, to: S) -> Self {
        Self { from, event, to }
    }

    /// Check if this rule applies to `event` while in `current` (pure)
    pub fn matches(&self, current: &S, event: &E) -> bool {
        self.from == *current && self.event == *event
    }
}

/// What happened when an event was triggered.
///
/// A trigger with no matching rule is a normal outcome: `moved` is false
/// and `to` equals `from`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionOutcome<S: State> {
    pub from: S,
    pub to: S,
    pub moved: bool,
}

impl<S: State> TransitionOutcome<S> {
    pub(crate) fn moved(from: S, to: S) -> Self {
        Self {
            from,
            to,
            moved: true,
        }
    }

    pub(crate) fn stayed(at: S) -> Self {
        Self {
            from: at.clone(),
            to: at,
            moved: false,
        }
    }

    pub fn is_noop(&self) -> bool {
        !self.moved
    }
}
