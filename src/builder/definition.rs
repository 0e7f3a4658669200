//! Machine definitions loaded from data.
//!
//! A definition describes a machine's states, initial state and rules as a
//! plain serde value, so a machine can be configured from a JSON document
//! instead of code. Building a definition runs the same validation as
//! [`StateMachine::new`].

use crate::builder::error::ConfigError;
use crate::core::{Event, State};
use crate::machine::{StateMachine, Transition};
use serde::{Deserialize, Serialize};

/// Serializable description of a state machine.
///
/// # Example
///
/// ```rust
/// use switchboard::builder::MachineDefinition;
///
/// let json = r#"{
///     "states": ["FirstFloor", "SecondFloor", "ThirdFloor"],
///     "initial": "FirstFloor",
///     "transitions": [
///         { "from": "FirstFloor", "event": "up", "to": "SecondFloor" },
///         { "from": "SecondFloor", "event": "up", "to": "ThirdFloor" },
///         { "from": "SecondFloor", "event": "down", "to": "FirstFloor" },
///         { "from": "ThirdFloor", "event": "down", "to": "SecondFloor" }
///     ]
/// }"#;
///
/// let definition: MachineDefinition<String, String> = MachineDefinition::from_json(json).unwrap();
/// let mut elevator = definition.build().unwrap();
///
/// elevator.trigger(&"up".to_string());
/// assert_eq!(elevator.current_state(), "SecondFloor");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineDefinition<S: State, E: Event> {
    pub states: Vec<S>,
    pub initial: S,
    #[serde(default)]
    pub transitions: Vec<Transition<S, E>>,
}

impl<S: State, E: Event> MachineDefinition<S, E> {
    /// Parse a definition from JSON.
    ///
    /// Only the document shape is checked here; state references are
    /// checked by [`MachineDefinition::build`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Render the definition as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Validate the definition and build a machine at its initial state.
    pub fn build(self) -> Result<StateMachine<S, E>, ConfigError> {
        StateMachine::new(self.states, self.initial, self.transitions)
    }
}
