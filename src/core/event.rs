//! Event labels that drive state transitions.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for the events a state machine reacts to.
///
/// An event is the label on a transition edge, e.g. pushing the "up"
/// button. Events that no state has a rule for are still valid input:
/// triggering them is a no-op.
///
/// # Example
///
/// ```rust
/// use switchboard::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Button {
///     Up,
///     Down,
/// }
///
/// impl Event for Button {
///     fn label(&self) -> &str {
///         match self {
///             Self::Up => "Up",
///             Self::Down => "Down",
///         }
///     }
/// }
///
/// assert_eq!(Button::Up.label(), "Up");
/// ```
pub trait Event:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's label for display/logging.
    fn label(&self) -> &str;
}

impl Event for String {
    fn label(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Start,
        Stop,
    }

    impl Event for TestEvent {
        fn label(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Stop => "Stop",
            }
        }
    }

    #[test]
    fn event_label_returns_correct_value() {
        assert_eq!(TestEvent::Start.label(), "Start");
        assert_eq!(TestEvent::Stop.label(), "Stop");
    }

    #[test]
    fn string_event_uses_itself_as_label() {
        assert_eq!(String::from("up").label(), "up");
    }
}
