//! Core State trait for state machine states.
//!
//! All state machine states must implement this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// A state is one discrete mode of a subject, such as the floor an
/// elevator is parked on. States are plain values: the machine owns the
/// set of them and only its current position changes.
///
/// # Required Traits
///
/// - `Clone`: states are copied into outcomes and history records
/// - `PartialEq`: states are compared when looking up transitions
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: machines can be described as data
///
/// # Example
///
/// ```rust
/// use switchboard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Floor {
///     Bottom,
///     Middle,
///     Top,
/// }
///
/// impl State for Floor {
///     fn name(&self) -> &str {
///         match self {
///             Self::Bottom => "Bottom",
///             Self::Middle => "Middle",
///             Self::Top => "Top",
///         }
///     }
/// }
///
/// assert_eq!(Floor::Middle.name(), "Middle");
/// assert!(!Floor::Top.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states are informational only: the machine still applies any
    /// transition defined for them.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Free-form states, used when a machine is loaded from a definition file.
impl State for String {
    fn name(&self) -> &str {
        self
    }
}
