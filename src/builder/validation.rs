//! Eager validation of machine configurations.
//!
//! Uses stillwater's `Validation` to accumulate ALL violations, so a
//! misconfigured machine reports every problem in one pass.

use crate::builder::error::{ConfigError, ConfigViolation};
use crate::core::{Event, State};
use crate::machine::Transition;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Check a state set, initial state and transition table together.
///
/// Returns `ConfigError::Invalid` listing every violation found.
pub(crate) fn validate_machine<S: State, E: Event>(
    states: &[S],
    initial: &S,
    transitions: &[Transition<S, E>],
) -> Result<(), ConfigError> {
    let mut checks: Vec<Check> = Vec::new();

    checks.push(check_initial(states, initial));

    for (index, state) in states.iter().enumerate() {
        if states[..index].contains(state) {
            checks.push(Validation::fail(ConfigViolation::DuplicateState {
                state: state.name().to_string(),
            }));
        }
    }

    for (index, transition) in transitions.iter().enumerate() {
        checks.push(check_endpoints(states, transition));

        let repeated = transitions[..index]
            .iter()
            .any(|earlier| earlier.matches(&transition.from, &transition.event));
        if repeated {
            checks.push(Validation::fail(ConfigViolation::DuplicateTransition {
                from: transition.from.name().to_string(),
                event: transition.event.label().to_string(),
            }));
        }
    }

    match Validation::all_vec(checks) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(violations) => {
            Err(ConfigError::Invalid(violations.iter().cloned().collect()))
        }
    }
}

fn check_initial<S: State>(states: &[S], initial: &S) -> Check {
    if states.contains(initial) {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::UnknownInitialState {
            state: initial.name().to_string(),
        })
    }
}

fn check_endpoints<S: State, E: Event>(states: &[S], transition: &Transition<S, E>) -> Check {
    let mut checks: Vec<Check> = Vec::new();

    if !states.contains(&transition.from) {
        checks.push(Validation::fail(ConfigViolation::UnknownSourceState {
            from: transition.from.name().to_string(),
            event: transition.event.label().to_string(),
        }));
    }

    if !states.contains(&transition.to) {
        checks.push(Validation::fail(ConfigViolation::DanglingTarget {
            from: transition.from.name().to_string(),
            event: transition.event.label().to_string(),
            to: transition.to.name().to_string(),
        }));
    }

    if checks.is_empty() {
        return Validation::success(());
    }
    Validation::all_vec(checks).map(|_| ())
}
