//! Elevator State Machine
//!
//! This example drives a three-floor elevator with up/down buttons.
//!
//! Key concepts:
//! - Event-driven transitions between a fixed set of states
//! - Boundary buttons (down on the bottom floor, up on the top) are no-ops
//! - Transition history recorded as data
//!
//! Run with: RUST_LOG=debug cargo run --example elevator

use switchboard::builder::{symmetric, StateMachineBuilder};
use switchboard::core::State;
use switchboard::machine::StateMachine;
use switchboard::{event_enum, state_enum};

state_enum! {
    enum Floor {
        FirstFloor,
        SecondFloor,
        ThirdFloor,
    }
}

event_enum! {
    enum Button {
        Up,
        Down,
    }
}

fn push(elevator: &mut StateMachine<Floor, Button>, button: Button) {
    println!("Button {button:?} pushed");
    let outcome = elevator.trigger(&button);

    if outcome.moved {
        println!("  Elevator moving from {} to {}", outcome.from.name(), outcome.to.name());
    } else {
        println!("  Nothing to do, already on {}", outcome.from.name());
    }
}

fn present(elevator: &StateMachine<Floor, Button>) {
    println!("Elevator is in {}\n", elevator.current_state().name());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Elevator State Machine ===\n");

    let mut elevator = StateMachineBuilder::new()
        .states([Floor::FirstFloor, Floor::SecondFloor, Floor::ThirdFloor])
        .initial(Floor::FirstFloor)
        .transitions(symmetric(
            Floor::FirstFloor,
            Button::Up,
            Floor::SecondFloor,
            Button::Down,
        ))
        .transitions(symmetric(
            Floor::SecondFloor,
            Button::Up,
            Floor::ThirdFloor,
            Button::Down,
        ))
        .build()?;

    present(&elevator);

    push(&mut elevator, Button::Down);
    push(&mut elevator, Button::Up);
    push(&mut elevator, Button::Up);
    push(&mut elevator, Button::Up);
    present(&elevator);

    push(&mut elevator, Button::Down);
    present(&elevator);

    let path: Vec<&str> = elevator
        .history()
        .get_path()
        .into_iter()
        .map(|floor| floor.name())
        .collect();
    println!("Path travelled: {}", path.join(" -> "));

    println!("\n=== Example Complete ===");
    Ok(())
}
