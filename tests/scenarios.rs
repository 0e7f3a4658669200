//! End-to-end scenarios: the three-floor elevator and the feeding chain.

use switchboard::builder::{symmetric, HandlerChainBuilder, MachineDefinition, StateMachineBuilder};
use switchboard::chain::{Dispatch, FnHandler};
use switchboard::machine::{StateMachine, TransitionOutcome};
use switchboard::{event_enum, state_enum};

state_enum! {
    enum Floor {
        Bottom,
        Middle,
        Top,
    }
}

event_enum! {
    enum Button {
        Up,
        Down,
    }
}

fn elevator() -> StateMachine<Floor, Button> {
    StateMachineBuilder::new()
        .states([Floor::Bottom, Floor::Middle, Floor::Top])
        .initial(Floor::Bottom)
        .transitions(symmetric(Floor::Bottom, Button::Up, Floor::Middle, Button::Down))
        .transitions(symmetric(Floor::Middle, Button::Up, Floor::Top, Button::Down))
        .build()
        .unwrap()
}

#[test]
fn elevator_rides_up_and_back() {
    let mut machine = elevator();
    assert_eq!(machine.current_state(), &Floor::Bottom);

    let outcome = machine.trigger(&Button::Up);
    assert_eq!(
        outcome,
        TransitionOutcome {
            from: Floor::Bottom,
            to: Floor::Middle,
            moved: true
        }
    );

    let outcome = machine.trigger(&Button::Up);
    assert!(outcome.moved);
    assert_eq!(machine.current_state(), &Floor::Top);

    let outcome = machine.trigger(&Button::Up);
    assert!(!outcome.moved);
    assert_eq!(outcome.to, Floor::Top);
    assert_eq!(machine.current_state(), &Floor::Top);

    let outcome = machine.trigger(&Button::Down);
    assert!(outcome.moved);
    assert_eq!(machine.current_state(), &Floor::Middle);

    assert_eq!(
        machine.history().get_path(),
        vec![&Floor::Bottom, &Floor::Middle, &Floor::Top, &Floor::Middle]
    );
}

#[test]
fn elevator_ignores_down_on_bottom_floor() {
    let mut machine = elevator();

    let outcome = machine.trigger(&Button::Down);

    assert!(outcome.is_noop());
    assert_eq!(machine.current_state(), &Floor::Bottom);
}

#[test]
fn elevator_from_json_definition() {
    let json = r#"{
        "states": ["FirstFloor", "SecondFloor", "ThirdFloor"],
        "initial": "FirstFloor",
        "transitions": [
            { "from": "FirstFloor", "event": "up", "to": "SecondFloor" },
            { "from": "SecondFloor", "event": "up", "to": "ThirdFloor" },
            { "from": "SecondFloor", "event": "down", "to": "FirstFloor" },
            { "from": "ThirdFloor", "event": "down", "to": "SecondFloor" }
        ]
    }"#;

    let mut machine = MachineDefinition::<String, String>::from_json(json)
        .unwrap()
        .build()
        .unwrap();

    let up = "up".to_string();
    let moves: Vec<bool> = (0..3).map(|_| machine.trigger(&up).moved).collect();

    assert_eq!(moves, vec![true, true, false]);
    assert_eq!(machine.current_state(), "ThirdFloor");
}

#[test]
fn feeding_chain_routes_by_food() {
    let chain = HandlerChainBuilder::new()
        .handler(FnHandler::accepting("AcceptsNut", "Nut".to_string(), |f: &String| {
            format!("Squirrel: I'll eat the {f}")
        }))
        .handler(FnHandler::accepting(
            "AcceptsBanana",
            "Banana".to_string(),
            |f: &String| format!("Monkey: I'll eat the {f}"),
        ))
        .build()
        .unwrap();

    let nut = chain.dispatch("Nut".to_string());
    assert_eq!(nut.handler(), Some("AcceptsNut"));
    assert_eq!(
        nut.output().map(String::as_str),
        Some("Squirrel: I'll eat the Nut")
    );

    let banana = chain.dispatch("Banana".to_string());
    assert_eq!(banana.handler(), Some("AcceptsBanana"));

    let coffee = chain.dispatch("Coffee".to_string());
    assert_eq!(coffee, Dispatch::Unhandled("Coffee".to_string()));
}

#[test]
fn sub_chain_enters_mid_way() {
    let chain = HandlerChainBuilder::new()
        .when("Monkey", |f: &String| f == "Banana", |_: &String| "Monkey")
        .when("Squirrel", |f: &String| f == "Nut", |_: &String| "Squirrel")
        .when("Dog", |f: &String| f == "MeatBall", |_: &String| "Dog")
        .build()
        .unwrap();

    let sub = chain.sub_chain(1);
    let foods = ["Nut", "Banana", "Cup of coffee"].map(String::from);

    let eaters: Vec<Option<&str>> = sub
        .dispatch_all(foods)
        .into_iter()
        .map(Dispatch::into_output)
        .collect();

    assert_eq!(eaters, vec![Some("Squirrel"), None, None]);
}
