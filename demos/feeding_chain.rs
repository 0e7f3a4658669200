//! Feeding Chain
//!
//! This example routes food to the first animal that wants it.
//!
//! Key concepts:
//! - Handlers consulted in a fixed order, first taker wins
//! - Unwanted requests come back as `Unhandled`
//! - Entering the chain part-way with a sub-chain
//!
//! Run with: RUST_LOG=trace cargo run --example feeding_chain

use switchboard::builder::HandlerChainBuilder;
use switchboard::chain::{Dispatch, FnHandler, HandlerChain};

fn eater(animal: &'static str, food: &str) -> FnHandler<String, String> {
    FnHandler::accepting(animal, food.to_string(), move |f: &String| {
        format!("{animal}: I'll eat the {f}")
    })
}

fn feed(chain: &HandlerChain<String, String>) {
    let foods = ["Nut", "Banana", "Cup of coffee"].map(String::from);

    let results = chain.dispatch_all(foods.clone());

    for (food, result) in foods.iter().zip(results) {
        println!("\nClient: Who wants a {food}?");
        match result {
            Dispatch::Handled { output, .. } => println!("\t{output}"),
            Dispatch::Unhandled(food) => println!("\t{food} was left untouched."),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Feeding Chain ===\n");

    let chain = HandlerChainBuilder::new()
        .handler(eater("Monkey", "Banana"))
        .handler(eater("Squirrel", "Nut"))
        .handler(eater("Dog", "MeatBall"))
        .build()?;

    println!("Chain: {}", chain.handler_names().join(" > "));
    feed(&chain);

    let sub = chain.sub_chain(1);
    println!("\n\nSub-chain: {}", sub.handler_names().join(" > "));
    feed(&sub);

    println!("\n=== Example Complete ===");
    Ok(())
}
