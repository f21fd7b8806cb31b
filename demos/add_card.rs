//! Add Card Flow
//!
//! This example wires a simulated presentation layer to the add-card flow.
//!
//! Key concepts:
//! - The flow owns its engine; the screen task owns only a receiver
//! - `Next` pushes a screen, `Previous` pops one
//! - Ending the flow is just `Next` to `Inactive`
//! - A policy rejects illegal moves without touching the snapshot
//!
//! Run with: RUST_LOG=backstack=debug cargo run --example add_card

use backstack::card::{AddCardFlow, AddCardStep, CardData};
use backstack::core::{Action, Step};
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Add Card Flow ===\n");

    let mut flow = AddCardFlow::new();
    let mut events = flow.subscribe();

    let screens = tokio::spawn(async move {
        let mut stack: Vec<AddCardStep> = Vec::new();
        loop {
            match events.recv().await {
                Ok(event) => {
                    match event.action {
                        Action::Next { to } if to.is_inactive() => {
                            println!("  [UI] flow finished, dismissing {} screen(s)", stack.len());
                            stack.clear();
                        }
                        Action::Next { to } => {
                            println!("  [UI] push {}", to.name());
                            stack.push(to);
                        }
                        Action::Previous => {
                            if let Some(screen) = stack.pop() {
                                println!("  [UI] pop {}", screen.name());
                            }
                        }
                    }
                }
                Err(RecvError::Lagged(missed)) => println!("  [UI] missed {missed} event(s)"),
                Err(RecvError::Closed) => break,
            }
        }
    });

    println!("1. Trying to skip ahead before the flow starts");
    let card = CardData::new("Ada Lovelace", "4111 1111 1111 1111", 9, 2030, "321")?;
    if let Err(e) = flow.add_billing_address(card.clone()) {
        println!("   Rejected: {e}");
    }

    println!("\n2. Starting the flow");
    flow.start();

    println!("\n3. Card details entered: {:?}", card);
    flow.add_billing_address(card.clone())?;

    println!("\n4. User taps back");
    flow.back();

    println!("\n5. User continues again");
    flow.add_billing_address(card)?;

    println!("\n6. Billing address submitted");
    flow.end();

    let snapshot = flow.snapshot();
    println!(
        "\nFinal step: {}, history: {:?}",
        snapshot.current().name(),
        snapshot.history().iter().map(|s| s.name()).collect::<Vec<_>>()
    );

    drop(flow);
    screens.await?;

    Ok(())
}
