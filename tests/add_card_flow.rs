//! End-to-end tests of the add-card flow against a simulated
//! presentation layer that pushes and pops its own navigation stack.

use backstack::card::{AddCardFlow, AddCardStep, CardData};
use backstack::core::{Action, Snapshot, Step};
use backstack::engine::TransitionEvent;
use backstack::policy::PolicyViolation;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

fn card_x() -> CardData {
    CardData::new("Ada Lovelace", "4111 1111 1111 1111", 9, 2030, "321").unwrap()
}

/// Mirrors what a navigation controller does with each action.
async fn navigation_stack(
    mut events: broadcast::Receiver<TransitionEvent<AddCardStep>>,
) -> Vec<Vec<String>> {
    let mut stack: Vec<String> = Vec::new();
    let mut frames = Vec::new();

    loop {
        match events.recv().await {
            Ok(event) => {
                match event.action {
                    Action::Next { to } if to.is_inactive() => stack.clear(),
                    Action::Next { to } => stack.push(to.name().to_string()),
                    Action::Previous => {
                        stack.pop();
                    }
                }
                frames.push(stack.clone());
            }
            Err(RecvError::Lagged(_)) => continue,
            Err(RecvError::Closed) => break,
        }
    }

    frames
}

#[test]
fn scenario_start_from_inactive() {
    let mut flow = AddCardFlow::new();
    flow.start();

    let snapshot = flow.snapshot();
    assert_eq!(snapshot.current(), &AddCardStep::CardDetails);
    assert_eq!(snapshot.history(), &[AddCardStep::Inactive]);
}

#[test]
fn scenario_advance_to_billing_address() {
    let mut flow = AddCardFlow::new();
    flow.start();
    flow.add_billing_address(card_x()).unwrap();

    let snapshot = flow.snapshot();
    assert_eq!(snapshot.current(), &AddCardStep::BillingAddress(card_x()));
    assert_eq!(
        snapshot.history(),
        &[AddCardStep::Inactive, AddCardStep::CardDetails]
    );
}

#[test]
fn scenario_back_from_billing_address() {
    let mut flow = AddCardFlow::new();
    flow.start();
    flow.add_billing_address(card_x()).unwrap();
    flow.back();

    let snapshot = flow.snapshot();
    assert_eq!(snapshot.current(), &AddCardStep::CardDetails);
    assert_eq!(snapshot.history(), &[AddCardStep::Inactive]);
}

#[test]
fn scenario_end_from_billing_address() {
    let mut flow = AddCardFlow::new();
    flow.start();
    flow.add_billing_address(card_x()).unwrap();
    let mut events = flow.subscribe();
    flow.end();

    let snapshot = flow.snapshot();
    assert_eq!(snapshot.current(), &AddCardStep::Inactive);
    assert_eq!(
        snapshot.history(),
        &[
            AddCardStep::Inactive,
            AddCardStep::CardDetails,
            AddCardStep::BillingAddress(card_x()),
        ]
    );
    assert_eq!(
        events.try_recv().unwrap().action,
        Action::next(AddCardStep::Inactive)
    );
}

#[test]
fn backing_out_of_card_details_deactivates_flow() {
    let mut flow = AddCardFlow::new();
    flow.start();
    flow.back();

    assert_eq!(flow.snapshot(), Snapshot::inactive());
    assert!(!flow.engine().is_active());
}

#[tokio::test]
async fn presentation_layer_mirrors_engine() {
    let mut flow = AddCardFlow::new();
    let subscriber = tokio::spawn(navigation_stack(flow.subscribe()));

    flow.start();
    flow.add_billing_address(card_x()).unwrap();
    flow.back();
    flow.add_billing_address(card_x()).unwrap();
    flow.end();
    drop(flow);

    let frames = subscriber.await.unwrap();
    assert_eq!(
        frames,
        vec![
            vec!["CardDetails".to_string()],
            vec!["CardDetails".to_string(), "BillingAddress".to_string()],
            vec!["CardDetails".to_string()],
            vec!["CardDetails".to_string(), "BillingAddress".to_string()],
            vec![],
        ]
    );
}

#[tokio::test]
async fn multiple_subscribers_see_same_events() {
    let mut flow = AddCardFlow::new();
    let first = tokio::spawn(navigation_stack(flow.subscribe()));
    let second = tokio::spawn(navigation_stack(flow.subscribe()));

    flow.start();
    flow.add_billing_address(card_x()).unwrap();
    drop(flow);

    assert_eq!(first.await.unwrap(), second.await.unwrap());
}

#[tokio::test]
async fn dropping_flow_closes_channels() {
    let flow = AddCardFlow::new();
    let mut events = flow.subscribe();
    let mut snapshots = flow.watch();
    drop(flow);

    assert!(matches!(events.recv().await, Err(RecvError::Closed)));
    assert!(snapshots.changed().await.is_err());
}

#[tokio::test]
async fn watcher_wakes_on_transition() {
    let mut flow = AddCardFlow::new();
    let mut snapshots = flow.watch();

    let watcher = tokio::spawn(async move {
        snapshots.changed().await.unwrap();
        snapshots.borrow_and_update().current().clone()
    });

    flow.start();
    assert_eq!(watcher.await.unwrap(), AddCardStep::CardDetails);
}

#[test]
fn rejected_move_is_reported_not_applied() {
    let mut flow = AddCardFlow::new();
    let mut events = flow.subscribe();

    let err = flow.add_billing_address(card_x()).unwrap_err();

    assert_eq!(err.violations().len(), 1);
    assert_eq!(flow.snapshot(), Snapshot::inactive());
    assert!(events.try_recv().is_err());
}

#[test]
fn snapshot_with_invalid_card_fails_to_deserialize() {
    let json = r#"{
        "current": {
            "BillingAddress": {
                "owner_name": "",
                "number": "1",
                "expiry_month": 99,
                "expiry_year": 2030,
                "security_code": "123"
            }
        },
        "history": ["Inactive", "CardDetails"]
    }"#;

    assert!(serde_json::from_str::<Snapshot<AddCardStep>>(json).is_err());
}

#[test]
fn snapshot_roundtrip_keeps_card() {
    let mut flow = AddCardFlow::new();
    flow.start();
    flow.add_billing_address(card_x()).unwrap();

    let json = serde_json::to_string(&flow.snapshot()).unwrap();
    let restored: Snapshot<AddCardStep> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, flow.snapshot());
    assert_eq!(restored.current().card_data().unwrap().last_four(), "1111");
}

#[test]
fn advancing_after_end_is_rejected() {
    let mut flow = AddCardFlow::new();
    flow.start();
    flow.end();
    let before = flow.snapshot();

    let err = flow.add_billing_address(card_x()).unwrap_err();

    assert!(err
        .violations()
        .iter()
        .any(|v| matches!(v, PolicyViolation::FlowInactive { .. })));
    assert_eq!(flow.snapshot(), before);
}
