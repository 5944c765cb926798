use super::{TRIP, create_test_service, money, seed_trip, settlement, spend};
use crate::core::models::Debt;
use crate::core::money::Money;
use rust_decimal_macros::dec;

#[tokio::test]
async fn balances_replay_expenses_into_net_positions() {
    let (service, _storage, directory) = create_test_service();
    seed_trip(&directory, Some(money(1000))).await;

    service
        .create_expense(spend(
            "alice",
            money(90),
            "food",
            &[
                ("alice", money(30)),
                ("bob", money(30)),
                ("carol", money(30)),
            ],
        ))
        .await
        .unwrap();

    let balances = service.calculate_balances(TRIP).await.unwrap();
    assert_eq!(balances.participants.len(), 3);

    let alice = balances
        .participants
        .iter()
        .find(|p| p.user_id == "alice")
        .unwrap();
    assert_eq!(alice.total_paid, money(90));
    assert_eq!(alice.total_owed, money(30));
    assert_eq!(alice.net_balance, money(60));

    let bob = balances
        .participants
        .iter()
        .find(|p| p.user_id == "bob")
        .unwrap();
    assert_eq!(bob.net_balance, money(-30));

    // Two debts for three participants, n - 1.
    assert_eq!(
        balances.debts,
        vec![
            Debt {
                from: "bob".to_string(),
                to: "alice".to_string(),
                amount: money(30),
            },
            Debt {
                from: "carol".to_string(),
                to: "alice".to_string(),
                amount: money(30),
            },
        ]
    );
}

#[tokio::test]
async fn settlements_offset_balances_but_are_not_spend() {
    let (service, _storage, directory) = create_test_service();
    seed_trip(&directory, Some(money(1000))).await;

    service
        .create_expense(spend(
            "alice",
            money(90),
            "food",
            &[
                ("alice", money(30)),
                ("bob", money(30)),
                ("carol", money(30)),
            ],
        ))
        .await
        .unwrap();
    service
        .create_expense(settlement("bob", money(30), &[("alice", money(30))]))
        .await
        .unwrap();

    let balances = service.calculate_balances(TRIP).await.unwrap();

    let bob = balances
        .participants
        .iter()
        .find(|p| p.user_id == "bob")
        .unwrap();
    assert_eq!(bob.settlements_paid, money(30));
    assert_eq!(bob.net_balance, Money::ZERO);

    let alice = balances
        .participants
        .iter()
        .find(|p| p.user_id == "alice")
        .unwrap();
    assert_eq!(alice.settlements_received, money(30));
    assert_eq!(alice.net_balance, money(30));

    assert_eq!(
        balances.debts,
        vec![Debt {
            from: "carol".to_string(),
            to: "alice".to_string(),
            amount: money(30),
        }]
    );
}

#[tokio::test]
async fn net_balances_conserve_to_zero() {
    let (service, _storage, directory) = create_test_service();
    seed_trip(&directory, None).await;

    service
        .create_expense(spend(
            "alice",
            money(100),
            "lodging",
            &[
                ("alice", Money::new(dec!(33.33))),
                ("bob", Money::new(dec!(33.33))),
                ("carol", Money::new(dec!(33.34))),
            ],
        ))
        .await
        .unwrap();
    service
        .create_expense(spend(
            "bob",
            Money::new(dec!(59.99)),
            "transport",
            &[
                ("alice", Money::new(dec!(19.99))),
                ("bob", money(20)),
                ("carol", money(20)),
            ],
        ))
        .await
        .unwrap();
    service
        .create_expense(settlement("carol", money(10), &[("alice", money(10))]))
        .await
        .unwrap();

    let balances = service.calculate_balances(TRIP).await.unwrap();
    let total: Money = balances
        .participants
        .iter()
        .map(|p| p.net_balance)
        .sum();
    assert!(total.is_effectively_zero());
}

#[tokio::test]
async fn stale_participant_references_are_skipped() {
    let (service, _storage, directory) = create_test_service();
    seed_trip(&directory, None).await;

    service
        .create_expense(spend(
            "alice",
            money(90),
            "food",
            &[
                ("alice", money(30)),
                ("bob", money(30)),
                ("carol", money(30)),
            ],
        ))
        .await
        .unwrap();

    // Carol leaves the trip after the expense was recorded; her split must
    // no longer contribute, and the computation must not fail.
    directory.remove_collaborator(TRIP, "carol").await;

    let balances = service.calculate_balances(TRIP).await.unwrap();
    assert_eq!(balances.participants.len(), 2);
    assert!(balances.participants.iter().all(|p| p.user_id != "carol"));

    let alice = balances
        .participants
        .iter()
        .find(|p| p.user_id == "alice")
        .unwrap();
    assert_eq!(alice.net_balance, money(60));
    assert_eq!(
        balances.debts,
        vec![Debt {
            from: "bob".to_string(),
            to: "alice".to_string(),
            amount: money(30),
        }]
    );
}

#[tokio::test]
async fn unknown_trip_yields_empty_balances() {
    let (service, _storage, _directory) = create_test_service();

    let balances = service.calculate_balances("trip-404").await.unwrap();
    assert!(balances.participants.is_empty());
    assert!(balances.debts.is_empty());
}

#[tokio::test]
async fn participants_carry_display_names() {
    let (service, _storage, directory) = create_test_service();
    seed_trip(&directory, None).await;

    let balances = service.calculate_balances(TRIP).await.unwrap();
    let names: Vec<Option<&str>> = balances
        .participants
        .iter()
        .map(|p| p.name.as_deref())
        .collect();
    assert_eq!(names, vec![Some("Alice"), Some("Bob"), Some("Carol")]);
}
