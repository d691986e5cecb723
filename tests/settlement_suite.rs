use chrono::Utc;
use trip_core::{
    core::services::{BalanceService, ExpenseService, NewExpense, SettlementService},
    currency::{CurrencyCode, Money, SETTLEMENT_EPSILON},
    ledger::{Member, TripLedger},
};
use uuid::Uuid;

fn trip_with_members(names: &[&str]) -> (TripLedger, Vec<Uuid>) {
    let mut trip = TripLedger::new("Roadtrip", CurrencyCode::default());
    let ids = names
        .iter()
        .map(|name| trip.add_member(Member::new(*name)))
        .collect();
    (trip, ids)
}

fn add_expense(trip: &mut TripLedger, payer: Uuid, amount: f64, involved: &[Uuid]) {
    ExpenseService::add(
        trip,
        NewExpense {
            payer_id: payer,
            amount: Money::from_major(amount),
            description: None,
            expense_date: Utc::now(),
            involved: involved.to_vec(),
        },
    )
    .expect("expense should be accepted");
}

#[test]
fn three_member_dinner_scenario() {
    let (mut trip, ids) = trip_with_members(&["A", "B", "C"]);
    add_expense(&mut trip, ids[0], 300.0, &ids);

    let balances = BalanceService::compute(&trip);
    assert_eq!(balances[&ids[0]], Money::from_major(200.0));
    assert_eq!(balances[&ids[1]], Money::from_major(-100.0));
    assert_eq!(balances[&ids[2]], Money::from_major(-100.0));

    let suggestions = SettlementService::suggest(&trip).unwrap();
    assert_eq!(suggestions.len(), 2);
    // Equal debtors keep member-list order: B first, then C.
    assert_eq!(suggestions[0].from.id, ids[1]);
    assert_eq!(suggestions[0].to.id, ids[0]);
    assert_eq!(suggestions[0].amount, Money::from_major(100.0));
    assert_eq!(suggestions[1].from.id, ids[2]);
    assert_eq!(suggestions[1].to.id, ids[0]);
    assert_eq!(suggestions[1].amount, Money::from_major(100.0));
}

#[test]
fn partial_repayment_shrinks_the_suggestion_list() {
    let (mut trip, ids) = trip_with_members(&["A", "B", "C"]);
    add_expense(&mut trip, ids[0], 90.0, &ids);
    SettlementService::record(&mut trip, ids[1], ids[0], Money::from_major(30.0)).unwrap();

    let balances = BalanceService::compute(&trip);
    assert_eq!(balances[&ids[0]], Money::from_major(30.0));
    assert_eq!(balances[&ids[1]], Money::ZERO);
    assert_eq!(balances[&ids[2]], Money::from_major(-30.0));

    let suggestions = SettlementService::suggest(&trip).unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].from.id, ids[2]);
    assert_eq!(suggestions[0].to.id, ids[0]);
    assert_eq!(suggestions[0].amount, Money::from_major(30.0));
}

#[test]
fn single_member_trip_settles_with_itself() {
    let (mut trip, ids) = trip_with_members(&["A"]);
    add_expense(&mut trip, ids[0], 150.0, &ids);

    let expense = &trip.expenses[0];
    assert_eq!(expense.splits.len(), 1);
    assert_eq!(expense.splits[0].amount_owed, expense.amount);

    let balances = BalanceService::compute(&trip);
    assert_eq!(balances[&ids[0]], Money::ZERO);
    assert!(SettlementService::suggest(&trip).unwrap().is_empty());
}

#[test]
fn balances_conserve_across_operation_sequences() {
    let (mut trip, ids) = trip_with_members(&["A", "B", "C", "D"]);
    add_expense(&mut trip, ids[0], 100.0, &ids);
    add_expense(&mut trip, ids[1], 33.33, &[ids[1], ids[2]]);
    add_expense(&mut trip, ids[3], 250.10, &[ids[0], ids[2], ids[3]]);
    SettlementService::record(&mut trip, ids[2], ids[0], Money::from_major(20.0)).unwrap();
    SettlementService::record(&mut trip, ids[1], ids[3], Money::from_major(5.55)).unwrap();

    let total: Money = BalanceService::compute(&trip).into_values().sum();
    assert_eq!(total, Money::ZERO);
}

#[test]
fn applying_every_suggestion_zeroes_all_balances() {
    let (mut trip, ids) = trip_with_members(&["A", "B", "C", "D", "E"]);
    add_expense(&mut trip, ids[0], 123.45, &ids);
    add_expense(&mut trip, ids[1], 99.99, &[ids[0], ids[1], ids[4]]);
    add_expense(&mut trip, ids[2], 310.0, &[ids[2], ids[3]]);

    let suggestions = SettlementService::suggest(&trip).unwrap();
    for suggestion in &suggestions {
        SettlementService::record(&mut trip, suggestion.from.id, suggestion.to.id, suggestion.amount)
            .unwrap();
    }

    for (member, balance) in BalanceService::compute(&trip) {
        assert!(
            balance.abs() <= SETTLEMENT_EPSILON,
            "member {member} still has balance {balance}"
        );
    }
}

#[test]
fn suggestions_are_deterministic_for_a_fixed_ledger() {
    let (mut trip, ids) = trip_with_members(&["A", "B", "C", "D"]);
    add_expense(&mut trip, ids[0], 200.0, &ids);
    add_expense(&mut trip, ids[1], 80.0, &[ids[1], ids[2], ids[3]]);

    let first = SettlementService::suggest(&trip).unwrap();
    let second = SettlementService::suggest(&trip).unwrap();
    assert_eq!(first, second);
}

#[test]
fn uneven_split_remainders_settle_cleanly() {
    let (mut trip, ids) = trip_with_members(&["A", "B", "C"]);
    add_expense(&mut trip, ids[0], 100.0, &ids);

    let expense = &trip.expenses[0];
    assert_eq!(expense.split_total(), Money::from_major(100.0));

    let mut suggestions = SettlementService::suggest(&trip).unwrap();
    for suggestion in suggestions.drain(..) {
        SettlementService::record(&mut trip, suggestion.from.id, suggestion.to.id, suggestion.amount)
            .unwrap();
    }
    for balance in BalanceService::compute(&trip).into_values() {
        assert!(balance.abs() <= SETTLEMENT_EPSILON);
    }
}
