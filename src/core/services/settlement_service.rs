//! Debt minimization: turning net balances into suggested repayments.

use serde::Serialize;
use uuid::Uuid;

use crate::core::services::{BalanceService, ServiceError, ServiceResult};
use crate::currency::{Money, SETTLEMENT_EPSILON};
use crate::ledger::{Member, Settlement, TripLedger};

/// A raw debtor-to-creditor payment produced by the matching algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transfer {
    pub from: Uuid,
    pub to: Uuid,
    pub amount: Money,
}

/// A recommended repayment decorated with both members' display details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestedTransaction {
    pub from: Member,
    pub to: Member,
    pub amount: Money,
}

/// Records real-world repayments and suggests how to zero the trip's
/// outstanding balances.
pub struct SettlementService;

impl SettlementService {
    /// Records a repayment from `payer_id` to `receiver_id` and returns its
    /// identifier.
    pub fn record(
        trip: &mut TripLedger,
        payer_id: Uuid,
        receiver_id: Uuid,
        amount: Money,
    ) -> ServiceResult<Uuid> {
        if !amount.is_positive() {
            return Err(ServiceError::Invalid(
                "Settlement amount must be positive".into(),
            ));
        }
        if payer_id == receiver_id {
            return Err(ServiceError::Invalid(
                "A settlement needs two distinct members".into(),
            ));
        }
        for id in [payer_id, receiver_id] {
            if !trip.is_member(id) {
                return Err(ServiceError::Invalid(format!(
                    "Member {} is not a member of this trip",
                    id
                )));
            }
        }
        let id = trip.add_settlement(Settlement::new(payer_id, receiver_id, amount));
        tracing::debug!(trip = %trip.id, settlement = %id, amount = %amount, "settlement recorded");
        Ok(id)
    }

    /// Returns a snapshot of the trip's settlement history.
    pub fn list(trip: &TripLedger) -> Vec<&Settlement> {
        trip.settlements.iter().collect()
    }

    /// Computes the trip's balances and suggests an ordered list of
    /// repayments that zeroes them, each decorated with member display
    /// details for presentation.
    pub fn suggest(trip: &TripLedger) -> ServiceResult<Vec<SuggestedTransaction>> {
        let balances = BalanceService::compute(trip);
        // Member-list order fixes the tie-break between equal balances.
        let ordered: Vec<(Uuid, Money)> = trip
            .members
            .iter()
            .map(|member| {
                (
                    member.id,
                    balances.get(&member.id).copied().unwrap_or(Money::ZERO),
                )
            })
            .collect();

        settle_balances(&ordered)
            .into_iter()
            .map(|transfer| {
                let from = lookup(trip, transfer.from)?;
                let to = lookup(trip, transfer.to)?;
                Ok(SuggestedTransaction {
                    from,
                    to,
                    amount: transfer.amount,
                })
            })
            .collect()
    }
}

fn lookup(trip: &TripLedger, id: Uuid) -> ServiceResult<Member> {
    trip.member(id)
        .cloned()
        .ok_or_else(|| ServiceError::Invalid(format!("Member {} missing from trip snapshot", id)))
}

/// Greedy largest-creditor/largest-debtor matching over an ordered balance
/// list.
///
/// Members within one minor unit of zero are treated as settled and skipped.
/// Debtors are walked most-negative first, creditors largest first; ties keep
/// their input-list position (stable sort), which makes the output fully
/// deterministic for a given input. Each step transfers
/// `min(|debtor|, creditor)` and advances whichever cursors reached the
/// settled band, so the walk always terminates. The produced count is the
/// greedy pairing's, not a proven global minimum.
pub fn settle_balances(balances: &[(Uuid, Money)]) -> Vec<Transfer> {
    let mut debtors: Vec<(Uuid, Money)> = balances
        .iter()
        .filter(|(_, balance)| *balance < -SETTLEMENT_EPSILON)
        .copied()
        .collect();
    let mut creditors: Vec<(Uuid, Money)> = balances
        .iter()
        .filter(|(_, balance)| *balance > SETTLEMENT_EPSILON)
        .copied()
        .collect();

    debtors.sort_by_key(|(_, balance)| *balance);
    creditors.sort_by(|a, b| b.1.cmp(&a.1));

    let mut transfers = Vec::new();
    let mut debtor_index = 0;
    let mut creditor_index = 0;

    while debtor_index < debtors.len() && creditor_index < creditors.len() {
        let amount = debtors[debtor_index].1.abs().min(creditors[creditor_index].1);
        if amount.is_positive() {
            transfers.push(Transfer {
                from: debtors[debtor_index].0,
                to: creditors[creditor_index].0,
                amount,
            });
        }

        debtors[debtor_index].1 += amount;
        creditors[creditor_index].1 -= amount;

        if debtors[debtor_index].1.abs() <= SETTLEMENT_EPSILON {
            debtor_index += 1;
        }
        if creditors[creditor_index].1.abs() <= SETTLEMENT_EPSILON {
            creditor_index += 1;
        }
    }

    transfers
}
