//! Derivation of per-member net balances from the ledger history.

use std::collections::HashMap;

use uuid::Uuid;

use crate::currency::Money;
use crate::ledger::TripLedger;

/// Computes signed net positions for every trip member.
pub struct BalanceService;

impl BalanceService {
    /// Returns each member's net balance: positive means the member is owed
    /// money overall, negative means the member owes.
    ///
    /// The result is derived fresh from the full expense and settlement
    /// history on every call. Stored split amounts are trusted as-is, never
    /// re-derived from the split policy. The balances always sum to zero:
    /// each expense credits its payer by exactly what its splits debit, and
    /// each settlement is a matching credit/debit pair.
    pub fn compute(trip: &TripLedger) -> HashMap<Uuid, Money> {
        let mut balances: HashMap<Uuid, Money> = trip
            .members
            .iter()
            .map(|member| (member.id, Money::ZERO))
            .collect();

        for expense in &trip.expenses {
            // The payer fronted the full amount.
            *balances.entry(expense.payer_id).or_default() += expense.amount;
            for split in &expense.splits {
                // Each involved member consumed their share.
                *balances.entry(split.member_id).or_default() -= split.amount_owed;
            }
        }

        for settlement in &trip.settlements {
            *balances.entry(settlement.payer_id).or_default() += settlement.amount;
            *balances.entry(settlement.receiver_id).or_default() -= settlement.amount;
        }

        tracing::debug!(
            trip = %trip.id,
            members = balances.len(),
            expenses = trip.expenses.len(),
            settlements = trip.settlements.len(),
            "computed trip balances"
        );
        balances
    }
}
