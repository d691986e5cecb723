//! Business logic helpers for recording shared expenses.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::currency::Money;
use crate::ledger::{Expense, TripLedger};

/// Input for a new shared expense, before splits are derived.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub payer_id: Uuid,
    pub amount: Money,
    pub description: Option<String>,
    pub expense_date: DateTime<Utc>,
    /// Members sharing the cost, in presentation order. Must be non-empty;
    /// the payer may or may not be among them.
    pub involved: Vec<Uuid>,
}

/// Provides validated CRUD helpers for trip expenses.
///
/// All validation runs before the ledger is touched, so a rejected write
/// leaves no partial state: an expense and its full split set land in the
/// ledger as a single value or not at all.
pub struct ExpenseService;

impl ExpenseService {
    /// Records a new expense split equally among the involved members and
    /// returns its identifier.
    pub fn add(trip: &mut TripLedger, draft: NewExpense) -> ServiceResult<Uuid> {
        Self::validate(trip, &draft)?;
        let expense = Expense::split_equally(
            draft.payer_id,
            draft.amount,
            draft.description,
            draft.expense_date,
            &draft.involved,
        );
        let id = trip.add_expense(expense);
        tracing::debug!(trip = %trip.id, expense = %id, amount = %draft.amount, "expense recorded");
        Ok(id)
    }

    /// Replaces the expense identified by `id` with a fresh draft. Only the
    /// original payer may edit; the splits are rebuilt with the expense as
    /// one unit.
    pub fn update(
        trip: &mut TripLedger,
        id: Uuid,
        requested_by: Uuid,
        draft: NewExpense,
    ) -> ServiceResult<()> {
        let payer_id = trip
            .expense(id)
            .map(|expense| expense.payer_id)
            .ok_or_else(|| ServiceError::Invalid("Expense not found".into()))?;
        if payer_id != requested_by {
            return Err(ServiceError::Invalid(
                "Only the payer can edit an expense".into(),
            ));
        }
        Self::validate(trip, &draft)?;

        let replacement = Expense::split_equally(
            draft.payer_id,
            draft.amount,
            draft.description,
            draft.expense_date,
            &draft.involved,
        );
        let existing = trip
            .expense_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Expense not found".into()))?;
        *existing = Expense { id, ..replacement };
        trip.touch();
        Ok(())
    }

    /// Removes the expense identified by `id`, returning the removed
    /// instance. Only the original payer may delete.
    pub fn remove(trip: &mut TripLedger, id: Uuid, requested_by: Uuid) -> ServiceResult<Expense> {
        let payer_id = trip
            .expense(id)
            .map(|expense| expense.payer_id)
            .ok_or_else(|| ServiceError::Invalid("Expense not found".into()))?;
        if payer_id != requested_by {
            return Err(ServiceError::Invalid(
                "Only the payer can delete an expense".into(),
            ));
        }
        trip.remove_expense(id)
            .ok_or_else(|| ServiceError::Invalid("Expense not found".into()))
    }

    /// Returns a snapshot of the trip's expenses.
    pub fn list(trip: &TripLedger) -> Vec<&Expense> {
        trip.expenses.iter().collect()
    }

    fn validate(trip: &TripLedger, draft: &NewExpense) -> ServiceResult<()> {
        if !draft.amount.is_positive() {
            return Err(ServiceError::Invalid(
                "Expense amount must be positive".into(),
            ));
        }
        if draft.involved.is_empty() {
            return Err(ServiceError::Invalid(
                "An expense needs at least one involved member".into(),
            ));
        }
        if !trip.is_member(draft.payer_id) {
            return Err(ServiceError::Invalid(format!(
                "Payer {} is not a member of this trip",
                draft.payer_id
            )));
        }
        for member_id in &draft.involved {
            if !trip.is_member(*member_id) {
                return Err(ServiceError::Invalid(format!(
                    "Member {} is not a member of this trip",
                    member_id
                )));
            }
        }
        Ok(())
    }
}
