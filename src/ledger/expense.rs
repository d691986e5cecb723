use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::Money;

/// Policy used to divide an expense among its involved members.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SplitMethod {
    #[default]
    Equal,
}

/// One member's share of an expense's total cost.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseSplit {
    pub member_id: Uuid,
    pub amount_owed: Money,
}

/// A cost fronted by one member on behalf of a set of involved members.
///
/// The split set is owned by the expense value: an `Expense` cannot be
/// constructed, stored, or loaded without its full complement of splits,
/// which keeps the "splits sum to the expense amount" invariant a matter of
/// construction rather than runtime checking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub payer_id: Uuid,
    pub amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub split_method: SplitMethod,
    pub expense_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub splits: Vec<ExpenseSplit>,
}

impl Expense {
    /// Builds an expense divided equally among `involved`, earlier members
    /// absorbing any minor-unit remainder. The resulting splits sum to
    /// `amount` exactly.
    pub fn split_equally(
        payer_id: Uuid,
        amount: Money,
        description: Option<String>,
        expense_date: DateTime<Utc>,
        involved: &[Uuid],
    ) -> Self {
        let shares = amount.split_even(involved.len());
        let splits = involved
            .iter()
            .zip(shares)
            .map(|(member_id, amount_owed)| ExpenseSplit {
                member_id: *member_id,
                amount_owed,
            })
            .collect();
        Self {
            id: Uuid::new_v4(),
            payer_id,
            amount,
            description,
            split_method: SplitMethod::Equal,
            expense_date,
            created_at: Utc::now(),
            splits,
        }
    }

    /// Sum of the stored split amounts. Always equals `self.amount`.
    pub fn split_total(&self) -> Money {
        self.splits.iter().map(|split| split.amount_owed).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_split_covers_amount_exactly() {
        let members = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let expense = Expense::split_equally(
            members[0],
            Money::from_major(100.0),
            None,
            Utc::now(),
            &members,
        );
        assert_eq!(expense.splits.len(), 3);
        assert_eq!(expense.split_total(), expense.amount);
    }

    #[test]
    fn single_member_split_is_full_amount() {
        let member = Uuid::new_v4();
        let expense = Expense::split_equally(
            member,
            Money::from_major(75.25),
            Some("solo dinner".into()),
            Utc::now(),
            &[member],
        );
        assert_eq!(expense.splits.len(), 1);
        assert_eq!(expense.splits[0].amount_owed, expense.amount);
    }
}
