use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{expense::Expense, member::Member, settlement::Settlement};
use crate::currency::CurrencyCode;

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// In-memory snapshot of one trip's ledger activity.
///
/// The snapshot is loaded once from storage, computed over, and discarded;
/// balance and settlement queries never reach back out to storage mid-run.
/// All amounts are denominated in `currency`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripLedger {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub settlements: Vec<Settlement>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "TripLedger::schema_version_default")]
    pub schema_version: u8,
}

impl TripLedger {
    pub fn new(name: impl Into<String>, currency: CurrencyCode) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            currency,
            members: Vec::new(),
            expenses: Vec::new(),
            settlements: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_member(&mut self, member: Member) -> Uuid {
        let id = member.id;
        self.members.push(member);
        self.touch();
        id
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        self.touch();
        id
    }

    pub fn add_settlement(&mut self, settlement: Settlement) -> Uuid {
        let id = settlement.id;
        self.settlements.push(settlement);
        self.touch();
        id
    }

    pub fn member(&self, id: Uuid) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn is_member(&self, id: Uuid) -> bool {
        self.member(id).is_some()
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn expense_mut(&mut self, id: Uuid) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|expense| expense.id == id)
    }

    pub fn remove_expense(&mut self, id: Uuid) -> Option<Expense> {
        let index = self.expenses.iter().position(|expense| expense.id == id)?;
        let removed = self.expenses.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
