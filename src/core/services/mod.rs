pub mod balance_service;
pub mod expense_service;
pub mod settlement_service;

pub use balance_service::BalanceService;
pub use expense_service::{ExpenseService, NewExpense};
pub use settlement_service::{SettlementService, SuggestedTransaction, Transfer};

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
}
