//! Ledger domain models, persistence-friendly types, and helpers.

pub mod expense;
pub mod member;
pub mod settlement;
pub mod trip;

pub use expense::{Expense, ExpenseSplit, SplitMethod};
pub use member::Member;
pub use settlement::Settlement;
pub use trip::TripLedger;
