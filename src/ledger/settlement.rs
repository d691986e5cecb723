use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::Money;

/// A real-world repayment from `payer_id` to `receiver_id` that offsets the
/// pair's computed balances. Settlements are immutable once recorded;
/// corrections are modeled as further settlements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settlement {
    pub id: Uuid,
    pub payer_id: Uuid,
    pub receiver_id: Uuid,
    pub amount: Money,
    pub created_at: DateTime<Utc>,
}

impl Settlement {
    pub fn new(payer_id: Uuid, receiver_id: Uuid, amount: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            payer_id,
            receiver_id,
            amount,
            created_at: Utc::now(),
        }
    }
}
