use serde::{Deserialize, Serialize};

use crate::engine::{TIMESTAMP_FORMAT, Transaction};

/// A flat view of a Transaction for the display layer.
/// Numbers are pre-formatted with four decimal places so output is stable across runs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TransactionSnapshot {
    #[serde(rename = "type")]
    pub typ: String,
    pub timestamp: String,
    pub amount: String,
    pub cost: String,
}

impl TransactionSnapshot {
    pub fn of(tx: &dyn Transaction) -> Self {
        TransactionSnapshot {
            typ: tx.kind().to_string(),
            timestamp: tx.date_time().format(TIMESTAMP_FORMAT).to_string(),
            amount: format!("{:.4}", tx.amount()),
            cost: format!("{:.4}", tx.compute_cost()),
        }
    }
}
