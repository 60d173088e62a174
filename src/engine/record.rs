use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

use crate::engine::error::TransactionError;
use crate::engine::{Deposit, TIMESTAMP_FORMAT, Transaction, Withdrawal};

/// One row of raw input, as collected by the presentation layer.
/// `charge` is the flat fee of a deposit or the percentage of a withdrawal.
#[derive(Deserialize, Debug, Clone)]
pub struct InputRecord {
    #[serde(rename = "type")]
    pub typ: RecordType,
    pub amount: f64,
    pub charge: Option<f64>,
    pub timestamp: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Deposit,
    Withdrawal,
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    #[error("Invalid transaction: {0}")]
    Transaction(#[from] TransactionError),
}

impl InputRecord {
    /// Builds the matching variant. A missing timestamp means "now".
    pub fn to_transaction(&self) -> Result<Box<dyn Transaction>, RecordError> {
        let charge = self.charge.unwrap_or(0.0);
        let timestamp = match self.timestamp.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) => Some(NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)?),
        };

        let tx: Box<dyn Transaction> = match (self.typ, timestamp) {
            (RecordType::Deposit, Some(ts)) => Deposit::at(ts, self.amount, charge)?.into(),
            (RecordType::Deposit, None) => Deposit::new(self.amount, charge)?.into(),
            (RecordType::Withdrawal, Some(ts)) => Withdrawal::at(ts, self.amount, charge)?.into(),
            (RecordType::Withdrawal, None) => Withdrawal::new(self.amount, charge)?.into(),
        };
        Ok(tx)
    }
}
