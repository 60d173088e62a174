use crate::engine::error::TransactionError;
use crate::engine::{Transaction, TransactionHeader, TransactionType};
use chrono::{Local, NaiveDateTime};
use std::fmt;

/// Money paid in, minus a flat fee.
#[derive(Debug, Clone, PartialEq)]
pub struct Deposit {
    header: TransactionHeader,
    amount: f64,
    fee: f64,
}

impl Deposit {
    /// Deposit stamped with the current local time.
    pub fn new(amount: f64, fee: f64) -> Result<Self, TransactionError> {
        Self::at(Local::now().naive_local(), amount, fee)
    }

    pub fn without_fee(amount: f64) -> Result<Self, TransactionError> {
        Self::new(amount, 0.0)
    }

    pub fn at(timestamp: NaiveDateTime, amount: f64, fee: f64) -> Result<Self, TransactionError> {
        TransactionError::validate(TransactionType::Deposit, amount, fee)?;
        Ok(Deposit {
            header: TransactionHeader::new(TransactionType::Deposit, timestamp),
            amount,
            fee,
        })
    }

    pub fn fee(&self) -> f64 {
        self.fee
    }
}

impl Transaction for Deposit {
    fn kind(&self) -> TransactionType {
        self.header.kind()
    }

    fn date_time(&self) -> NaiveDateTime {
        self.header.timestamp()
    }

    fn amount(&self) -> f64 {
        self.amount
    }

    fn compute_cost(&self) -> f64 {
        self.amount - self.fee
    }
}

impl fmt::Display for Deposit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Amount: {}, Fee: {}", self.header, self.amount, self.fee)
    }
}

impl From<Deposit> for Box<dyn Transaction> {
    fn from(deposit: Deposit) -> Self {
        Box::new(deposit)
    }
}
