use crate::engine::error::TransactionError;
use crate::engine::{Transaction, TransactionHeader, TransactionType};
use chrono::{Local, NaiveDateTime};
use std::fmt;

/// Money taken out, plus a charge proportional to the amount.
/// `percentage` is a fraction: 0.02 means a 2% charge.
#[derive(Debug, Clone, PartialEq)]
pub struct Withdrawal {
    header: TransactionHeader,
    amount: f64,
    percentage: f64,
}

impl Withdrawal {
    pub fn new(amount: f64, percentage: f64) -> Result<Self, TransactionError> {
        Self::at(Local::now().naive_local(), amount, percentage)
    }

    pub fn without_charge(amount: f64) -> Result<Self, TransactionError> {
        Self::new(amount, 0.0)
    }

    pub fn at(
        timestamp: NaiveDateTime,
        amount: f64,
        percentage: f64,
    ) -> Result<Self, TransactionError> {
        TransactionError::validate(TransactionType::Withdrawal, amount, percentage)?;
        Ok(Withdrawal {
            header: TransactionHeader::new(TransactionType::Withdrawal, timestamp),
            amount,
            percentage,
        })
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }
}

impl Transaction for Withdrawal {
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
        self.amount + self.amount * self.percentage
    }
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Amount: {}, Percentage: {}",
            self.header, self.amount, self.percentage
        )
    }
}

impl From<Withdrawal> for Box<dyn Transaction> {
    fn from(withdrawal: Withdrawal) -> Self {
        Box::new(withdrawal)
    }
}
