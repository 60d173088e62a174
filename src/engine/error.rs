use crate::engine::TransactionType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransactionError {
    #[error("{kind} amount must not be negative, got {amount}")]
    NegativeAmount { kind: TransactionType, amount: f64 },

    #[error("{kind} charge must not be negative, got {charge}")]
    NegativeCharge { kind: TransactionType, charge: f64 },

    #[error("{kind} values must be finite numbers")]
    NonFinite { kind: TransactionType },
}

impl TransactionError {
    /// Checks the raw numbers a variant is built from.
    pub(crate) fn validate(
        kind: TransactionType,
        amount: f64,
        charge: f64,
    ) -> Result<(), TransactionError> {
        if !amount.is_finite() || !charge.is_finite() {
            Err(TransactionError::NonFinite { kind })?
        }
        if amount < 0.0 {
            Err(TransactionError::NegativeAmount { kind, amount })?
        }
        if charge < 0.0 {
            Err(TransactionError::NegativeCharge { kind, charge })?
        }
        Ok(())
    }
}
