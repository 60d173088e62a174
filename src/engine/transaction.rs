use chrono::NaiveDateTime;
use std::fmt;

/// Format used whenever a timestamp is rendered or parsed as text.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Deposit => write!(f, "Deposit"),
            TransactionType::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// Fields shared by every transaction variant.
/// Its Display output is the common prefix every variant starts with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionHeader {
    kind: TransactionType,
    timestamp: NaiveDateTime,
}

impl TransactionHeader {
    pub fn new(kind: TransactionType, timestamp: NaiveDateTime) -> Self {
        TransactionHeader { kind, timestamp }
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}

impl fmt::Display for TransactionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type: {}, Date/time: {}",
            self.kind,
            self.timestamp.format(TIMESTAMP_FORMAT)
        )
    }
}

/// A single financial event owned by a `TransactionList`.
///
/// Variants render themselves through `Display`, writing their
/// `TransactionHeader` first and then their own fields.
pub trait Transaction: fmt::Display + fmt::Debug {
    fn kind(&self) -> TransactionType;

    /// Key used by the ledger for ordering and date lookups.
    fn date_time(&self) -> NaiveDateTime;

    fn amount(&self) -> f64;

    /// Net effect of the transaction, including any charge.
    fn compute_cost(&self) -> f64;
}
