mod deposit;
mod error;
mod ledger;
mod record;
mod transaction;
mod transaction_snapshot;
mod withdrawal;

pub use deposit::Deposit;
pub use error::TransactionError;
pub use ledger::TransactionList;
pub use record::{InputRecord, RecordError, RecordType};
pub use transaction::{TIMESTAMP_FORMAT, Transaction, TransactionHeader, TransactionType};
pub use transaction_snapshot::TransactionSnapshot;
pub use withdrawal::Withdrawal;
