//! A small ledger of deposits and withdrawals, ordered by timestamp.

pub mod engine;
